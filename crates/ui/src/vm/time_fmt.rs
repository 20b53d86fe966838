use quiz_core::format_clock;

/// Header label for elapsed time, e.g. `Time Taken: 1:05`.
#[must_use]
pub fn time_taken_label(elapsed_secs: u32) -> String {
    format!("Time Taken: {}", format_clock(elapsed_secs))
}
