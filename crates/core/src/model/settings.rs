use thiserror::Error;

/// Default countdown length: ten minutes.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("time limit must be > 0 seconds")]
    InvalidTimeLimit,
}

/// Settings applied to every quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    time_limit_secs: u32,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidTimeLimit` for a zero time limit.
    pub fn new(time_limit_secs: u32) -> Result<Self, SettingsError> {
        if time_limit_secs == 0 {
            return Err(SettingsError::InvalidTimeLimit);
        }
        Ok(Self { time_limit_secs })
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}
