use quiz_core::model::{Exam, ExamError, ExamId};

/// The fixed exam catalog, in display order.
///
/// # Errors
///
/// Returns `ExamError` if an entry is malformed.
pub fn builtin_exams() -> Result<Vec<Exam>, ExamError> {
    [
        ("upsc", "UPSC Prelims", "Civil Services Prelims"),
        ("ssc", "SSC CGL", "Staff Selection Commission"),
        ("bank", "Bank PO", "Banking exams"),
    ]
    .into_iter()
    .map(|(id, title, description)| Exam::new(ExamId::new(id), title, description))
    .collect()
}
