mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    ExamCardVm, OptionVm, QuestionVm, QuizPageVm, ResultsVm, build_page, map_active_questions,
    map_exam_cards, map_review_questions,
};
pub use time_fmt::time_taken_label;
