mod answers;
mod exam;
mod ids;
mod question;
mod settings;

pub use ids::{ExamId, OptionId, ParseIdError, QuestionId};

pub use answers::Answers;
pub use exam::{Exam, ExamError};
pub use question::{AnswerOption, Question, QuestionError};
pub use settings::{DEFAULT_TIME_LIMIT_SECS, QuizSettings, SettingsError};
