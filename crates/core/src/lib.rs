#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
pub mod timer;

pub use error::Error;
pub use session::{QuizScreen, QuizSession, SelectOutcome, SubmitOutcome};
pub use timer::{Countdown, TICK_INTERVAL, TickOutcome, TimerEpoch, format_clock};
