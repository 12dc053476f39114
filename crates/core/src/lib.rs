#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;

pub use error::QuizError;
pub use session::{QuizEvent, QuizPhase, QuizSession, TICK_PERIOD, TimerKey, reduce};
