#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod rows;
pub mod source;

pub use config::{DEFAULT_SOURCE_URL, SourceConfig};
pub use error::{ConfigError, LoadError, SessionError};
pub use loader::QuizLoaderService;
pub use rows::{QuestionRow, parse_rows};
pub use source::{QuestionSource, SheetQuestionSource, StaticQuestionSource};
