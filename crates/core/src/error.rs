use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    EmptyQuestionSet,
}
