mod label;
mod question;
mod summary;

pub use label::{LabelError, OptionLabel};
pub use question::{DEFAULT_EXPLANATION, Question, QuestionDraft};
pub use summary::{AnswerFeedback, QuestionOutcome, QuestionReview, QuizSummary};
