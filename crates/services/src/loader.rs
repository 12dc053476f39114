use std::sync::Arc;

use tracing::{info, warn};

use quiz_core::QuizSession;
use quiz_core::model::Question;

use crate::error::SessionError;
use crate::source::QuestionSource;

/// Loads questions from a source and starts quiz sessions over them.
#[derive(Clone)]
pub struct QuizLoaderService {
    source: Arc<dyn QuestionSource>,
}

impl QuizLoaderService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch and normalize every question. Issues exactly one source request.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Load` if the source fails.
    pub async fn load_questions(&self) -> Result<Vec<Question>, SessionError> {
        let origin = self.source.describe();
        let rows = self.source.fetch_rows().await.inspect_err(|err| {
            warn!(%origin, error = %err, "failed to load questions");
        })?;

        let questions: Vec<Question> = rows
            .into_iter()
            .map(|row| row.into_draft().build())
            .collect();
        info!(%origin, count = questions.len(), "loaded questions");
        Ok(questions)
    }

    /// Load questions and start a session on the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the source has no questions.
    /// Returns `SessionError::Load` if the source fails.
    pub async fn start_session(&self) -> Result<QuizSession, SessionError> {
        let questions = self.load_questions().await?;
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(QuizSession::new(questions)?)
    }
}

impl std::fmt::Debug for QuizLoaderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizLoaderService")
            .field("source", &self.source.describe())
            .finish()
    }
}
