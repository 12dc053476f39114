use std::sync::Arc;

use services::QuizLoaderService;

pub trait UiApp: Send + Sync {
    fn quiz_loader(&self) -> Arc<QuizLoaderService>;

    /// Where questions are loaded from, shown when loading fails.
    fn source_label(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loader: Arc<QuizLoaderService>,
    source_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loader: app.quiz_loader(),
            source_label: app.source_label(),
        }
    }

    #[must_use]
    pub fn quiz_loader(&self) -> Arc<QuizLoaderService> {
        Arc::clone(&self.quiz_loader)
    }

    #[must_use]
    pub fn source_label(&self) -> String {
        self.source_label.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
