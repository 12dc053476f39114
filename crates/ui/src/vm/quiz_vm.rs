use quiz_core::model::{AnswerFeedback, OptionLabel};
use quiz_core::{QuizEvent, QuizPhase, QuizSession, TimerKey};
use services::QuizLoaderService;
use tracing::debug;

use crate::views::ViewError;
use crate::vm::quiz_summary_vm::{QuizSummaryVm, map_quiz_summary};
use crate::vm::time_fmt::format_clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionLabel),
    Submit,
    TogglePause,
    /// Skip while answering, Next/Finish while reviewing.
    Next,
    Restart,
}

impl QuizIntent {
    fn event(self) -> QuizEvent {
        match self {
            Self::Select(label) => QuizEvent::Select(label),
            Self::Submit => QuizEvent::Submit,
            Self::TogglePause => QuizEvent::TogglePause,
            Self::Next => QuizEvent::Advance,
            Self::Restart => QuizEvent::Restart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub label: OptionLabel,
    pub letter: char,
    pub text: String,
    pub checked: bool,
    pub input_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub verdict: String,
    pub explanation: String,
}

/// Everything the question card renders, detached from the session.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionScreenVm {
    pub progress_label: String,
    pub progress_percent: f64,
    pub timer_label: String,
    pub description: String,
    pub prompt: String,
    pub radio_name: String,
    pub options: Vec<OptionRowVm>,
    pub feedback: Option<FeedbackVm>,
    pub reviewing: bool,
    pub paused: bool,
    pub pause_label: &'static str,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen {
    Question(QuestionScreenVm),
    Summary(QuizSummaryVm),
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn timer_key(&self) -> Option<TimerKey> {
        self.session.timer_key()
    }

    /// Apply a user intent. Returns `false` when the intent is not valid now.
    pub fn dispatch(&mut self, intent: QuizIntent) -> bool {
        let applied = self.session.apply(intent.event());
        if !applied {
            debug!(?intent, phase = ?self.session.phase(), "ignored quiz intent");
        }
        applied
    }

    pub fn tick(&mut self) -> bool {
        self.session.apply(QuizEvent::Tick)
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match self.session.summary() {
            Some(summary) => QuizScreen::Summary(map_quiz_summary(&summary)),
            None => QuizScreen::Question(self.question_screen()),
        }
    }

    fn question_screen(&self) -> QuestionScreenVm {
        let session = &self.session;
        let index = session.current_index();
        let question = session.current_question();
        let selected = session.selected();

        let options = question
            .options()
            .map(|(label, text)| OptionRowVm {
                label,
                letter: label.display_letter(),
                text: text.to_string(),
                checked: selected == Some(label),
                input_id: format!("question-{index}-option-{label}"),
            })
            .collect();

        let feedback = session.feedback().map(|feedback| {
            let (is_correct, verdict) = match feedback {
                AnswerFeedback::Correct => (true, "✅ Correct!".to_string()),
                AnswerFeedback::Incorrect { correct } => {
                    (false, format!("❌ Incorrect. Correct: {correct}"))
                }
            };
            FeedbackVm {
                is_correct,
                verdict,
                explanation: question.explanation().to_string(),
            }
        });

        QuestionScreenVm {
            progress_label: format!("Question {} of {}", index + 1, session.total_questions()),
            progress_percent: session.progress_percent(),
            timer_label: format_clock(u64::from(session.current_elapsed())),
            description: question.description().to_string(),
            prompt: question.prompt().to_string(),
            radio_name: format!("question-{index}"),
            options,
            feedback,
            reviewing: session.phase() == QuizPhase::Reviewing,
            paused: session.is_paused(),
            pause_label: if session.is_paused() {
                "Resume Timer"
            } else {
                "Pause Timer"
            },
            next_label: if session.is_last_question() {
                "Finish"
            } else {
                "Next"
            },
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the source has no questions.
/// Returns `ViewError::LoadFailed` for source failures.
pub async fn start_quiz(loader: &QuizLoaderService) -> Result<QuizVm, ViewError> {
    let session = match loader.start_session().await {
        Ok(session) => session,
        Err(services::SessionError::Empty) => return Err(ViewError::EmptyQuiz),
        Err(_) => return Err(ViewError::LoadFailed),
    };

    Ok(QuizVm::new(session))
}
