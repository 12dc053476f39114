use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::QuizError;
use crate::model::{AnswerFeedback, OptionLabel, Question, QuizSummary};

/// Period of the per-question timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

//
// ─── PHASE & EVENTS ────────────────────────────────────────────────────────────
//

/// Coarse state of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// The current question is open; the timer may run.
    #[default]
    Answering,
    /// An answer was submitted and the explanation is visible. Timer frozen.
    Reviewing,
    /// Every question has been left. Terminal until restart.
    Finished,
}

/// Everything that can happen to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Select(OptionLabel),
    Submit,
    TogglePause,
    /// Next, Skip and Finish all map here.
    Advance,
    Restart,
    /// One timer period elapsed.
    Tick,
}

/// Identity of a running timer.
///
/// A tick source belongs to exactly one key; whenever the key changes (or
/// becomes `None`) the previous source must be stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub question_index: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one run through a fixed list of questions.
///
/// All mutations go through [`QuizSession::apply`]; events that are not
/// valid in the current phase are ignored and reported as `false`.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    current_index: usize,
    answers: BTreeMap<usize, OptionLabel>,
    elapsed_times: Vec<u32>,
    current_elapsed: u32,
    phase: QuizPhase,
    timer_paused: bool,
}

impl QuizSession {
    /// Start a session on the first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestionSet` if `questions` is empty.
    pub fn new(questions: impl Into<Arc<[Question]>>) -> Result<Self, QuizError> {
        let questions = questions.into();
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self {
            questions,
            current_index: 0,
            answers: BTreeMap::new(),
            elapsed_times: Vec::new(),
            current_elapsed: 0,
            phase: QuizPhase::Answering,
            timer_paused: false,
        })
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timer_paused
    }

    /// Label chosen for the current question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<OptionLabel> {
        self.answers.get(&self.current_index).copied()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, OptionLabel> {
        &self.answers
    }

    #[must_use]
    pub fn elapsed_times(&self) -> &[u32] {
        &self.elapsed_times
    }

    /// Seconds spent on the question in progress.
    #[must_use]
    pub fn current_elapsed(&self) -> u32 {
        self.current_elapsed
    }

    /// `(current_index + 1) / total * 100`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        (self.current_index + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.phase == QuizPhase::Answering && !self.timer_paused
    }

    /// Key of the tick source that should currently exist, if any.
    #[must_use]
    pub fn timer_key(&self) -> Option<TimerKey> {
        self.timer_running().then_some(TimerKey {
            question_index: self.current_index,
        })
    }

    /// Feedback for the submitted answer while reviewing.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if self.phase != QuizPhase::Reviewing {
            return None;
        }
        self.selected()
            .map(|label| AnswerFeedback::for_answer(self.current_question(), label))
    }

    /// Final score and per-question review, available once finished.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        self.is_finished().then(|| {
            QuizSummary::from_session_parts(&self.questions, &self.answers, &self.elapsed_times)
        })
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Apply an event in place. Returns `true` if the session changed.
    pub fn apply(&mut self, event: QuizEvent) -> bool {
        match event {
            QuizEvent::Select(label) => self.select(label),
            QuizEvent::Submit => self.submit(),
            QuizEvent::TogglePause => self.toggle_pause(),
            QuizEvent::Advance => self.advance(),
            QuizEvent::Restart => self.restart(),
            QuizEvent::Tick => self.tick(),
        }
    }

    fn select(&mut self, label: OptionLabel) -> bool {
        if self.phase != QuizPhase::Answering || !self.current_question().has_option(label) {
            return false;
        }
        self.answers.insert(self.current_index, label) != Some(label)
    }

    fn submit(&mut self) -> bool {
        if self.phase != QuizPhase::Answering || self.selected().is_none() {
            return false;
        }
        self.phase = QuizPhase::Reviewing;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        if self.phase != QuizPhase::Answering {
            return false;
        }
        self.timer_paused = !self.timer_paused;
        true
    }

    fn advance(&mut self) -> bool {
        if self.phase == QuizPhase::Finished {
            return false;
        }
        self.elapsed_times.push(self.current_elapsed);
        self.current_elapsed = 0;
        self.timer_paused = false;
        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current_index += 1;
            self.phase = QuizPhase::Answering;
        }
        true
    }

    fn restart(&mut self) -> bool {
        let fresh = Self {
            questions: Arc::clone(&self.questions),
            current_index: 0,
            answers: BTreeMap::new(),
            elapsed_times: Vec::new(),
            current_elapsed: 0,
            phase: QuizPhase::Answering,
            timer_paused: false,
        };
        let changed = *self != fresh;
        *self = fresh;
        changed
    }

    fn tick(&mut self) -> bool {
        if !self.timer_running() {
            return false;
        }
        self.current_elapsed = self.current_elapsed.saturating_add(1);
        true
    }
}

/// Pure form of [`QuizSession::apply`]: `(state, event) -> state`.
#[must_use]
pub fn reduce(session: &QuizSession, event: QuizEvent) -> QuizSession {
    let mut next = session.clone();
    next.apply(event);
    next
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current_index", &self.current_index)
            .field("answers", &self.answers)
            .field("elapsed_times", &self.elapsed_times)
            .field("current_elapsed", &self.current_elapsed)
            .field("phase", &self.phase)
            .field("timer_paused", &self.timer_paused)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
