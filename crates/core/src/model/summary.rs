use std::collections::BTreeMap;
use std::fmt;

use crate::model::{OptionLabel, Question};

/// Result of a single question once the quiz is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    /// Answered, but not with the correct label (shown uppercase).
    Incorrect { correct: String },
    Skipped,
}

impl QuestionOutcome {
    fn evaluate(question: &Question, answer: Option<OptionLabel>) -> Self {
        match answer {
            None => Self::Skipped,
            Some(label) if question.is_correct(label) => Self::Correct,
            Some(_) => Self::Incorrect {
                correct: question.correct_label_display(),
            },
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for QuestionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct"),
            Self::Incorrect { correct } => write!(f, "Incorrect (Correct: {correct})"),
            Self::Skipped => f.write_str("Skipped"),
        }
    }
}

/// Immediate feedback for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect { correct: String },
}

impl AnswerFeedback {
    pub(crate) fn for_answer(question: &Question, answer: OptionLabel) -> Self {
        if question.is_correct(answer) {
            Self::Correct
        } else {
            Self::Incorrect {
                correct: question.correct_label_display(),
            }
        }
    }
}

/// Per-question line of the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub index: usize,
    pub seconds: u32,
    pub outcome: QuestionOutcome,
}

/// Aggregate result of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: usize,
    total_seconds: u64,
    reviews: Vec<QuestionReview>,
}

impl QuizSummary {
    /// Score every question against the recorded answers.
    ///
    /// Missing elapsed entries count as zero seconds.
    #[must_use]
    pub fn from_session_parts(
        questions: &[Question],
        answers: &BTreeMap<usize, OptionLabel>,
        elapsed_times: &[u32],
    ) -> Self {
        let reviews: Vec<_> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionReview {
                index,
                seconds: elapsed_times.get(index).copied().unwrap_or(0),
                outcome: QuestionOutcome::evaluate(question, answers.get(&index).copied()),
            })
            .collect();

        let score = reviews.iter().filter(|r| r.outcome.is_correct()).count();
        let total_seconds = elapsed_times.iter().map(|s| u64::from(*s)).sum();

        Self {
            score,
            total_seconds,
            reviews,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    #[must_use]
    pub fn reviews(&self) -> &[QuestionReview] {
        &self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionDraft;

    fn question(correct: &str) -> Question {
        QuestionDraft {
            prompt: "Pick one".into(),
            options: ["a".into(), "b".into(), "c".into(), String::new(), String::new()],
            correct_answer: correct.into(),
            ..QuestionDraft::default()
        }
        .build()
    }

    #[test]
    fn summary_scores_and_labels_lines() {
        let questions = vec![question("a"), question("B"), question("c")];
        let mut answers = BTreeMap::new();
        answers.insert(0, OptionLabel::A);
        answers.insert(1, OptionLabel::A);

        let summary = QuizSummary::from_session_parts(&questions, &answers, &[3, 5, 7]);

        assert_eq!(summary.score(), 1);
        assert_eq!(summary.total_questions(), 3);
        assert_eq!(summary.total_seconds(), 15);
        let lines: Vec<_> = summary
            .reviews()
            .iter()
            .map(|r| r.outcome.to_string())
            .collect();
        assert_eq!(lines, vec!["Correct", "Incorrect (Correct: B)", "Skipped"]);
    }

    #[test]
    fn missing_elapsed_entries_count_as_zero() {
        let questions = vec![question("a"), question("b")];
        let summary = QuizSummary::from_session_parts(&questions, &BTreeMap::new(), &[4]);
        assert_eq!(summary.reviews()[1].seconds, 0);
        assert_eq!(summary.total_seconds(), 4);
        assert_eq!(summary.score(), 0);
    }
}
