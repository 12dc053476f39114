use quiz_core::model::{QuestionOutcome, QuizSummary};

use crate::vm::time_fmt::format_clock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub title: String,
    pub time_label: String,
    pub icon: &'static str,
    pub outcome_label: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub score_label: String,
    pub total_time_label: String,
    pub rows: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_quiz_summary(summary: &QuizSummary) -> QuizSummaryVm {
    let rows = summary
        .reviews()
        .iter()
        .map(|review| ReviewRowVm {
            title: format!("Question {}", review.index + 1),
            time_label: format!("Time Taken: {}", format_clock(u64::from(review.seconds))),
            icon: match review.outcome {
                QuestionOutcome::Correct => "✅",
                QuestionOutcome::Incorrect { .. } => "❌",
                QuestionOutcome::Skipped => "",
            },
            outcome_label: review.outcome.to_string(),
            is_correct: review.outcome.is_correct(),
        })
        .collect();

    QuizSummaryVm {
        score_label: format!("Score: {} / {}", summary.score(), summary.total_questions()),
        total_time_label: format!("Total Time: {}", format_clock(summary.total_seconds())),
        rows,
    }
}
