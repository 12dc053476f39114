use dioxus::prelude::*;

use crate::vm::{QuizSummaryVm, ReviewRowVm};

#[component]
pub fn SummaryView(summary: QuizSummaryVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-summary",
            h2 { class: "quiz-summary__title", "🎉 Quiz Complete" }
            p { class: "quiz-summary__score", "{summary.score_label}" }
            p { class: "quiz-summary__time", "{summary.total_time_label}" }

            div { class: "quiz-summary__rows",
                for (index, row) in summary.rows.iter().enumerate() {
                    ReviewRow { key: "{index}", row: row.clone() }
                }
            }

            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}

#[component]
fn ReviewRow(row: ReviewRowVm) -> Element {
    let outcome_class = if row.is_correct {
        "quiz-review__outcome quiz-review__outcome--correct"
    } else {
        "quiz-review__outcome quiz-review__outcome--wrong"
    };
    let outcome = if row.icon.is_empty() {
        row.outcome_label.clone()
    } else {
        format!("{} {}", row.icon, row.outcome_label)
    };

    rsx! {
        div { class: "quiz-review",
            p { class: "quiz-review__title", "{row.title}" }
            p { class: "quiz-review__time", "{row.time_label}" }
            p { class: "{outcome_class}", "{outcome}" }
        }
    }
}
