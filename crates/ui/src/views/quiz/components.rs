use dioxus::prelude::*;

use crate::vm::{FeedbackVm, OptionRowVm, QuestionScreenVm, QuizIntent};

#[component]
pub(super) fn QuestionCard(screen: QuestionScreenVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-question",
            ProgressHeader {
                label: screen.progress_label.clone(),
                percent: screen.progress_percent,
            }
            TimerBadge { label: screen.timer_label.clone(), paused: screen.paused }

            div { class: "quiz-card",
                p { class: "quiz-card__description", "{screen.description}" }
                p { class: "quiz-card__prompt", "{screen.prompt}" }

                div { class: "quiz-options",
                    for option in screen.options.iter() {
                        OptionRow {
                            key: "{option.input_id}",
                            option: option.clone(),
                            name: screen.radio_name.clone(),
                            disabled: screen.reviewing,
                            on_intent,
                        }
                    }
                }

                if let Some(feedback) = screen.feedback.clone() {
                    ExplanationPanel { feedback }
                }

                div { class: "quiz-controls",
                    if screen.reviewing {
                        button {
                            class: "btn btn-success",
                            id: "quiz-next",
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::Next),
                            "{screen.next_label}"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            id: "quiz-submit",
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::Submit),
                            "Submit"
                        }
                        button {
                            class: "btn btn-warning",
                            id: "quiz-pause",
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::TogglePause),
                            "{screen.pause_label}"
                        }
                        button {
                            class: "btn btn-muted",
                            id: "quiz-skip",
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::Next),
                            "Skip"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressHeader(label: String, percent: f64) -> Element {
    rsx! {
        div { class: "quiz-progress",
            div { class: "quiz-progress__label", "{label}" }
            div { class: "quiz-progress__track",
                div { class: "quiz-progress__bar", style: "width: {percent}%" }
            }
        }
    }
}

#[component]
fn TimerBadge(label: String, paused: bool) -> Element {
    let class = if paused {
        "quiz-timer quiz-timer--paused"
    } else {
        "quiz-timer"
    };
    rsx! {
        div { class: "{class}", id: "quiz-timer", "⏱ {label}" }
    }
}

#[component]
fn OptionRow(
    option: OptionRowVm,
    name: String,
    disabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let label = option.label;
    rsx! {
        div { class: "quiz-option",
            input {
                r#type: "radio",
                id: "{option.input_id}",
                name: "{name}",
                value: "{label}",
                checked: option.checked,
                disabled,
                onchange: move |_| on_intent.call(QuizIntent::Select(label)),
            }
            label { class: "quiz-option__label", r#for: "{option.input_id}",
                strong { "{option.letter}." }
                " {option.text}"
            }
        }
    }
}

#[component]
fn ExplanationPanel(feedback: FeedbackVm) -> Element {
    let verdict_class = if feedback.is_correct {
        "quiz-feedback__verdict quiz-feedback__verdict--correct"
    } else {
        "quiz-feedback__verdict quiz-feedback__verdict--wrong"
    };
    rsx! {
        div { class: "quiz-feedback",
            p { class: "{verdict_class}", "{feedback.verdict}" }
            p { class: "quiz-feedback__explanation",
                strong { "Explanation:" }
                " {feedback.explanation}"
            }
        }
    }
}
