use std::sync::Arc;

use dioxus::prelude::ReadableExt;
use quiz_core::QuizPhase;
use quiz_core::model::OptionLabel;
use services::{LoadError, QuestionRow, QuestionSource};

use crate::vm::QuizIntent;

use super::test_harness::{SAMPLE_SHEET, setup_view_harness, setup_view_harness_with_source};

struct FailingSource;

#[async_trait::async_trait]
impl QuestionSource for FailingSource {
    async fn fetch_rows(&self) -> Result<Vec<QuestionRow>, LoadError> {
        Err(LoadError::NotAnArray)
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// A source whose request never completes.
struct PendingSource;

#[async_trait::async_trait]
impl QuestionSource for PendingSource {
    async fn fetch_rows(&self) -> Result<Vec<QuestionRow>, LoadError> {
        std::future::pending().await
    }

    fn describe(&self) -> String {
        "pending".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loading_while_fetch_is_pending() {
    let mut harness = setup_view_harness_with_source(Arc::new(PendingSource));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing loading in {html}");
    assert!(!html.contains("Question 1"), "unexpected question in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
    assert!(!html.contains("Idle"), "placeholder text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(SAMPLE_SHEET);
    harness.rebuild();

    let html = harness.drive_until("Question 1 of 3").await;
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Capital of Italy?"), "missing prompt in {html}");
    assert!(html.contains("Rome"), "missing option in {html}");
    assert!(html.contains("question-0-option-b"), "missing option b in {html}");
    assert!(!html.contains("question-0-option-c"), "unexpected empty option in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(html.contains("Pause Timer"), "missing pause in {html}");
    assert!(html.contains("Skip"), "missing skip in {html}");
    assert!(html.contains("00:00"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_submit_shows_explanation() {
    let mut harness = setup_view_harness(SAMPLE_SHEET);
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    harness.intent(QuizIntent::Submit);
    let html = harness.render();
    assert!(!html.contains("Explanation:"), "submit without selection in {html}");

    harness.intent(QuizIntent::Select(OptionLabel::A));
    harness.intent(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(
        html.contains("Rome has been the capital since 1871."),
        "missing explanation in {html}"
    );
    assert!(html.contains("Next"), "missing next in {html}");
    assert!(!html.contains("Submit"), "submit still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_runs_to_summary_and_restarts() {
    let mut harness = setup_view_harness(SAMPLE_SHEET);
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    harness.intent(QuizIntent::Select(OptionLabel::A));
    harness.intent(QuizIntent::Submit);
    harness.intent(QuizIntent::Next);

    harness.intent(QuizIntent::Select(OptionLabel::A));
    harness.intent(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Incorrect. Correct: B"), "missing verdict in {html}");
    harness.intent(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Question 3 of 3"), "missing last progress in {html}");
    harness.intent(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Quiz Complete"), "missing summary title in {html}");
    assert!(html.contains("Score: 1 / 3"), "missing score in {html}");
    assert!(html.contains("Incorrect (Correct: B)"), "missing review line in {html}");
    assert!(html.contains("Skipped"), "missing skipped line in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");

    let vm = harness.handles.vm();
    let phase = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(crate::vm::QuizVm::phase));
    assert_eq!(phase, Some(QuizPhase::Finished));

    harness.intent(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "restart did not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_pause_label_toggles() {
    let mut harness = setup_view_harness(SAMPLE_SHEET);
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    harness.intent(QuizIntent::TogglePause);
    let html = harness.render();
    assert!(html.contains("Resume Timer"), "missing resume in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_source(Arc::new(FailingSource));
    harness.rebuild();
    let html = harness.drive_until("Retry").await;
    assert!(html.contains("Could not load questions"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness("[]");
    harness.rebuild();
    let html = harness.drive_until("No questions available.").await;
    assert!(html.contains("No questions available."), "missing empty in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_timer_pauses_resumes_and_resets_per_question() {
    let mut harness = setup_view_harness(SAMPLE_SHEET);
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    harness.advance_secs(3).await;
    let html = harness.render();
    assert!(html.contains("00:03"), "timer did not run in {html}");

    harness.intent(QuizIntent::TogglePause);
    harness.advance_secs(3).await;
    let html = harness.render();
    assert!(html.contains("00:03"), "timer ran while paused in {html}");
    assert!(html.contains("Resume Timer"), "missing resume in {html}");

    harness.intent(QuizIntent::TogglePause);
    harness.advance_secs(2).await;
    let html = harness.render();
    assert!(html.contains("00:05"), "timer did not resume from 3 in {html}");

    harness.intent(QuizIntent::Next);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "missing next question in {html}");
    assert!(html.contains("00:00"), "timer not reset in {html}");

    harness.advance_secs(2).await;
    let html = harness.render();
    assert!(html.contains("00:02"), "single ticker expected in {html}");

    harness.intent(QuizIntent::Select(OptionLabel::B));
    harness.intent(QuizIntent::Submit);
    harness.advance_secs(2).await;
    let html = harness.render();
    assert!(html.contains("00:02"), "timer ran while reviewing in {html}");

    harness.intent(QuizIntent::Next);
    harness.intent(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Quiz Complete"), "missing summary in {html}");
    assert!(html.contains("Time Taken: 00:05"), "missing first time in {html}");
    assert!(html.contains("Time Taken: 00:02"), "missing second time in {html}");
    assert!(html.contains("Total Time: 00:07"), "missing total in {html}");
}
