use std::sync::Arc;

use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::TICK_PERIOD;
use services::{QuestionSource, QuizLoaderService, StaticQuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

pub const SAMPLE_SHEET: &str = r#"[
    {"Description": "Capitals", "Question": "Capital of Italy?",
     "Option A": "Rome", "Option B": "Milan", "Correct Answer": "a",
     "Explanations": "Rome has been the capital since 1871."},
    {"Description": "Capitals", "Question": "Capital of Spain?",
     "Option A": "Seville", "Option B": "Madrid", "Option C": "Valencia", "Correct Answer": "B"},
    {"Description": "Capitals", "Question": "Capital of Portugal?",
     "Option A": "Porto", "Option B": "Braga", "Option C": "Lisbon", "Correct Answer": "c"}
]"#;

#[derive(Clone)]
struct TestApp {
    quiz_loader: Arc<QuizLoaderService>,
}

impl UiApp for TestApp {
    fn quiz_loader(&self) -> Arc<QuizLoaderService> {
        Arc::clone(&self.quiz_loader)
    }

    fn source_label(&self) -> String {
        "test-source".to_string()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Poll until `needle` shows up in the rendered HTML or attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..10 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    /// Run ready tasks and re-render without letting virtual time pass.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            tokio::task::yield_now().await;
            let _ = tokio::time::timeout(Duration::ZERO, self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Advance a paused tokio clock one tick period at a time.
    pub async fn advance_secs(&mut self, secs: u32) {
        self.settle().await;
        for _ in 0..secs {
            tokio::time::advance(TICK_PERIOD).await;
            self.settle().await;
        }
    }

    pub fn intent(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(sheet: &str) -> ViewHarness {
    let source = StaticQuestionSource::from_json(sheet).expect("valid sheet");
    setup_view_harness_with_source(Arc::new(source))
}

pub fn setup_view_harness_with_source(source: Arc<dyn QuestionSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz_loader: Arc::new(QuizLoaderService::new(source)),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
