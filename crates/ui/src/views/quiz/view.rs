use dioxus::prelude::*;

use crate::context::AppContext;
use crate::timer::use_quiz_timer;
use crate::views::{SummaryView, ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizIntent, QuizScreen, QuizVm, start_quiz};

use super::components::QuestionCard;
use super::keyboard::intent_for_key;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.quiz_loader();
    let source_label = ctx.source_label();

    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let loader = loader.clone();
        let mut vm = vm;

        async move {
            let started = start_quiz(&loader).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    use_quiz_timer(vm);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.dispatch(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let retry = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Some(phase) = vm.read().as_ref().map(QuizVm::phase) else {
            return;
        };
        if let Some(intent) = intent_for_key(&evt.data.key(), phase) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let state = view_state_from_resource(&resource);
    let screen = vm.read().as_ref().map(QuizVm::screen);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "quiz-loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        p { "{err.message()}" }
                        if err.is_retryable() {
                            p { class: "quiz-error__source", "Source: {source_label}" }
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-retry",
                                r#type: "button",
                                onclick: move |_| retry.call(()),
                                "Retry"
                            }
                        }
                    }
                },
                ViewState::Ready(()) => match screen {
                    Some(QuizScreen::Question(screen)) => rsx! {
                        QuestionCard { screen, on_intent: dispatch_intent }
                    },
                    Some(QuizScreen::Summary(summary)) => rsx! {
                        SummaryView {
                            summary,
                            on_restart: move |()| dispatch_intent.call(QuizIntent::Restart),
                        }
                    },
                    None => rsx! {
                        p { "{ViewError::Unknown.message()}" }
                    },
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<Option<QuizVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
