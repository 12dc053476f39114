use dioxus::prelude::*;
use quiz_core::TICK_PERIOD;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::vm::QuizVm;

/// Drives the per-question timer of the quiz held in `vm`.
///
/// The tick task is keyed on `QuizVm::timer_key`: when the key changes (new
/// question, pause, submit, finish) the running task is cancelled and, if the
/// new key is `Some`, a fresh one starts. Elapsed time lives in the session,
/// so resuming continues from the paused value.
pub fn use_quiz_timer(vm: Signal<Option<QuizVm>>) {
    let timer_key = use_memo(move || vm.read().as_ref().and_then(QuizVm::timer_key));

    let _ticker = use_resource(move || {
        let mut vm = vm;
        async move {
            let Some(key) = timer_key() else {
                return;
            };
            debug!(question = key.question_index, "timer started");

            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if let Some(vm) = vm.write().as_mut() {
                    // A task outliving its key must not tick the next question.
                    if vm.timer_key() != Some(key) {
                        debug!(question = key.question_index, "stale timer skipped");
                        return;
                    }
                    vm.tick();
                }
            }
        }
    });
}
