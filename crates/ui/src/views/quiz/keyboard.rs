use dioxus::prelude::Key;
use quiz_core::QuizPhase;
use quiz_core::model::OptionLabel;

use crate::vm::QuizIntent;

/// Keyboard shortcuts for the quiz page.
///
/// `a`-`e` or `1`-`5` pick an option, `Enter` submits or moves on, `p`
/// toggles the timer, `s` skips and `r` restarts from the summary.
pub(super) fn intent_for_key(key: &Key, phase: QuizPhase) -> Option<QuizIntent> {
    match (key, phase) {
        (Key::Enter, QuizPhase::Answering) => Some(QuizIntent::Submit),
        (Key::Enter, QuizPhase::Reviewing) => Some(QuizIntent::Next),
        (Key::Character(value), phase) => intent_for_character(value, phase),
        _ => None,
    }
}

fn intent_for_character(value: &str, phase: QuizPhase) -> Option<QuizIntent> {
    let mut chars = value.chars();
    let ch = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }

    match phase {
        QuizPhase::Answering => match ch {
            'p' => Some(QuizIntent::TogglePause),
            's' => Some(QuizIntent::Next),
            '1'..='5' => ch
                .to_digit(10)
                .and_then(|digit| OptionLabel::from_position(digit as usize))
                .map(QuizIntent::Select),
            _ => value.parse::<OptionLabel>().ok().map(QuizIntent::Select),
        },
        QuizPhase::Reviewing => None,
        QuizPhase::Finished => (ch == 'r').then_some(QuizIntent::Restart),
    }
}
