use std::collections::BTreeMap;

use crate::model::OptionLabel;

/// Shown when a question carries no explanation text.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw, all-text question fields as they arrive from a source.
///
/// Sources fill this in and call [`QuestionDraft::build`]; nothing downstream
/// ever sees the untyped shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub description: String,
    pub prompt: String,
    /// Option texts indexed by label position (`options[0]` is `A`).
    pub options: [String; 5],
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Normalize the draft into an immutable [`Question`].
    ///
    /// Empty options are dropped, the correct answer is trimmed and lowercased,
    /// and a missing or empty explanation becomes [`DEFAULT_EXPLANATION`].
    #[must_use]
    pub fn build(self) -> Question {
        let options = OptionLabel::ALL
            .into_iter()
            .zip(self.options)
            .filter(|(_, text)| !text.is_empty())
            .collect();

        let explanation = self
            .explanation
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string());

        Question {
            description: self.description,
            prompt: self.prompt,
            options,
            correct_label: self.correct_answer.trim().to_lowercase(),
            explanation,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A normalized multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    description: String,
    prompt: String,
    options: BTreeMap<OptionLabel, String>,
    correct_label: String,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Non-empty options in label order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        self.options.iter().map(|(label, text)| (*label, text.as_str()))
    }

    #[must_use]
    pub fn option_text(&self, label: OptionLabel) -> Option<&str> {
        self.options.get(&label).map(String::as_str)
    }

    #[must_use]
    pub fn has_option(&self, label: OptionLabel) -> bool {
        self.options.contains_key(&label)
    }

    /// Lowercase correct label as provided by the source.
    ///
    /// Not guaranteed to name an existing option; a question whose correct
    /// label is unusable simply cannot be answered correctly.
    #[must_use]
    pub fn correct_label(&self) -> &str {
        &self.correct_label
    }

    /// Correct label as shown to the user.
    #[must_use]
    pub fn correct_label_display(&self) -> String {
        self.correct_label.to_uppercase()
    }

    #[must_use]
    pub fn is_correct(&self, label: OptionLabel) -> bool {
        label.as_str() == self.correct_label
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
