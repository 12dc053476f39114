//! Schema-on-read mapping for rows returned by a question source.
//!
//! Rows are keyed by the spreadsheet's human-readable column names. Every
//! column is optional; anything missing or oddly typed degrades to a default
//! instead of failing the load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use quiz_core::model::QuestionDraft;

use crate::error::LoadError;

/// One raw record from the question source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionRow {
    #[serde(rename = "Description", default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(rename = "Question", default, deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(rename = "Option A", default, deserialize_with = "lenient_text")]
    pub option_a: Option<String>,
    #[serde(rename = "Option B", default, deserialize_with = "lenient_text")]
    pub option_b: Option<String>,
    #[serde(rename = "Option C", default, deserialize_with = "lenient_text")]
    pub option_c: Option<String>,
    #[serde(rename = "Option D", default, deserialize_with = "lenient_text")]
    pub option_d: Option<String>,
    #[serde(rename = "Option E", default, deserialize_with = "lenient_text")]
    pub option_e: Option<String>,
    #[serde(rename = "Correct Answer", default, deserialize_with = "lenient_text")]
    pub correct_answer: Option<String>,
    // Sheets have used both spellings; the plural wins when both are filled.
    #[serde(rename = "Explanations", default, deserialize_with = "lenient_text")]
    pub explanations: Option<String>,
    #[serde(rename = "Explanation", default, deserialize_with = "lenient_text")]
    pub explanation: Option<String>,
}

impl QuestionRow {
    #[must_use]
    pub fn into_draft(self) -> QuestionDraft {
        let explanation = non_empty(self.explanations).or_else(|| non_empty(self.explanation));
        QuestionDraft {
            description: self.description.unwrap_or_default(),
            prompt: self.question.unwrap_or_default(),
            options: [
                self.option_a.unwrap_or_default(),
                self.option_b.unwrap_or_default(),
                self.option_c.unwrap_or_default(),
                self.option_d.unwrap_or_default(),
                self.option_e.unwrap_or_default(),
            ],
            correct_answer: self.correct_answer.unwrap_or_default(),
            explanation,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Parse a response body into rows.
///
/// # Errors
///
/// Returns `LoadError::Decode` for invalid JSON and `LoadError::NotAnArray`
/// if the document is not a top-level array. Individual non-object entries
/// are skipped.
pub fn parse_rows(body: &str) -> Result<Vec<QuestionRow>, LoadError> {
    let document: Value = serde_json::from_str(body)?;
    rows_from_value(document)
}

/// # Errors
///
/// Returns `LoadError::NotAnArray` if `document` is not an array.
pub fn rows_from_value(document: Value) -> Result<Vec<QuestionRow>, LoadError> {
    let Value::Array(items) = document else {
        return Err(LoadError::NotAnArray);
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(row = index, "skipping question row that is not an object");
            continue;
        }
        match serde_json::from_value::<QuestionRow>(item) {
            Ok(row) => rows.push(row),
            Err(err) => warn!(row = index, error = %err, "skipping unreadable question row"),
        }
    }
    Ok(rows)
}
