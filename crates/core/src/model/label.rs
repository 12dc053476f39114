use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("invalid option label: {0:?}")]
    Invalid(String),
}

//
// ─── OPTION LABEL ──────────────────────────────────────────────────────────────
//

/// Identifier of one of the (at most five) answer options of a question.
///
/// Labels compare case-insensitively by construction: every textual form is
/// parsed into this enum, and the canonical string is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLabel {
    /// All labels in display order.
    pub const ALL: [OptionLabel; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    /// Parses a single letter, ignoring case.
    #[must_use]
    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            _ => None,
        }
    }

    /// Maps a 1-based position (`1` → `A`) to a label.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Canonical lowercase form (`"a"`..`"e"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }

    /// Uppercase letter shown to the user.
    #[must_use]
    pub fn display_letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

impl FromStr for OptionLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or_else(|| LabelError::Invalid(s.to_string())),
            _ => Err(LabelError::Invalid(s.to_string())),
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
