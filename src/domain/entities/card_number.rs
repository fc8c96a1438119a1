//! Ration card number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Twelve-digit ration card identifier.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber {
    value: String,
}

impl CardNumber {
    const CARD_LENGTH: usize = 12;

    /// Creates a card number, rejecting anything that is not exactly
    /// twelve ASCII digits.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.len() != Self::CARD_LENGTH {
            return None;
        }

        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self { value })
    }

    /// Creates a card number without validation.
    ///
    /// Intended for values the backend has already vetted.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the card number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the card number and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.value).finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
