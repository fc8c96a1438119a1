//! One-time password value object.

use std::fmt;

/// Six-digit one-time password entered by the operator.
///
/// The code is never logged in clear; `Debug` and `Display` mask it.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode {
    value: String,
}

impl OtpCode {
    const OTP_LENGTH: usize = 6;

    /// Creates an OTP, rejecting anything that is not exactly six ASCII
    /// digits.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.len() != Self::OTP_LENGTH {
            return None;
        }

        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self { value })
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"******").finish()
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "******")
    }
}
