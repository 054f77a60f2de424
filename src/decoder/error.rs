//! Error type for callers that leave the decoder world.

use super::{draw, DecodeErrors};

/// A failed decode, ready to be propagated with `?`.
///
/// Keeps the structured errors next to their drawn form.
///
/// # Examples
///
/// ```rust
/// use optica::decoder::{extract, string};
/// use serde_json::json;
///
/// let failure = extract(string().decode(&json!(1))).unwrap_err();
/// assert_eq!(failure.to_string(), "cannot decode 1, should be string");
/// assert_eq!(failure.errors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeFailure {
    message: String,
    errors: DecodeErrors,
}

impl DecodeFailure {
    /// Creates a failure from decode errors.
    #[must_use]
    pub fn new(errors: DecodeErrors) -> Self {
        Self {
            message: draw(&errors),
            errors,
        }
    }

    /// The drawn outline of the errors.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The structured errors.
    #[must_use]
    pub const fn errors(&self) -> &DecodeErrors {
        &self.errors
    }

    /// Gives back the structured errors.
    #[must_use]
    pub fn into_errors(self) -> DecodeErrors {
        self.errors
    }
}

impl From<DecodeErrors> for DecodeFailure {
    fn from(errors: DecodeErrors) -> Self {
        Self::new(errors)
    }
}

impl std::fmt::Display for DecodeFailure {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for DecodeFailure {}
