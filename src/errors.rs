//! Error types for pitch algebra
//!
//! Pitch operations never abort a pipeline: they hand back a best-effort
//! value together with the condition that degraded it. `MusicError` names
//! the condition, `Outcome` pairs it with the fallback value.

use thiserror::Error;

/// Conditions raised by notation, scale and key-signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusicError {
    /// Pitch string not recognized in any known notation
    #[error("Unrecognized pitch name: {0}")]
    NotationError(String),

    /// Alphabet or table length does not match the temperament
    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    /// Mode name not present in the catalog
    #[error("Unknown mode: {0}")]
    InvalidModeOverride(String),

    /// Custom note names must cover exactly one octave of the mode
    #[error("Expected {expected} custom note names, got {actual}")]
    CustomNameArityError { expected: usize, actual: usize },

    /// Custom note names must be distinct
    #[error("Duplicate custom note name: {0}")]
    DuplicateCustomName(String),

    #[error("Unknown invert mode: {0}")]
    InvertModeError(String),
}

impl MusicError {
    /// Negative status code reported across the JS boundary
    pub fn code(&self) -> i32 {
        match self {
            MusicError::NotationError(_) => -1,
            MusicError::FormatMismatch(_) => -2,
            MusicError::InvalidModeOverride(_) => -3,
            MusicError::CustomNameArityError { .. } => -4,
            MusicError::DuplicateCustomName(_) => -5,
            MusicError::InvertModeError(_) => -6,
        }
    }
}

/// A value paired with the error (if any) that forced it to a fallback
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub error: Option<MusicError>,
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// Wrap a fallback value and log the condition that produced it
    pub fn failed(value: T, error: MusicError) -> Self {
        log::warn!("{}", error);
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// 0 on success, the error's negative code otherwise
    pub fn status(&self) -> i32 {
        self.error.as_ref().map_or(0, MusicError::code)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            error: self.error,
        }
    }

    /// Drop the fallback value and keep only success or the error
    pub fn into_result(self) -> Result<T, MusicError> {
        match self.error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}
