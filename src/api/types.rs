//! Shared types for the WASM API
//!
//! This module contains common result types used across multiple API modules.

use serde::Serialize;

use crate::errors::Outcome;

/// A result value with its status code and error message
///
/// `status` is 0 on success and the error's negative code otherwise;
/// `value` always carries the best-effort result.
#[derive(Serialize, Clone, Debug)]
pub struct StatusReport<T> {
    pub value: T,
    pub status: i32,
    pub error: Option<String>,
}

impl<T> From<Outcome<T>> for StatusReport<T> {
    fn from(outcome: Outcome<T>) -> Self {
        let status = outcome.status();
        Self {
            value: outcome.value,
            status,
            error: outcome.error.map(|e| e.to_string()),
        }
    }
}

/// A pitch name split into stem and accidental offset
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StrippedPitch {
    pub stem: String,
    pub offset: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MusicError;

    #[test]
    fn test_status_report_from_outcome() {
        let report = StatusReport::from(Outcome::ok("c".to_string()));
        assert_eq!(report.status, 0);
        assert!(report.error.is_none());

        let report = StatusReport::from(Outcome::failed(0, MusicError::InvertModeError("up".into())));
        assert_eq!(report.status, -6);
        assert_eq!(report.error.as_deref(), Some("Unknown invert mode: up"));
    }

    #[test]
    fn test_status_report_json_shape() {
        let report = StatusReport::from(Outcome::ok(StrippedPitch { stem: "c".into(), offset: 1 }));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["value"]["offset"], 1);
        assert_eq!(json["status"], 0);
        assert!(json["error"].is_null());
    }
}
