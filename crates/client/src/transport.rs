//! Decoding of service error responses.
//!
//! The service reports contract violations as a JSON body with a `detail`
//! member: an array of field violations for validation failures, or a plain
//! string for ad-hoc errors. Both shapes decode here; anything else falls
//! back to a generic status-code message.

use gridiron_domain::contract::FieldViolation;
use serde::Deserialize;

/// A specialized error enum for the service call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Non-success status from the service; `message` is extracted from the
    /// structured error body when one is present.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The request never completed (connection refused, timeout, ...).
    #[error("Network error: {message}")]
    Network { message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Violations(Vec<FieldViolation>),
    Message(String),
}

impl TransportError {
    /// Builds a [`TransportError::Network`] from a failed connection attempt.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network { message: err.to_string() }
    }

    /// Builds a [`TransportError::Status`] from a non-success response.
    ///
    /// Extracts a human-readable message from the structured body if present,
    /// else falls back to a generic status-code message.
    #[must_use]
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body).map_or_else(
            |_| format!("service returned status {status}"),
            |parsed| match parsed.detail {
                ErrorDetail::Violations(violations) => violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
                ErrorDetail::Message(message) => message,
            },
        );

        Self::Status { status, message }
    }
}
