use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gridiron_domain::contract::FieldViolation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A specialized error enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The candidate request violated the authoritative contract.
    #[error("Predict validation error: {}", format_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },
}

impl PredictError {
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Machine-readable error body for contract violations.
///
/// The `detail` array names every violated field so the form front end can
/// attach messages to inputs without parsing prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationDetail {
    pub detail: Vec<FieldViolation>,
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { violations } => {
                tracing::debug!(count = violations.len(), "request failed contract validation");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationDetail { detail: violations }),
                )
                    .into_response()
            },
        }
    }
}
