//! Prediction feature slice: the server-side half of the request pipeline.
//!
//! This slice owns the authoritative contract check and the scoring function.
//! Whatever the form front end already validated is re-checked here — the
//! client-side pass is a UX optimization, not a trust boundary.

mod error;
mod routes;
pub mod scoring;

pub use crate::error::{PredictError, ValidationDetail};
pub use crate::scoring::{MODEL_VERSION, predict, score};

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Router fragment exposing the prediction endpoint.
pub fn predict_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(routes::predict_handler))
}
