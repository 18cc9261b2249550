use crate::error::{PredictError, ValidationDetail};
use crate::scoring;
use axum::Json;
use gridiron_domain::contract::{PredictRequest, PredictResponse};

/// Computes a win-probability prediction for a single matchup.
#[utoipa::path(
    post,
    path = "/api/predict",
    request_body = PredictRequest,
    responses(
        (status = OK, description = "Prediction computed", body = PredictResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Contract violation", body = ValidationDetail),
    ),
    tag = "predict",
)]
#[allow(clippy::unused_async)]
pub(crate) async fn predict_handler(
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, PredictError> {
    let response = scoring::predict(&req)?;

    tracing::info!(
        home = %req.home_team,
        away = %req.away_team,
        week = req.week,
        season = req.season,
        point_diff = response.prediction.point_diff(),
        "prediction served"
    );

    Ok(Json(response))
}
