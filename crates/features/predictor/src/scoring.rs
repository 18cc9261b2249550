//! Deterministic scoring: a fixed linear transform followed by a logistic squash.
//!
//! Step-1 heuristic, kept deliberately tiny: positive differential favors the
//! home side, negative favors the away side. A real model can replace this
//! function without touching the contract around it.

use crate::error::PredictError;
use gridiron_domain::contract::{
    AWAY_OFFENSE, HOME_OFFENSE, PredictRequest, PredictResponse, Prediction,
};
use std::time::Instant;

/// Identifies the transform baked into [`score`].
pub const MODEL_VERSION: &str = "0.1.0-linear";

/// Weight applied to the offensive-rating differential.
const OFFENSE_WEIGHT: f64 = 0.7;

/// Scores a validated request.
///
/// Pure and idempotent: identical inputs always produce identical output.
/// Missing feature keys resolve to the default rating, so an empty bag yields
/// an even matchup (`point_diff = 0`, `win_prob_home = 0.5`).
#[must_use]
pub fn score(req: &PredictRequest) -> Prediction {
    let home_offense = req.features.rating(HOME_OFFENSE);
    let away_offense = req.features.rating(AWAY_OFFENSE);

    let point_diff = OFFENSE_WEIGHT * (home_offense - away_offense);
    Prediction::from_point_diff(point_diff)
}

/// Validates and scores a candidate request.
///
/// Validation runs first; no partial scoring happens for a malformed request.
/// The reported latency covers the scoring computation only.
///
/// # Errors
/// Returns [`PredictError::Validation`] carrying every violated constraint.
pub fn predict(req: &PredictRequest) -> Result<PredictResponse, PredictError> {
    req.validate().map_err(PredictError::from_violations)?;

    let started = Instant::now();
    let prediction = score(req);
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(PredictResponse { prediction, model_version: MODEL_VERSION.to_owned(), latency_ms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_domain::contract::FeatureBag;

    fn request(home_offense: f64, away_offense: f64) -> PredictRequest {
        let mut features = FeatureBag::new();
        features.insert(HOME_OFFENSE, home_offense);
        features.insert(AWAY_OFFENSE, away_offense);
        PredictRequest {
            home_team: "KC".into(),
            away_team: "BUF".into(),
            week: 3,
            season: 2024,
            features,
        }
    }

    #[test]
    fn known_matchup_scores_expected_margin() {
        let prediction = score(&request(7.2, 6.8));
        assert!((prediction.point_diff() - 0.28).abs() < 1e-12);
        assert!((prediction.win_prob_home() - 0.5175).abs() < 1e-3);
    }

    #[test]
    fn empty_feature_bag_is_an_even_matchup() {
        let mut req = request(0.0, 0.0);
        req.features = FeatureBag::new();

        let prediction = score(&req);
        assert_eq!(prediction.point_diff(), 0.0);
        assert_eq!(prediction.win_prob_home(), 0.5);
    }

    #[test]
    fn lopsided_ratings_never_saturate_the_probability() {
        let home_rout = score(&request(1000.0, -1000.0));
        assert!(home_rout.win_prob_home() < 1.0);

        let away_rout = score(&request(-1000.0, 1000.0));
        assert!(away_rout.win_prob_home() > 0.0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let req = request(12.5, -3.25);
        assert_eq!(score(&req), score(&req));
    }

    #[test]
    fn predict_rejects_before_scoring() {
        let mut req = request(7.2, 6.8);
        req.week = 23;

        let err = predict(&req).unwrap_err();
        let PredictError::Validation { violations } = err;
        assert_eq!(violations[0].field, "week");
    }

    #[test]
    fn predict_reports_model_version_and_nonnegative_latency() {
        let response = predict(&request(1.0, 2.0)).unwrap();
        assert_eq!(response.model_version, MODEL_VERSION);
        assert!(response.latency_ms >= 0.0);
    }
}
