//! Wire contract for the prediction endpoint.
//!
//! Every type here mirrors the JSON shapes exchanged with the form front end.
//! The constraint constants below are authoritative: the server re-checks them
//! on every request regardless of what the client already validated (client
//! validation is a UX optimization, not a trust boundary).

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use utoipa::ToSchema;

/// Minimum team-code length, counted after trimming surrounding whitespace.
pub const TEAM_CODE_MIN_LEN: usize = 2;

/// Valid NFL week numbers, inclusive (regular season + postseason).
pub const WEEK_RANGE: RangeInclusive<u16> = 1..=22;

/// Seasons with rating data available, inclusive.
pub const SEASON_RANGE: RangeInclusive<u16> = 2003..=2025;

/// Feature-bag key for the home team's offensive rating.
pub const HOME_OFFENSE: &str = "home_offense";

/// Feature-bag key for the away team's offensive rating.
pub const AWAY_OFFENSE: &str = "away_offense";

/// Default applied for any feature key absent from the bag.
///
/// Applied once, at the scoring boundary, never scattered across layers.
pub const DEFAULT_RATING: f64 = 0.0;

/// Logistic squash scale mapping a point differential onto a probability.
pub const LOGISTIC_SCALE: f64 = 0.25;

/// Named numeric signals consumed by the scoring function.
///
/// The key set is open: unknown keys round-trip untouched and are ignored by
/// the scorer. Lookups never fail; missing keys resolve to [`DEFAULT_RATING`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FeatureBag(HashMap<String, f64>);

impl FeatureBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Returns the rating stored under `key`, or [`DEFAULT_RATING`] when absent.
    #[must_use]
    pub fn rating(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(DEFAULT_RATING)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for FeatureBag {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Contract: what the front end sends. Kept small and explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// Home team code, e.g. `"KC"`.
    pub home_team: String,
    /// Away team code, e.g. `"BUF"`.
    pub away_team: String,
    /// NFL week number.
    pub week: u16,
    /// NFL season year.
    pub season: u16,
    /// Feature bag read by the scoring function.
    #[serde(default)]
    pub features: FeatureBag,
}

impl PredictRequest {
    /// Checks this request against the authoritative constraint table.
    ///
    /// All fields are checked; the returned list carries every violation, not
    /// just the first one found.
    ///
    /// # Errors
    /// Returns the full list of [`FieldViolation`]s when any constraint fails.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        check_team_code("home_team", &self.home_team, &mut violations);
        check_team_code("away_team", &self.away_team, &mut violations);
        check_range("week", self.week, &WEEK_RANGE, &mut violations);
        check_range("season", self.season, &SEASON_RANGE, &mut violations);

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

fn check_team_code(field: &'static str, code: &str, violations: &mut Vec<FieldViolation>) {
    if code.trim().chars().count() < TEAM_CODE_MIN_LEN {
        violations.push(FieldViolation {
            field: field.into(),
            constraint: format!("must be at least {TEAM_CODE_MIN_LEN} characters").into(),
        });
    }
}

fn check_range(
    field: &'static str,
    value: u16,
    range: &RangeInclusive<u16>,
    violations: &mut Vec<FieldViolation>,
) {
    if !range.contains(&value) {
        violations.push(FieldViolation {
            field: field.into(),
            constraint: format!("must be within [{}, {}]", range.start(), range.end()).into(),
        });
    }
}

/// One violated constraint, named by field.
///
/// Serialized into the `detail` array of an error response so clients can
/// surface field-level messages without parsing prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    #[schema(value_type = String)]
    pub field: Cow<'static, str>,
    /// Human-readable constraint description.
    #[schema(value_type = String)]
    pub constraint: Cow<'static, str>,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Contract: model prediction output.
///
/// `win_prob_home` is never set independently; it is always derived from the
/// point differential through the fixed logistic transform, so the pair stays
/// internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    /// Predicted `home_points - away_points`. Unbounded.
    point_diff: f64,
    /// Home win probability in `[0, 1]`.
    win_prob_home: f64,
}

impl Prediction {
    /// Derives a prediction from a point differential.
    ///
    /// The logistic squash keeps the probability strictly inside `(0, 1)` for
    /// any finite differential.
    #[must_use]
    pub fn from_point_diff(point_diff: f64) -> Self {
        let squashed = 1.0 / (1.0 + (-LOGISTIC_SCALE * point_diff).exp());
        // f64 saturates the squash to exactly 0 or 1 once |point_diff|
        // passes ~148; pin back inside the open interval.
        let win_prob_home = squashed.clamp(f64::EPSILON, 1.0 - f64::EPSILON);
        Self { point_diff, win_prob_home }
    }

    #[must_use]
    pub const fn point_diff(&self) -> f64 {
        self.point_diff
    }

    #[must_use]
    pub const fn win_prob_home(&self) -> f64 {
        self.win_prob_home
    }
}

/// Contract: the full prediction endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    pub prediction: Prediction,
    /// Identifies the transform that produced the prediction.
    pub model_version: String,
    /// Wall-clock duration of the scoring computation, in milliseconds.
    pub latency_ms: f64,
}
