//! Raw form input → validated request.
//!
//! Form values arrive untyped (text inputs, number inputs, prefilled JSON) and
//! untrusted. The builder applies one enumerated coercion rule per field and
//! either repairs or rejects, by policy:
//!
//! * range fields (`week`, `season`) are **clamped** into their valid range;
//!   when absent or non-numeric they repair to the range start (week 1,
//!   season 2003), the furthest the clamp itself can repair to;
//! * identity fields (`home_team`, `away_team`) are **rejected** when too short;
//! * rating fields fall back to the default when absent or non-numeric.

use crate::error::BuildError;
use gridiron_domain::contract::{
    AWAY_OFFENSE, DEFAULT_RATING, FeatureBag, HOME_OFFENSE, PredictRequest, SEASON_RANGE,
    WEEK_RANGE,
};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Collects raw form values and assembles a [`PredictRequest`].
///
/// Field names mirror the wire contract: `home_team`, `away_team`, `week`,
/// `season`, `home_offense`, `away_offense`. Unknown names are ignored.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct RequestBuilder {
    fields: HashMap<String, Value>,
}

impl RequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw field value as it came off the form.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builds from a whole form snapshot at once.
    pub fn from_form<I, K, V>(form: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            fields: form.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Coerces, clamps, and validates the collected fields.
    ///
    /// Pure: no network call happens here, and nothing malformed survives.
    /// The produced request satisfies every structural contract invariant;
    /// rating magnitudes are deliberately unconstrained. Range fields are
    /// always repaired, never rejected — even when missing entirely (see the
    /// module docs for the repair table).
    ///
    /// # Errors
    /// Returns [`BuildError::Validation`] naming each team-code field whose
    /// trimmed length is below the contract minimum.
    pub fn build(self) -> Result<PredictRequest, BuildError> {
        let home_team = coerce_text(self.fields.get("home_team"));
        let away_team = coerce_text(self.fields.get("away_team"));
        let week = clamp_into(coerce_number(self.fields.get("week")), &WEEK_RANGE);
        let season = clamp_into(coerce_number(self.fields.get("season")), &SEASON_RANGE);

        let mut features = FeatureBag::new();
        features.insert(HOME_OFFENSE, coerce_rating(self.fields.get("home_offense")));
        features.insert(AWAY_OFFENSE, coerce_rating(self.fields.get("away_offense")));

        let request = PredictRequest { home_team, away_team, week, season, features };

        request.validate().map_err(|violations| BuildError::Validation { violations })?;

        Ok(request)
    }
}

/// Text rule: strings pass through, numbers render to decimal text, anything
/// else becomes empty (and then fails the length check downstream). Always
/// trimmed.
fn coerce_text(raw: Option<&Value>) -> String {
    let text = match raw {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    text.trim().to_owned()
}

/// Number rule: JSON numbers pass through, numeric strings parse, anything
/// else (including non-finite parses) yields `None`.
fn coerce_number(raw: Option<&Value>) -> Option<f64> {
    match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Rating rule: like [`coerce_number`] but repairs failures to the default
/// rating instead of propagating them.
fn coerce_rating(raw: Option<&Value>) -> f64 {
    coerce_number(raw).unwrap_or(DEFAULT_RATING)
}

/// Silent range repair: rounds, then pins to the closed range. A missing or
/// non-numeric value pins to the range start.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_into(value: Option<f64>, range: &RangeInclusive<u16>) -> u16 {
    let (start, end) = (f64::from(*range.start()), f64::from(*range.end()));
    value.unwrap_or(start).round().clamp(start, end) as u16
}
