//! Convenience re-exports for server crates.

pub use crate::config::load_config;
pub use crate::server::ApiState;
pub use gridiron_domain::config::ApiConfig;
pub use gridiron_domain::contract::{
    FeatureBag, FieldViolation, PredictRequest, PredictResponse, Prediction,
};
