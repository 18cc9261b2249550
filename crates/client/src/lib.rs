//! Client-side request tooling for the prediction endpoint.
//!
//! [`RequestBuilder`] turns raw, loosely-typed form values into a validated
//! [`PredictRequest`](gridiron_domain::contract::PredictRequest) before any
//! network call is made, and [`transport`] decodes structured error bodies
//! returned by the service. The HTTP call itself is left to the embedding
//! front end.
//!
//! Validation here reuses the same constraint module the server enforces, so
//! a request that builds successfully can only be rejected server-side if the
//! contract itself changed underneath the client.

mod builder;
mod error;
pub mod transport;

pub use crate::builder::RequestBuilder;
pub use crate::error::BuildError;
pub use crate::transport::TransportError;
