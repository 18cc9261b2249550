//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `utoipa`).
//! Keep it lean: no I/O, networking, or heavy logic—just the wire contract, its
//! constraint table, and configuration data.
//!
//! The validation rules in [`contract`] are the single source of truth for both
//! boundaries: the client-side request builder calls them before sending, and the
//! prediction service calls them again on receipt. Keeping one module prevents the
//! two constraint sets from drifting apart.

pub mod config;
pub mod contract;
