//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it hosts config loading and the shared
//! server plumbing (state, health endpoint, system router).
//!
//! ## Config loading
//! ```rust,ignore
//! use gridiron_kernel::config::load_config;
//! use gridiron_domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use gridiron_domain as domain;
