//! sensor-diag-exporter library crate.
//!
//! A small diagnostic HTTP service: two synthetic sensor gauges driven by a
//! background generator task and exposed in Prometheus text format, a
//! header-echo endpoint, and a secrets endpoint that re-reads a local YAML
//! file on every request. The binary in `main.rs` wires these modules to an
//! axum server; the modules are public so the integration tests can exercise
//! them directly.

pub mod cli;
pub mod config;
pub mod generator;
pub mod handlers;
pub mod metrics;
pub mod secrets;
pub mod state;

// Re-export main types for convenience
pub use config::Config;
pub use metrics::SensorMetrics;
pub use secrets::{SecretConfig, SecretsError};
pub use state::{AppState, SharedState};
