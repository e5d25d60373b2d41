//! HTTP endpoint handlers for the exporter.
//!
//! This module provides handlers for all HTTP endpoints:
//! - `/metrics`: Prometheus metrics endpoint
//! - `/secrets`: secret value read fresh from the secrets file
//! - `/headers`: inbound request headers echoed as JSON
//! - `/`: plain landing page listing the endpoints

pub mod headers;
pub mod metrics;
pub mod root;
pub mod secrets;

// Re-export handlers
pub use headers::headers_handler;
pub use metrics::metrics_handler;
pub use root::root_handler;
pub use secrets::secrets_handler;
