//! Application state management for the exporter.
//!
//! This module defines the shared application state that is passed
//! to HTTP handlers and read by the background generator task.

use prometheus::Registry;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::metrics::SensorMetrics;

/// Type alias for shared application state.
pub type SharedState = Arc<AppState>;

/// Global application state shared across requests and the generator task.
pub struct AppState {
    pub registry: Registry,
    pub sensors: SensorMetrics,
    pub config: Arc<Config>,
    /// Server start time for uptime display.
    pub start_time: Instant,
}
