//! Metrics endpoint handler for Prometheus scraping.
//!
//! Renders the shared registry in Prometheus text format. The generator
//! task keeps incrementing the gauges while this runs; gauge reads are
//! atomic so scrapes never block it or see partial values.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, Version},
    response::IntoResponse,
};
use tracing::{error, info, instrument};

use crate::metrics;
use crate::state::SharedState;

/// Error type for metrics endpoint failures.
#[derive(Debug)]
pub enum MetricsError {
    EncodingFailed,
}

impl IntoResponse for MetricsError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to encode metrics",
        )
            .into_response()
    }
}

/// Handler for the /metrics endpoint.
#[instrument(skip(state))]
pub async fn metrics_handler(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    version: Version,
) -> Result<impl IntoResponse, MetricsError> {
    info!(
        method = %method,
        uri = %uri,
        version = ?version,
        "Handled /metrics request"
    );

    let body = metrics::render(&state.registry).map_err(|e| {
        error!("Failed to encode metrics: {}", e);
        MetricsError::EncodingFailed
    })?;

    Ok((
        StatusCode::OK,
        [("Content-Type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}
