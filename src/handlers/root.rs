//! Root endpoint handler for the landing page.

use axum::{extract::State, response::IntoResponse};
use tracing::{debug, instrument};

use crate::state::SharedState;

/// Handler for the root `/` endpoint.
#[instrument(skip(state))]
pub async fn root_handler(State(state): State<SharedState>) -> impl IntoResponse {
    debug!("Processing / request");

    let version = env!("CARGO_PKG_VERSION");
    let uptime_secs = state.start_time.elapsed().as_secs();

    (
        [("Content-Type", "text/plain; charset=utf-8")],
        format!(
            "sensor-diag-exporter {version} (up {uptime_secs}s)\n\
             \n\
             Endpoints:\n\
             /metrics  Prometheus-format sensor gauges\n\
             /secrets  Secret value read from the secrets file\n\
             /headers  Inbound request headers as JSON\n"
        ),
    )
}
