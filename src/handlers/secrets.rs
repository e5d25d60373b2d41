//! Secrets endpoint handler.
//!
//! Loads the secrets file fresh on every request and returns the secret as
//! plain text. Load failures come back as 400 with the error's own text in
//! the body; that leaks internal detail to the caller and is kept as the
//! service's observable contract. Every invocation logs the decoded (or
//! attempted) configuration together with method, URI, and protocol version.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, Version},
    response::IntoResponse,
};
use tracing::{info, instrument};

use crate::secrets;
use crate::state::SharedState;

/// Response body prefix on successful secret lookup.
const SECRET_PREFIX: &str = "The secret is: ";

/// Handler for the /secrets endpoint.
#[instrument(skip(state))]
pub async fn secrets_handler(
    State(state): State<SharedState>,
    method: Method,
    uri: Uri,
    version: Version,
) -> impl IntoResponse {
    let path = state.config.secrets_path();
    let result = secrets::load(&path);

    info!(
        method = %method,
        uri = %uri,
        version = ?version,
        config = ?result,
        "Handled /secrets request"
    );

    match result {
        Ok(config) => (
            StatusCode::OK,
            format!("{}{}", SECRET_PREFIX, config.secret),
        ),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()),
    }
}
