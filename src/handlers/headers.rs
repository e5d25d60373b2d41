//! Header echo endpoint handler.
//!
//! Serializes the inbound header multimap to a canonical name-to-values
//! JSON object. If serialization ever fails the error is logged and the
//! response goes out with the default status, the JSON content-type, and no
//! body. That asymmetry mirrors the original service behavior and is kept
//! deliberately rather than normalized into a clean error response.

use axum::{
    http::{HeaderMap, Method, Uri, Version},
    response::IntoResponse,
};
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

/// Handler for the /headers endpoint.
#[instrument(skip(headers))]
pub async fn headers_handler(
    headers: HeaderMap,
    method: Method,
    uri: Uri,
    version: Version,
) -> impl IntoResponse {
    let multimap = header_multimap(&headers);

    let body = match serde_json::to_string(&multimap) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize headers: {}", e);
            String::new()
        }
    };

    info!(
        method = %method,
        uri = %uri,
        version = ?version,
        "Handled /headers request"
    );

    ([("Content-Type", "application/json")], body)
}

/// Collects the header multimap into a deterministic name-to-values mapping.
/// Non-UTF-8 header bytes are replaced rather than rejected.
fn header_multimap(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for key in headers.keys() {
        let values = headers
            .get_all(key)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        map.insert(key.as_str().to_string(), values);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_header_multimap_groups_repeated_names() {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("text/plain"));
        headers.append("accept", HeaderValue::from_static("application/json"));
        headers.insert("x-test", HeaderValue::from_static("1"));

        let map = header_multimap(&headers);
        assert_eq!(
            map.get("accept"),
            Some(&vec!["text/plain".to_string(), "application/json".to_string()])
        );
        assert_eq!(map.get("x-test"), Some(&vec!["1".to_string()]));
    }
}
