//! Secrets file loading for the /secrets endpoint.
//!
//! The file is re-read and re-parsed on every call, never cached, so edits
//! to the file take effect on the next request without a restart. The path
//! is fixed at startup; the file itself is an external collaborator and is
//! only ever read here.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Decoded secrets file content.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SecretConfig {
    pub secret: String,
}

/// Failure modes when loading the secrets file.
#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("failed to read secrets file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode secrets file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Reads and decodes the secrets file at `path`. Single attempt, no retry.
pub fn load(path: &Path) -> Result<SecretConfig, SecretsError> {
    let content = fs::read_to_string(path).map_err(|source| SecretsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| SecretsError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
