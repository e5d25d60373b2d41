//! Configuration management for sensor-diag-exporter.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.
//!
//! Note: this is the *service* configuration (port, bind address, paths,
//! intervals). The secrets file consumed by the `/secrets` endpoint is a
//! separate collaborator handled by [`crate::secrets`] and is deliberately
//! re-read on every request.

use crate::cli::{Args, ConfigFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// Default configuration constants
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SECRETS_PATH: &str = "resources/config.yaml";
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 2;

/// Service configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub port: Option<u16>,
    pub bind: Option<String>,

    // Logging
    pub log_level: Option<String>,

    // Secrets endpoint
    #[serde(alias = "secrets-file")]
    pub secrets_file: Option<PathBuf>,

    // Generator tuning
    #[serde(alias = "tick-interval-secs")]
    pub tick_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: Some(DEFAULT_BIND_ADDR.to_string()),
            port: Some(DEFAULT_PORT),
            log_level: Some("info".into()),
            secrets_file: Some(PathBuf::from(DEFAULT_SECRETS_PATH)),
            tick_interval_secs: Some(DEFAULT_TICK_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Effective secrets file path (configured value or default).
    pub fn secrets_path(&self) -> PathBuf {
        self.secrets_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_PATH))
    }

    /// Effective generator tick interval in seconds.
    pub fn tick_interval(&self) -> u64 {
        self.tick_interval_secs.unwrap_or(DEFAULT_TICK_INTERVAL_SECS)
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if cfg.tick_interval() == 0 {
        return Err("tick_interval_secs must be at least 1".into());
    }

    if cfg
        .secrets_file
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err("secrets_file must not be empty".into());
    }

    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(format!(
                    "Invalid log_level '{}', expected off/error/warn/info/debug/trace",
                    other
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref().and_then(|p| p.to_str()))?
    };

    // Override with CLI args
    if let Some(bind_ip) = args.bind {
        config.bind = Some(bind_ip.to_string());
    }

    // Only override port if the user supplied it on the CLI.
    if let Some(cli_port) = args.port {
        config.port = Some(cli_port);
    }

    if let Some(secrets_file) = &args.secrets_file {
        config.secrets_file = Some(secrets_file.clone());
    }

    if let Some(tick) = args.tick_interval {
        config.tick_interval_secs = Some(tick);
    }

    Ok(config)
}

/// Configuration loading with multiple format support
pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        // Try default locations
        let defaults = [
            "/etc/sensor-diag/exporter.yaml",
            "/etc/sensor-diag/exporter.yml",
            "/etc/sensor-diag/exporter.json",
            "./sensor-diag-exporter.yaml",
            "./sensor-diag-exporter.yml",
            "./sensor-diag-exporter.json",
        ];

        defaults
            .iter()
            .find(|p| Path::new(p).exists())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(""))
    };

    if !path.exists() || path.to_string_lossy().is_empty() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    println!("{output}");
    Ok(())
}
