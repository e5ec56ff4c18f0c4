//! Configuration management for the Tezos Ledger client.
//!
//! This module provides TOML-based configuration loading. The default
//! configuration path is `~/.config/ledger-tezos/config.toml`. The client
//! only reads configuration; it never writes files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tezos_ledger_protocol::{Curve, DerivationPath, Generation, DEFAULT_PATH};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("path is not a valid derivation path: {path} ({reason})")]
    InvalidPath { path: String, reason: String },

    #[error("log_level must be one of: trace, debug, info, warn, error; got {0}")]
    InvalidLogLevel(String),
}

/// Valid log level values for tracing configuration.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Signing defaults.
    pub device: DeviceConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults used when a call does not name its own path or curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeviceConfig {
    /// Firmware protocol generation (legacy, modern).
    pub generation: Generation,

    /// Signing curve (ed25519, ed25519-slip10, secp256k1, secp256r1).
    pub curve: Curve,

    /// Derivation path, e.g. `m/44'/1729'/0'/0'`.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            generation: Generation::Modern,
            curve: Curve::Ed25519Slip10,
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Returns the default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ledger-tezos")
        .join("config.toml")
}

impl ClientConfig {
    /// Apply environment variable overrides to the configuration.
    ///
    /// Environment variables take precedence over config file values.
    /// Supported variables:
    /// - LEDGER_TEZOS_PATH: Override the derivation path
    /// - LEDGER_TEZOS_CURVE: Override the curve (ed25519, secp256k1, ...)
    /// - LEDGER_TEZOS_GENERATION: Override the firmware generation (legacy, modern)
    /// - LEDGER_TEZOS_LOG_LEVEL: Override log level (trace, debug, info, warn, error)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LEDGER_TEZOS_PATH") {
            if !path.is_empty() {
                tracing::info!("Overriding path from environment: {}", path);
                self.device.path = path;
            }
        }

        if let Ok(name) = std::env::var("LEDGER_TEZOS_CURVE") {
            if !name.is_empty() {
                match Curve::from_name(&name) {
                    Some(curve) => {
                        tracing::info!("Overriding curve from environment: {}", curve);
                        self.device.curve = curve;
                    }
                    None => tracing::warn!("Ignoring unknown curve in environment: {}", name),
                }
            }
        }

        if let Ok(name) = std::env::var("LEDGER_TEZOS_GENERATION") {
            match name.as_str() {
                "" => {}
                "legacy" => self.device.generation = Generation::Legacy,
                "modern" => self.device.generation = Generation::Modern,
                other => tracing::warn!("Ignoring unknown generation in environment: {}", other),
            }
        }

        if let Ok(level) = std::env::var("LEDGER_TEZOS_LOG_LEVEL") {
            if !level.is_empty() {
                tracing::info!("Overriding log_level from environment: {}", level);
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(err) = DerivationPath::parse(&self.device.path) {
            return Err(ConfigError::InvalidPath {
                path: self.device.path.clone(),
                reason: err.to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }

    /// Load configuration from a file.
    ///
    /// If the file does not exist, returns the default configuration.
    /// If the file exists but is invalid TOML, returns an error with
    /// a helpful message.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from the default path.
    pub fn load_default() -> Result<Self> {
        Self::load(default_config_path())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| anyhow::anyhow!("Invalid TOML configuration: {}", format_toml_error(&e)))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }
}

/// Format a TOML deserialization error for user-friendly display.
fn format_toml_error(error: &toml::de::Error) -> String {
    let mut msg = error.message().to_string();

    if let Some(span) = error.span() {
        msg.push_str(&format!(" (at position {}..{})", span.start, span.end));
    }

    msg
}
