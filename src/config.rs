//! Static configuration: API credentials and the up/down color palette.
//!
//! Loaded once from a JSON file at startup and passed by reference into the
//! stages that need it. No process-wide globals.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BarError;

/// Two-entry color palette for the rendered rows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Palette {
    /// Color for coins with a non-negative 24h change.
    pub up: String,
    /// Color for coins with a negative 24h change.
    pub down: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            up: "green".to_string(),
            down: "red".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Binance API key. Optional; the signed account fetch is skipped without it.
    pub api_key: Option<String>,
    /// Binance API secret.
    pub api_secret: Option<String>,
    /// Colors keyed by the sign of the 24h percent change.
    pub colors: Palette,
}

impl Config {
    /// Read and decode the config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BarError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Both credentials, when configured. Empty strings count as missing.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some((key, secret))
            }
            _ => None,
        }
    }
}
