//! Configuration file parser for subscription import settings.
//!
//! The config file is optional — a missing file yields `ImportConfig::default()`.
//! Unknown keys are ignored by serde, though we log a warning when the file
//! contains potential typos.
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::service::YOUTUBE_SERVICE_ID;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Settings for a [`SubscriptionExtractor`](crate::SubscriptionExtractor).
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Largest export accepted, in bytes. Longer sources are rejected whole.
    pub max_source_bytes: u64,

    /// Service id stamped on imported items.
    pub service_id: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: 16 * 1024 * 1024,
            service_id: YOUTUBE_SERVICE_ID,
        }
    }
}

impl ImportConfig {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 2] = ["max_source_bytes", "service_id"];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(ImportConfig::default())`
    /// - Empty file → `Ok(ImportConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match read_capped(path, Self::MAX_FILE_SIZE)? {
            Some(content) => Self::from_toml(&content),
            None => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: ImportConfig = toml::from_str(content)?;
        tracing::info!(
            max_source_bytes = config.max_source_bytes,
            service_id = config.service_id,
            "Loaded import configuration"
        );
        Ok(config)
    }
}

/// Reads a text file of at most `limit` bytes, `None` when it does not exist.
///
/// Reads through one open handle, so there is no window between a size check
/// and the read.
fn read_capped(path: &Path, limit: u64) -> Result<Option<String>, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    file.take(limit.saturating_add(1))
        .read_to_string(&mut content)?;
    if content.len() as u64 > limit {
        return Err(ConfigError::TooLarge(format!(
            "Config file exceeds {} bytes",
            limit
        )));
    }
    Ok(Some(content))
}

// ============================================================================
// Tests
// ============================================================================
