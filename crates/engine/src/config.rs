//! Engine configuration via `bitestore.toml`
//!
//! All fields are optional in the file; anything left out takes its default.
//! The configuration is validated eagerly when loaded so a bad file fails at
//! startup rather than on the first write.

use serde::{Deserialize, Serialize};
use std::path::Path;

use bitestore_core::{Error, Limits, Result};

/// Config file name used by hosts that keep the engine config on disk.
pub const CONFIG_FILE_NAME: &str = "bitestore.toml";

/// What a point write does when the address already holds a bite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Replace the stored payload (last write wins)
    #[default]
    Overwrite,
    /// Keep the stored payload and fail with `AlreadyExists`
    Reject,
}

/// Engine configuration loaded from `bitestore.toml`.
///
/// # Example
///
/// ```toml
/// # "overwrite" (default) or "reject"
/// write_policy = "overwrite"
/// max_conversation_bytes = 1024
/// max_payload_bytes = 16777216
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Behavior of a write to an occupied address
    #[serde(default)]
    pub write_policy: WritePolicy,
    /// Maximum conversation identifier length in bytes
    #[serde(default = "default_max_conversation_bytes")]
    pub max_conversation_bytes: usize,
    /// Maximum payload length in bytes
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

fn default_max_conversation_bytes() -> usize {
    Limits::default().max_conversation_bytes
}

fn default_max_payload_bytes() -> usize {
    Limits::default().max_payload_bytes
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            write_policy: WritePolicy::default(),
            max_conversation_bytes: default_max_conversation_bytes(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl EngineConfig {
    /// Check that the limits are usable
    ///
    /// # Errors
    ///
    /// Returns `Config` if a limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_conversation_bytes == 0 {
            return Err(Error::Config(
                "max_conversation_bytes must be greater than 0".to_string(),
            ));
        }
        if self.max_payload_bytes == 0 {
            return Err(Error::Config(
                "max_payload_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Limits enforced by the engine
    pub fn limits(&self) -> Limits {
        Limits {
            max_conversation_bytes: self.max_conversation_bytes,
            max_payload_bytes: self.max_payload_bytes,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Bitestore engine configuration
#
# Behavior of a write to an address that already holds a bite:
#   "overwrite" = replace the payload, last write wins (default)
#   "reject"    = keep the stored payload and fail the write
write_policy = "overwrite"

# Maximum conversation identifier length in bytes (default: 1024)
max_conversation_bytes = 1024

# Maximum bite payload length in bytes (default: 16MB)
max_payload_bytes = 16777216
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text does not parse or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse engine config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
