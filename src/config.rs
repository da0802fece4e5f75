//! # Configuration Management
//!
//! Wire-layout constants plus the runtime configuration used to bound
//! decoding and to set up logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`
//!
//! ## Limits
//! `MAX_PACKET_SIZE` is an allocation hint for callers. The header reader
//! and `Packet::from_bytes` never enforce it; only the stream codec does,
//! through [`LimitsConfig::max_elements`].

use crate::core::codec::PacketCodec;
use crate::error::{constants, PacketError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Size of the fixed header: a single `u16` length field
pub const HEADER_SIZE: usize = 2;

/// Size of one payload element (`i32`)
pub const ELEMENT_SIZE: usize = 4;

/// Suggested upper bound on payload elements for callers bounding allocation
pub const MAX_PACKET_SIZE: usize = 1024;

/// Largest element count the length field can express
pub const MAX_LENGTH_FIELD: usize = u16::MAX as usize;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PacketConfig {
    /// Decoding limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PacketConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| PacketError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_OPEN)))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| PacketError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_OPEN)))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| PacketError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE)))
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(max) = std::env::var("PACKET_HEADER_MAX_ELEMENTS") {
            config.limits.max_elements = max.parse::<usize>().map_err(|e| {
                PacketError::ConfigError(format!("Invalid PACKET_HEADER_MAX_ELEMENTS '{max}': {e}"))
            })?;
        }

        if let Ok(level) = std::env::var("PACKET_HEADER_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                PacketError::ConfigError(format!("Invalid PACKET_HEADER_LOG_LEVEL '{level}'"))
            })?;
        }

        Ok(config)
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            PacketError::ConfigError(format!("Failed to serialize config: {e}"))
        })?;

        std::fs::write(path, content)
            .map_err(|e| PacketError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_WRITE)))?;

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.limits.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PacketError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }

    /// Build a stream codec honouring the configured limits
    pub fn codec(&self) -> PacketCodec {
        if self.limits.enforce_max_on_decode {
            PacketCodec::with_max_elements(self.limits.max_elements)
        } else {
            PacketCodec::unbounded()
        }
    }
}

/// Limits applied when decoding framed streams
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum payload elements accepted by the stream codec
    pub max_elements: usize,

    /// When false the codec only applies the `u16` ceiling of the length field
    pub enforce_max_on_decode: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_elements: MAX_PACKET_SIZE,
            enforce_max_on_decode: true,
        }
    }
}

impl LimitsConfig {
    /// Validate limits
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_elements == 0 {
            errors.push("Max elements must be greater than 0".to_string());
        } else if self.max_elements > MAX_LENGTH_FIELD {
            errors.push(format!(
                "Max elements too large: {} (length field maximum: {MAX_LENGTH_FIELD})",
                self.max_elements
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name attached to the root span
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("packet-header"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let name_chars = self.app_name.chars().count();
        if name_chars == 0 {
            errors.push("Application name cannot be empty".to_string());
        } else if name_chars > 64 {
            errors.push(format!(
                "Application name too long: {name_chars} characters (maximum: 64)"
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
