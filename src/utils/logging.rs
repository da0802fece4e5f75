//! Structured logging setup.
//!
//! Installs a global `tracing-subscriber` fmt subscriber. `RUST_LOG` takes
//! precedence over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::error::{constants, PacketError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when present
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| PacketError::ConfigError(format!("{}: {e}", constants::ERR_LOGGING_INIT)))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
