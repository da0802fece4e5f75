//! # Error Types
//!
//! Error handling for header reads, packet decoding, framing and configuration.
//!
//! ## Error Categories
//! - **I/O Errors**: surfaced through the stream codec
//! - **Layout Errors**: truncated buffers, payloads that do not fit a `u16` length
//! - **Configuration Errors**: unreadable or invalid configuration
//!
//! An absent input region is deliberately *not* an error: see
//! [`read_length`](crate::core::header::read_length).
//!
//! ## Example Usage
//! ```rust
//! use packet_header::core::header::read_length;
//! use packet_header::error::PacketError;
//!
//! match read_length(Some(&[0x01][..])) {
//!     Err(PacketError::Truncated { needed, available }) => {
//!         assert_eq!((needed, available), (2, 1));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    pub const ERR_OVERSIZED_PACKET: &str = "Packet exceeds maximum size";

    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
    pub const ERR_LOGGING_INIT: &str = "Failed to install tracing subscriber";
}

// PacketError is the error type for every fallible operation in the crate
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum PacketError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Truncated buffer: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("Packet too large: {0} elements")]
    OversizedPacket(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PartialEq for PacketError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (
                Self::Truncated {
                    needed: n1,
                    available: a1,
                },
                Self::Truncated {
                    needed: n2,
                    available: a2,
                },
            ) => n1 == n2 && a1 == a2,
            (Self::OversizedPacket(a), Self::OversizedPacket(b)) => a == b,
            (Self::ConfigError(a), Self::ConfigError(b)) => a == b,
            _ => false,
        }
    }
}

/// Type alias for Results using PacketError
pub type Result<T> = std::result::Result<T, PacketError>;
