//! # packet-header
//!
//! Safe access to packets laid out as a little-endian `u16` element count
//! followed by that many `i32` values.
//!
//! ## Modules
//! - [`core`]: header reader, owned [`Packet`], stream codec
//! - [`config`]: layout constants and runtime configuration
//! - [`error`]: [`PacketError`] and the crate `Result` alias
//! - [`utils`]: logging setup
//!
//! ```rust
//! use packet_header::{packet, read_length, try_read_length};
//!
//! let bytes = packet![7, 8, 9].to_bytes();
//! assert_eq!(read_length(Some(bytes.as_slice())).unwrap(), 3);
//!
//! // An absent region reads as zero, like an empty packet.
//! assert_eq!(read_length(None).unwrap(), 0);
//! assert_eq!(try_read_length(None).unwrap(), None);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::{PacketConfig, HEADER_SIZE, MAX_PACKET_SIZE};
pub use crate::core::codec::PacketCodec;
pub use crate::core::header::{read_length, try_read_length, HeaderView, PacketHeader};
pub use crate::core::packet::Packet;
pub use crate::error::{PacketError, Result};
