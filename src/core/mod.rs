//! # Core Packet Components
//!
//! Header reading, owned packets and stream framing.
//!
//! ## Components
//! - **Header**: length-prefix reader and zero-copy view
//! - **Packet**: owned header + payload with encode/decode
//! - **Codec**: Tokio codec for framing over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(2, LE u16)] [Data(4 * Length, LE i32)]
//! ```
//!
//! ## Safety
//! - Regions are borrowed `&[u8]`; reads never mutate
//! - Header size is validated before any field is read
//! - The codec checks the declared length before buffering the payload

pub mod codec;
pub mod header;
pub mod packet;
