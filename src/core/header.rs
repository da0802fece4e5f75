//! # Packet Header Reader
//!
//! Reads the `u16` length prefix at the start of a packet region.
//!
//! ```text
//! [Length(2, LE)] [Data(4 * Length, LE i32)]
//! ```
//!
//! The length counts `i32` elements, not bytes. Nothing here checks the
//! payload: a header read only needs the first two bytes of the region.

use crate::config::{ELEMENT_SIZE, HEADER_SIZE};
use crate::error::{PacketError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Fixed-size packet prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PacketHeader {
    /// Number of `i32` elements that follow the header
    pub length: u16,
}

impl PacketHeader {
    pub fn new(length: u16) -> Self {
        Self { length }
    }

    /// Parse the header from the start of `buf`. Bytes past the header are ignored.
    #[inline]
    pub fn parse(buf: &[u8]) -> Result<Self> {
        match buf {
            [lo, hi, ..] => Ok(Self {
                length: u16::from_le_bytes([*lo, *hi]),
            }),
            _ => Err(PacketError::Truncated {
                needed: HEADER_SIZE,
                available: buf.len(),
            }),
        }
    }

    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        self.length.to_le_bytes()
    }

    /// Bytes the declared payload occupies on the wire
    pub fn payload_size(self) -> usize {
        self.length as usize * ELEMENT_SIZE
    }

    /// Bytes of a complete packet (header + declared payload)
    pub fn frame_size(self) -> usize {
        HEADER_SIZE + self.payload_size()
    }
}

/// Read the declared length of the packet in `region`.
///
/// An absent region yields `Ok(0)`. That sentinel is indistinguishable from
/// a real packet whose length field is zero; use [`try_read_length`] when
/// the caller must tell the two apart.
///
/// A present region shorter than the two-byte header is rejected with
/// [`PacketError::Truncated`]. The region is never written and nothing is
/// allocated.
///
/// ```rust
/// use packet_header::core::header::read_length;
///
/// assert_eq!(read_length(Some(&[0x2C, 0x01][..])).unwrap(), 300);
/// assert_eq!(read_length(None).unwrap(), 0);
/// assert_eq!(read_length(Some(&[0x00, 0x00][..])).unwrap(), 0);
/// ```
pub fn read_length(region: Option<&[u8]>) -> Result<u16> {
    Ok(try_read_length(region)?.unwrap_or(0))
}

/// Read the declared length, keeping "no packet" distinct from "length zero".
///
/// ```rust
/// use packet_header::core::header::try_read_length;
///
/// assert_eq!(try_read_length(None).unwrap(), None);
/// assert_eq!(try_read_length(Some(&[0, 0][..])).unwrap(), Some(0));
/// ```
pub fn try_read_length(region: Option<&[u8]>) -> Result<Option<u16>> {
    let Some(buf) = region else {
        trace!("No packet region supplied");
        return Ok(None);
    };

    let header = PacketHeader::parse(buf)?;
    trace!(length = header.length, available = buf.len(), "Read packet header");
    Ok(Some(header.length))
}

/// Zero-copy view over a packet region
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    header: PacketHeader,
    payload: &'a [u8],
}

impl<'a> HeaderView<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let header = PacketHeader::parse(buf)?;
        Ok(Self {
            header,
            payload: &buf[HEADER_SIZE..],
        })
    }

    pub fn header(&self) -> PacketHeader {
        self.header
    }

    pub fn length(&self) -> u16 {
        self.header.length
    }

    /// Everything after the header, whether or not the declared payload fits in it
    pub fn payload_bytes(&self) -> &'a [u8] {
        self.payload
    }

    /// True when the region holds the whole declared payload
    pub fn is_complete(&self) -> bool {
        self.payload.len() >= self.header.payload_size()
    }

    /// Decoded elements, up to the declared count or the available whole elements
    pub fn elements(&self) -> impl Iterator<Item = i32> + 'a {
        let payload: &'a [u8] = self.payload;
        payload
            .chunks_exact(ELEMENT_SIZE)
            .take(self.header.length as usize)
            .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
    }
}
