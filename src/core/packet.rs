//! # Packet
//!
//! Owned packet: a `u16` header and an `i32` payload.
//!
//! The header is never stored. It is derived from the payload vector, so
//! the declared length and the element count cannot drift apart. Every
//! constructor enforces `data.len() <= u16::MAX`.
//!
//! ## Responsibilities
//! - Build packets from a length, a slice or a vector
//! - Expose the payload by index, slice and iterator
//! - Encode to and decode from the little-endian wire layout

use crate::config::{ELEMENT_SIZE, HEADER_SIZE, MAX_LENGTH_FIELD};
use crate::core::header::{HeaderView, PacketHeader};
use crate::error::{PacketError, Result};
use bytes::{BufMut, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::slice;
use tracing::trace;

#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct Packet {
    data: Vec<i32>,
}

impl Packet {
    /// Create a packet holding `length` zeroed elements
    pub fn new(length: u16) -> Self {
        Self::filled(0, length)
    }

    /// Create a packet holding `length` copies of `value`
    pub fn filled(value: i32, length: u16) -> Self {
        Self {
            data: vec![value; length as usize],
        }
    }

    /// Declared length of the packet
    pub fn len(&self) -> u16 {
        // Constructors cap the payload at u16::MAX elements.
        self.data.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn header(&self) -> PacketHeader {
        PacketHeader::new(self.len())
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    pub fn get(&self, index: usize) -> Option<&i32> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.data.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, i32> {
        self.data.iter()
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }

    /// Size of the encoded packet in bytes
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.data.len() * ELEMENT_SIZE
    }

    /// Append the wire form of this packet to `dst`
    pub fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(self.encoded_len());
        dst.put_u16_le(self.len());
        for value in &self.data {
            dst.put_i32_le(*value);
        }
    }

    /// Serialize a packet to a byte vector (header + body)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.header().to_bytes());
        for value in &self.data {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out
    }

    /// Parse a packet from a raw buffer.
    ///
    /// The buffer must hold the header and the full declared payload.
    /// Trailing bytes are ignored.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let view = HeaderView::new(buf)?;
        if !view.is_complete() {
            return Err(PacketError::Truncated {
                needed: view.header().frame_size(),
                available: buf.len(),
            });
        }

        let data: Vec<i32> = view.elements().collect();
        trace!(length = data.len(), "Decoded packet");
        Ok(Self { data })
    }
}

impl TryFrom<Vec<i32>> for Packet {
    type Error = PacketError;

    fn try_from(data: Vec<i32>) -> Result<Self> {
        if data.len() > MAX_LENGTH_FIELD {
            return Err(PacketError::OversizedPacket(data.len()));
        }
        Ok(Self { data })
    }
}

impl From<Packet> for Vec<i32> {
    fn from(packet: Packet) -> Self {
        packet.data
    }
}

impl TryFrom<&[i32]> for Packet {
    type Error = PacketError;

    fn try_from(data: &[i32]) -> Result<Self> {
        if data.len() > MAX_LENGTH_FIELD {
            return Err(PacketError::OversizedPacket(data.len()));
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }
}

impl Index<usize> for Packet {
    type Output = i32;

    #[allow(clippy::expect_used)]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl IndexMut<usize> for Packet {
    #[allow(clippy::expect_used)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

macro_rules! impl_range_index {
    ($($range:ty),+ $(,)?) => {
        $(
            impl Index<$range> for Packet {
                type Output = [i32];

                fn index(&self, index: $range) -> &Self::Output {
                    &self.data[index]
                }
            }

            impl IndexMut<$range> for Packet {
                fn index_mut(&mut self, index: $range) -> &mut Self::Output {
                    &mut self.data[index]
                }
            }
        )+
    };
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
);

impl<'a> IntoIterator for &'a Packet {
    type Item = &'a i32;
    type IntoIter = slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a mut Packet {
    type Item = &'a mut i32;
    type IntoIter = slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("length", &self.len())
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packet(length: {}, data: {:?})", self.len(), self.data)
    }
}
