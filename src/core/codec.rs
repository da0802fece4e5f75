//! # Packet Codec
//!
//! Tokio codec for framing packets over byte streams.
//!
//! Frames are self-delimiting: the header's element count gives the size
//! of the payload that follows, so no extra framing bytes are needed.
//! The declared length is checked against `max_elements` before any
//! payload byte is buffered.

use crate::config::{HEADER_SIZE, MAX_LENGTH_FIELD, MAX_PACKET_SIZE};
use crate::core::header::PacketHeader;
use crate::core::packet::Packet;
use crate::error::{constants, PacketError, Result};
use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct PacketCodec {
    max_elements: usize,
}

impl Default for PacketCodec {
    fn default() -> Self {
        Self {
            max_elements: MAX_PACKET_SIZE,
        }
    }
}

impl PacketCodec {
    /// Codec accepting at most `max_elements` per frame (capped at `u16::MAX`)
    pub fn with_max_elements(max_elements: usize) -> Self {
        Self {
            max_elements: max_elements.min(MAX_LENGTH_FIELD),
        }
    }

    /// Codec bounded only by the range of the length field
    pub fn unbounded() -> Self {
        Self {
            max_elements: MAX_LENGTH_FIELD,
        }
    }

    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    fn check_limit(&self, elements: usize) -> Result<()> {
        if elements > self.max_elements {
            warn!(
                elements,
                max = self.max_elements,
                "{}",
                constants::ERR_OVERSIZED_PACKET
            );
            return Err(PacketError::OversizedPacket(elements));
        }
        Ok(())
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = PacketError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < HEADER_SIZE {
            return Ok(None);
        }

        let header = PacketHeader::parse(src)?;
        self.check_limit(header.length as usize)?;

        let frame_size = header.frame_size();
        if src.len() < frame_size {
            src.reserve(frame_size - src.len());
            return Ok(None);
        }

        let frame = src.split_to(frame_size);
        let packet = Packet::from_bytes(&frame)?;
        debug!(length = header.length, bytes = frame_size, "Decoded frame");
        Ok(Some(packet))
    }
}

impl Encoder<Packet> for PacketCodec {
    type Error = PacketError;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<()> {
        <Self as Encoder<&Packet>>::encode(self, &item, dst)
    }
}

impl Encoder<&Packet> for PacketCodec {
    type Error = PacketError;

    fn encode(&mut self, item: &Packet, dst: &mut BytesMut) -> Result<()> {
        self.check_limit(item.len() as usize)?;
        item.encode(dst);
        debug!(length = item.len(), bytes = item.encoded_len(), "Encoded frame");
        Ok(())
    }
}
