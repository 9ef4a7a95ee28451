// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Frame construction and parsing.
//!
//! The frame is the self-describing bit sequence written into pixel LSBs:
//!
//! ```text
//! [1 bit  ] compressed flag (1 = zstd stage applied)
//! [32 bits] payload length in bytes (big-endian u32)
//! [N bytes] payload (post-compression, post-encryption)
//! ```
//!
//! Total frame size = 33 + 8 * payload_len bits. Whether the payload is
//! encrypted is not recorded; the decoder must be given the same key.

use crate::stego::bits::{bits_to_bytes, bytes_to_bits};
use crate::stego::error::StegoError;

/// Width of the compressed flag in bits.
pub const FLAG_BITS: usize = 1;

/// Width of the big-endian length field in bits.
pub const LENGTH_BITS: usize = 32;

/// Fixed header overhead: flag(1) + length(32) = 33 bits.
pub const HEADER_BITS: usize = FLAG_BITS + LENGTH_BITS;

/// Largest payload the 32-bit length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Number of frame bits needed to carry `payload_len` bytes.
pub fn frame_bit_len(payload_len: usize) -> usize {
    HEADER_BITS + payload_len * 8
}

/// Build the frame bit sequence for an already-transformed payload.
///
/// # Errors
/// [`StegoError::MessageTooLarge`] if the payload length does not fit the
/// 32-bit length field.
pub fn build_frame_bits(compressed: bool, payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    let len = u32::try_from(payload.len()).map_err(|_| StegoError::MessageTooLarge {
        required: payload.len(),
        capacity: MAX_PAYLOAD_LEN,
    })?;

    let mut bits = Vec::with_capacity(frame_bit_len(payload.len()));
    bits.push(compressed as u8);
    bits.extend(bytes_to_bits(&len.to_be_bytes()));
    bits.extend(bytes_to_bits(payload));
    Ok(bits)
}

/// Parsed frame contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    /// Whether the compression stage was applied before embedding.
    pub compressed: bool,
    /// Payload bytes exactly as embedded (possibly compressed and/or encrypted).
    pub payload: Vec<u8>,
}

/// Parse a frame from a harvested bit sequence.
///
/// `bits` is normally one bit per pixel of the whole grid, so it is usually
/// longer than the frame; trailing bits past the declared payload are ignored.
///
/// # Errors
/// - [`StegoError::TruncatedHeader`] if fewer than 33 bits are available.
/// - [`StegoError::TruncatedPayload`] if the declared length overruns `bits`.
pub fn parse_frame_bits(bits: &[u8]) -> Result<ParsedFrame, StegoError> {
    if bits.len() < HEADER_BITS {
        return Err(StegoError::TruncatedHeader { available: bits.len() });
    }

    let compressed = bits[0] & 1 == 1;

    let len_bytes = bits_to_bytes(&bits[FLAG_BITS..HEADER_BITS])?;
    let declared = u32::from_be_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as usize;

    let body = &bits[HEADER_BITS..];
    let payload_bits = declared
        .checked_mul(8)
        .filter(|&n| n <= body.len())
        .ok_or(StegoError::TruncatedPayload { declared, available: body.len() })?;

    let payload = bits_to_bytes(&body[..payload_bits])?;
    Ok(ParsedFrame { compressed, payload })
}
