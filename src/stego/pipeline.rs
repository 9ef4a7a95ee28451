// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! LSB encode/decode pipeline.
//!
//! Encode:
//! 1. Seal the message (compress, then encrypt, per policy)
//! 2. Check the framed payload fits one bit per pixel, before building the
//!    frame or touching any pixel
//! 3. Frame it: flag bit + 32-bit length + payload bits
//! 4. Copy the grid and write frame bits into red LSBs in row-major order
//!
//! Decode reverses it: harvest every red LSB, parse the frame, then decrypt
//! and decompress.

use crate::grid::PixelGrid;
use crate::stego::capacity::capacity;
use crate::stego::error::StegoError;
use crate::stego::frame;
use crate::stego::lsb;
use crate::stego::payload::{self, EmbedPolicy};
use crate::stego::progress::Progress;

/// Encode a text message into a copy of `grid`.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] if the framed payload needs more pixels
///   than `grid` has. `grid` is never modified.
pub fn encode(grid: &PixelGrid, message: &str, policy: &EmbedPolicy) -> Result<PixelGrid, StegoError> {
    encode_impl(grid, message.as_bytes(), policy, None)
}

/// Encode an arbitrary byte payload into a copy of `grid`.
pub fn encode_bytes(grid: &PixelGrid, message: &[u8], policy: &EmbedPolicy) -> Result<PixelGrid, StegoError> {
    encode_impl(grid, message, policy, None)
}

/// [`encode_bytes`] with a progress reporter driven by the pixel walk.
pub fn encode_bytes_with_progress(
    grid: &PixelGrid,
    message: &[u8],
    policy: &EmbedPolicy,
    progress: &Progress,
) -> Result<PixelGrid, StegoError> {
    encode_impl(grid, message, policy, Some(progress))
}

fn encode_impl(
    grid: &PixelGrid,
    message: &[u8],
    policy: &EmbedPolicy,
    progress: Option<&Progress>,
) -> Result<PixelGrid, StegoError> {
    // 1. Payload pipeline.
    let sealed = payload::seal(message, policy);

    // 2. Capacity check, on byte counts so an oversized payload is never
    //    expanded to bits. Nothing has been written yet.
    let limit = embed_limit(grid.width(), grid.height());
    if sealed.bytes.len() > limit {
        return Err(StegoError::MessageTooLarge {
            required: sealed.bytes.len(),
            capacity: limit,
        });
    }

    // 3. Frame bits.
    let frame_bits = frame::build_frame_bits(sealed.compressed, &sealed.bytes)?;

    log::debug!(
        "embedding {} frame bits ({} payload bytes, compressed={}) into {}x{} grid",
        frame_bits.len(),
        sealed.bytes.len(),
        sealed.compressed,
        grid.width(),
        grid.height()
    );

    // 4. Copy and embed.
    let mut stego = grid.clone();
    let width = stego.width() as usize;
    if let Some(p) = progress {
        p.init(stego.pixel_count() as u64);
    }
    lsb::embed_bits(stego.pixels_mut(), width, &frame_bits, progress);
    if let Some(p) = progress {
        p.finish();
    }

    Ok(stego)
}

/// Largest payload an encode into a `width × height` grid accepts: the grid
/// capacity, capped by the frame's 32-bit length field.
fn embed_limit(width: u32, height: u32) -> usize {
    capacity(width, height).min(frame::MAX_PAYLOAD_LEN)
}

/// Decode a text message from `grid`.
///
/// `policy.key` must match the key used to encode; `policy.compress` is
/// ignored since the frame records whether compression was applied.
///
/// # Errors
/// - [`StegoError::TruncatedHeader`] / [`StegoError::TruncatedPayload`] if
///   the grid cannot hold the frame it claims to carry.
/// - [`StegoError::AuthenticationFailed`] / [`StegoError::CiphertextTooShort`]
///   on a wrong key or altered pixels.
/// - [`StegoError::CorruptPayload`] if decompression fails.
/// - [`StegoError::InvalidUtf8`] if the recovered bytes are not UTF-8.
pub fn decode(grid: &PixelGrid, policy: &EmbedPolicy) -> Result<String, StegoError> {
    let bytes = decode_impl(grid, policy, None)?;
    String::from_utf8(bytes).map_err(|_| StegoError::InvalidUtf8)
}

/// Decode the raw byte payload from `grid`.
pub fn decode_bytes(grid: &PixelGrid, policy: &EmbedPolicy) -> Result<Vec<u8>, StegoError> {
    decode_impl(grid, policy, None)
}

/// [`decode_bytes`] with a progress reporter driven by the pixel walk.
pub fn decode_bytes_with_progress(
    grid: &PixelGrid,
    policy: &EmbedPolicy,
    progress: &Progress,
) -> Result<Vec<u8>, StegoError> {
    decode_impl(grid, policy, Some(progress))
}

fn decode_impl(
    grid: &PixelGrid,
    policy: &EmbedPolicy,
    progress: Option<&Progress>,
) -> Result<Vec<u8>, StegoError> {
    // 1. Harvest the whole grid; the length is only known after the header.
    if let Some(p) = progress {
        p.init(grid.pixel_count() as u64);
    }
    let bits = lsb::harvest_bits(grid.pixels(), grid.width() as usize, progress);
    if let Some(p) = progress {
        p.finish();
    }

    // 2. Frame.
    let parsed = frame::parse_frame_bits(&bits)?;
    log::debug!(
        "extracted frame: {} payload bytes, compressed={}",
        parsed.payload.len(),
        parsed.compressed
    );

    // 3. Payload pipeline, reversed.
    payload::open(&parsed.payload, parsed.compressed, policy.key.as_ref())
}
