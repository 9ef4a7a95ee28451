// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Capacity estimation.
//!
//! Each pixel carries one frame bit, and the frame spends 33 bits on its
//! header, so a `w × h` grid holds `floor((w·h − 33) / 8)` payload bytes.
//! Exactly this many bytes always fit; one more never does.

use crate::stego::crypto::ENCRYPTION_OVERHEAD;
use crate::stego::frame::HEADER_BITS;
use crate::stego::payload::EmbedPolicy;

/// Maximum payload size in bytes (post-compression, post-encryption) that a
/// `width × height` grid can carry. Returns 0 for grids too small to hold a
/// header.
pub fn capacity(width: u32, height: u32) -> usize {
    let pixels = (width as u64) * (height as u64);
    let bytes = pixels.saturating_sub(HEADER_BITS as u64) / 8;
    usize::try_from(bytes).unwrap_or(usize::MAX)
}

/// Maximum message size in bytes under `policy`, before compression.
///
/// Subtracts the nonce and tag when a key is set. Compression savings are
/// content-dependent and not included; use
/// [`embedded_size`](crate::stego::payload::embedded_size) for an exact
/// pre-flight check of a specific message.
pub fn message_capacity(width: u32, height: u32, policy: &EmbedPolicy) -> usize {
    let raw = capacity(width, height);
    match policy.key {
        Some(_) => raw.saturating_sub(ENCRYPTION_OVERHEAD),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::frame::frame_bit_len;

    #[test]
    fn hundred_by_hundred() {
        // 10,000 pixels − 33 header bits = 9,967 bits → 1,245 whole bytes.
        assert_eq!(capacity(100, 100), 1245);
    }

    #[test]
    fn tiny_grids_have_no_capacity() {
        assert_eq!(capacity(0, 0), 0);
        assert_eq!(capacity(1, 1), 0);
        assert_eq!(capacity(5, 8), 0);
        assert_eq!(capacity(41, 1), 1);
    }

    #[test]
    fn capacity_is_tight_for_every_remainder() {
        for pixels in 33u32..200 {
            let cap = capacity(pixels, 1);
            assert!(frame_bit_len(cap) <= pixels as usize, "{pixels}: capacity overflows");
            assert!(frame_bit_len(cap + 1) > pixels as usize, "{pixels}: capacity not tight");
        }
    }

    #[test]
    fn keyed_capacity_subtracts_overhead() {
        let keyed = EmbedPolicy::with_key(&[1u8; 32]).unwrap();
        assert_eq!(message_capacity(100, 100, &keyed), 1245 - 28);
        assert_eq!(message_capacity(100, 100, &EmbedPolicy::plain()), 1245);
        assert_eq!(message_capacity(10, 10, &keyed), 0);
    }

    #[test]
    fn no_overflow_on_huge_dimensions() {
        let cap = capacity(u32::MAX, u32::MAX);
        assert!(cap > 0);
    }
}
