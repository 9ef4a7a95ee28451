// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Row-major LSB walk over the red channel.
//!
//! Pixel `i` in row-major order carries frame bit `i`. Embedding clears the
//! red LSB of pixels `0..bits.len()` and ORs in the bit; nothing else in the
//! grid changes. Harvesting reads the red LSB of every pixel.
//!
//! With the `parallel` feature, rows are processed on the rayon pool. Each
//! row knows its starting bit index (`row * width`), so the result does not
//! depend on scheduling.

use crate::grid::{Rgba, RED};
use crate::stego::progress::Progress;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Channel that carries the frame bits.
pub const EMBED_CHANNEL: usize = RED;

/// Write `bits` into the red LSBs of `pixels`, one bit per pixel.
///
/// The caller must have checked `bits.len() <= pixels.len()`.
pub fn embed_bits(pixels: &mut [Rgba], width: usize, bits: &[u8], progress: Option<&Progress>) {
    debug_assert!(bits.len() <= pixels.len(), "frame of {} bits overflows {} pixels", bits.len(), pixels.len());
    if width == 0 {
        return;
    }

    let embed_row = |(row, px_row): (usize, &mut [Rgba])| {
        let start = row * width;
        if start < bits.len() {
            let end = (start + width).min(bits.len());
            for (px, &bit) in px_row.iter_mut().zip(&bits[start..end]) {
                px[EMBED_CHANNEL] = (px[EMBED_CHANNEL] & 0xFE) | (bit & 1);
            }
        }
        if let Some(p) = progress {
            p.advance(px_row.len() as u64);
        }
    };

    #[cfg(feature = "parallel")]
    pixels.par_chunks_mut(width).enumerate().for_each(embed_row);
    #[cfg(not(feature = "parallel"))]
    pixels.chunks_mut(width).enumerate().for_each(embed_row);
}

/// Read the red LSB of every pixel in row-major order.
pub fn harvest_bits(pixels: &[Rgba], width: usize, progress: Option<&Progress>) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }

    let harvest_row = |px_row: &[Rgba]| {
        let bits: Vec<u8> = px_row.iter().map(|px| px[EMBED_CHANNEL] & 1).collect();
        if let Some(p) = progress {
            p.advance(px_row.len() as u64);
        }
        bits
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<u8>> = pixels.par_chunks(width).map(harvest_row).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<u8>> = pixels.chunks(width).map(harvest_row).collect();

    rows.concat()
}
