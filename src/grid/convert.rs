// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Conversions between [`PixelGrid`] and the `image` crate's buffers.
//!
//! Container I/O (PNG decode/encode, format choice) stays with the caller;
//! this only moves pixels across the boundary. Sources with 16-bit or float
//! channels are normalized to 8-bit RGBA by [`DynamicImage::to_rgba8`].
//! Only lossless containers preserve the embedded LSBs.

use ::image::{DynamicImage, ImageBuffer, Rgba as ImageRgba, RgbaImage};

use super::PixelGrid;

impl From<&RgbaImage> for PixelGrid {
    fn from(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        // ImageBuffer guarantees width * height pixels.
        Self { width, height, pixels }
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(img: RgbaImage) -> Self {
        Self::from(&img)
    }
}

impl From<&DynamicImage> for PixelGrid {
    fn from(img: &DynamicImage) -> Self {
        Self::from(img.to_rgba8())
    }
}

impl From<&PixelGrid> for RgbaImage {
    fn from(grid: &PixelGrid) -> Self {
        ImageBuffer::from_fn(grid.width(), grid.height(), |x, y| ImageRgba(grid.get(x, y)))
    }
}

impl From<PixelGrid> for RgbaImage {
    fn from(grid: PixelGrid) -> Self {
        RgbaImage::from(&grid)
    }
}
