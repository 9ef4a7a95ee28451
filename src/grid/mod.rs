// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Decoded RGBA pixel storage.
//!
//! [`PixelGrid`] is the boundary type between the codec and whatever image
//! library the caller uses to read and write container formats. Pixels are
//! stored in row-major order (y outer, x inner, origin top-left), which is
//! also the order the codec walks when embedding frame bits.

pub mod error;
#[cfg(feature = "image")]
pub mod convert;

pub use error::GridError;

/// One RGBA pixel, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Channel indices into an [`Rgba`] pixel.
pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;
pub const ALPHA: usize = 3;

/// A width × height grid of RGBA pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    /// - [`GridError::TooLarge`] if `width * height` overflows `usize`.
    /// - [`GridError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> error::Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(GridError::DimensionMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// Create a grid with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> error::Result<Self> {
        let count = checked_pixel_count(width, height)?;
        Ok(Self { width, height, pixels: vec![fill; count] })
    }

    /// Build a grid from a flat `[r, g, b, a, r, g, b, a, ...]` byte buffer.
    pub fn from_raw(width: u32, height: u32, raw: &[u8]) -> error::Result<Self> {
        if raw.len() % 4 != 0 {
            return Err(GridError::RaggedRawBuffer(raw.len()));
        }
        let pixels = raw
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (= one bit of embedding capacity each).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, px: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx] = px;
    }

    /// Row-major read-only access to all pixels.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Row-major mutable access to all pixels.
    ///
    /// Each `width`-long chunk is one row. Used by the row-sharded LSB walk.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Flatten back into `[r, g, b, a, ...]` bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width, "column {x} out of range for width {}", self.width);
        assert!(y < self.height, "row {y} out of range for height {}", self.height);
        y as usize * self.width as usize + x as usize
    }
}

fn checked_pixel_count(width: u32, height: u32) -> error::Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::TooLarge { width, height })
}
