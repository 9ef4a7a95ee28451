// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for pixel grid construction.

use std::fmt;

/// Errors that can occur when building a [`PixelGrid`](super::PixelGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The pixel buffer does not hold exactly `width * height` entries.
    DimensionMismatch { expected: usize, actual: usize },
    /// A raw RGBA byte buffer whose length is not a multiple of 4.
    RaggedRawBuffer(usize),
    /// `width * height` does not fit in `usize`.
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "pixel buffer holds {actual} pixels, dimensions require {expected}")
            }
            Self::RaggedRawBuffer(len) => {
                write!(f, "raw RGBA buffer length {len} is not a multiple of 4")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid dimensions {width}x{height} overflow the address space")
            }
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
