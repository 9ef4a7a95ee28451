// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from key validation through
//! frame extraction, decryption and decompression. None of them leave the
//! caller's grid modified.

use core::fmt;

use crate::grid::GridError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The pixel grid handed to the codec is malformed.
    InvalidGrid(GridError),
    /// An encryption key was supplied that is not exactly 32 bytes.
    InvalidKeyLength(usize),
    /// The framed message needs more pixels than the grid has.
    /// Both sizes are payload bytes.
    MessageTooLarge { required: usize, capacity: usize },
    /// Fewer than 33 bits (flag + length) could be harvested.
    TruncatedHeader { available: usize },
    /// The declared payload length exceeds the bits left after the header.
    TruncatedPayload { declared: usize, available: usize },
    /// A bit sequence whose length is not a multiple of 8 reached byte
    /// reconstruction.
    MalformedLength(usize),
    /// The compressed stream is empty, truncated or fails its checksum.
    CorruptPayload,
    /// AEAD tag check failed (wrong key, corrupted or tampered pixels).
    AuthenticationFailed,
    /// The encrypted blob is shorter than one nonce.
    CiphertextTooShort,
    /// The recovered message is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid pixel grid: {e}"),
            Self::InvalidKeyLength(len) => {
                write!(f, "encryption key must be exactly 32 bytes, got {len}")
            }
            Self::MessageTooLarge { required, capacity } => write!(
                f,
                "message too large for this image (requires {required} bytes, {capacity} available)"
            ),
            Self::TruncatedHeader { available } => {
                write!(f, "image holds only {available} bits, too few for a frame header")
            }
            Self::TruncatedPayload { declared, available } => write!(
                f,
                "frame declares {declared} payload bytes but only {available} bits remain"
            ),
            Self::MalformedLength(len) => {
                write!(f, "bit sequence of length {len} is not a whole number of bytes")
            }
            Self::CorruptPayload => write!(f, "compressed payload is corrupt"),
            Self::AuthenticationFailed => write!(f, "authentication failed (wrong key?)"),
            Self::CiphertextTooShort => write!(f, "ciphertext shorter than nonce"),
            Self::InvalidUtf8 => write!(f, "extracted text is not valid UTF-8"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for StegoError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}
