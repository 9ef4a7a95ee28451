// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # pixsteg-core
//!
//! LSB steganography codec for hiding byte payloads in RGBA pixel
//! grids. One frame bit goes into the red channel's least-significant bit of
//! each pixel, so every change is at most ±1 in a single channel.
//!
//! The embedded frame is self-describing (`flag | u32 length | payload`).
//! Payloads can be compressed with zstd and sealed with AES-256-GCM-SIV under
//! a caller-supplied 32-byte key; tampering or a wrong key surfaces as an
//! authentication failure.
//!
//! Image containers are the caller's business: hand the codec a decoded
//! [`PixelGrid`] and persist the grid it returns in a lossless format. The
//! `image` feature adds conversions to and from `image::RgbaImage`.
//!
//! # Quick start
//!
//! ```rust
//! use pixsteg_core::{decode, encode, EmbedPolicy, PixelGrid};
//!
//! let cover = PixelGrid::filled(100, 100, [200, 180, 160, 255]).unwrap();
//! let policy = EmbedPolicy::with_key(b"3GjmkamDG8k4JLxeCJ58KB0ne65wmJFl")
//!     .unwrap()
//!     .compressed(true);
//!
//! let stego = encode(&cover, "secret message", &policy).unwrap();
//! assert_eq!(decode(&stego, &policy).unwrap(), "secret message");
//! ```

pub mod grid;
pub mod stego;

pub use grid::{GridError, PixelGrid, Rgba};
pub use stego::{capacity, message_capacity, embedded_size, EmbedPolicy, SecretKey, StegoError};
pub use stego::{decode, decode_bytes, decode_bytes_with_progress, encode, encode_bytes, encode_bytes_with_progress};
pub use stego::progress::{self, Progress};
