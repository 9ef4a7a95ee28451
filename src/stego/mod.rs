// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Steganographic encoding and decoding.
//!
//! A message is sealed by the payload pipeline (optional zstd compression,
//! then optional AES-256-GCM-SIV encryption), wrapped in a frame
//! (`flag | u32 length | payload`) and written one bit per pixel into the red
//! channel's least-significant bit, walking the grid in row-major order.
//!
//! All entry points are stateless. [`encode`] returns a new grid and never
//! modifies its input; [`decode`] only reads.

pub mod error;
pub mod bits;
pub mod crypto;
pub mod frame;
pub mod payload;
pub mod capacity;
pub mod lsb;
mod pipeline;
pub mod progress;

pub use error::StegoError;
pub use pipeline::{decode, decode_bytes, decode_bytes_with_progress, encode, encode_bytes, encode_bytes_with_progress};
pub use capacity::{capacity, message_capacity};
pub use crypto::SecretKey;
pub use payload::{embedded_size, EmbedPolicy};
pub use progress::Progress;
