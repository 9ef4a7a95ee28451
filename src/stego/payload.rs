// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Payload pipeline: compression and encryption stages.
//!
//! On encode the message runs through two optional stages in a fixed order:
//!
//! ```text
//! message ──[zstd, if policy.compress]──[AES-256-GCM-SIV, if policy.key]──▶ payload
//! ```
//!
//! Decode undoes them in reverse: decrypt, then decompress. Compressing
//! ciphertext would gain nothing, so compression always sees plaintext.
//!
//! The compressed form is kept only when it is strictly smaller than the
//! input; [`SealedPayload::compressed`] records what actually happened and
//! becomes the frame's flag bit.

use std::io::{Read, Write};

use crate::stego::crypto::{self, SecretKey, ENCRYPTION_OVERHEAD};
use crate::stego::error::StegoError;

/// Zstandard compression level. Payloads are at most a few MB so the
/// slower high levels still finish quickly.
const ZSTD_LEVEL: i32 = 19;

/// Upper bound on decompressed output, to stop decompression bombs.
pub const MAX_DECOMPRESSED_LEN: usize = 64 * 1024 * 1024;

/// Per-call transform policy.
#[derive(Debug, Clone, Default)]
pub struct EmbedPolicy {
    /// Encrypt with this key when present. Decode must use the same key.
    pub key: Option<SecretKey>,
    /// Try the compression stage before encrypting. Ignored by decode,
    /// which follows the frame's flag bit.
    pub compress: bool,
}

impl EmbedPolicy {
    /// No compression, no encryption.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Validate `key` and return a policy that encrypts with it.
    ///
    /// # Errors
    /// [`StegoError::InvalidKeyLength`] unless `key` is exactly 32 bytes.
    pub fn with_key(key: &[u8]) -> Result<Self, StegoError> {
        Ok(Self { key: Some(SecretKey::from_slice(key)?), compress: false })
    }

    /// Enable or disable the compression stage.
    pub fn compressed(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Output of the encode-side pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    /// Bytes to embed.
    pub bytes: Vec<u8>,
    /// Whether the compression stage was applied.
    pub compressed: bool,
}

/// Run the encode-side pipeline: compress (optional) then encrypt (optional).
pub fn seal(message: &[u8], policy: &EmbedPolicy) -> SealedPayload {
    let (plaintext, compressed) = if policy.compress {
        try_compress(message)
    } else {
        (message.to_vec(), false)
    };

    let bytes = match &policy.key {
        Some(key) => crypto::encrypt(&plaintext, key),
        None => plaintext,
    };

    log::trace!(
        "sealed {} message bytes into {} payload bytes (compressed={}, encrypted={})",
        message.len(),
        bytes.len(),
        compressed,
        policy.key.is_some()
    );

    SealedPayload { bytes, compressed }
}

/// Run the decode-side pipeline: decrypt (if keyed) then decompress (if flagged).
///
/// # Errors
/// - [`StegoError::CiphertextTooShort`] / [`StegoError::AuthenticationFailed`]
///   from the decryption stage.
/// - [`StegoError::CorruptPayload`] from the decompression stage.
pub fn open(payload: &[u8], compressed: bool, key: Option<&SecretKey>) -> Result<Vec<u8>, StegoError> {
    let plaintext = match key {
        Some(key) => crypto::decrypt(payload, key)?,
        None => payload.to_vec(),
    };

    if compressed {
        decompress(&plaintext)
    } else {
        Ok(plaintext)
    }
}

/// Exact payload size (bytes) that an encode of `message` under `policy`
/// would embed.
///
/// Runs the compression stage for real; encryption adds a fixed
/// [`ENCRYPTION_OVERHEAD`]. Compare against
/// [`capacity`](crate::stego::capacity::capacity) before encoding.
pub fn embedded_size(message: &[u8], policy: &EmbedPolicy) -> usize {
    let plain_len = if policy.compress {
        try_compress(message).0.len()
    } else {
        message.len()
    };
    match policy.key {
        Some(_) => plain_len + ENCRYPTION_OVERHEAD,
        None => plain_len,
    }
}

/// Try zstd compression; return the compressed form only if strictly smaller.
fn try_compress(data: &[u8]) -> (Vec<u8>, bool) {
    let compressed = compress(data);
    if compressed.len() < data.len() {
        (compressed, true)
    } else {
        log::debug!(
            "compression skipped: {} bytes would grow to {}",
            data.len(),
            compressed.len()
        );
        (data.to_vec(), false)
    }
}

/// Compress data with zstd, including the frame content checksum.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = zstd::stream::Encoder::new(Vec::new(), ZSTD_LEVEL)
        .expect("zstd encoder creation should not fail");
    encoder
        .include_checksum(true)
        .expect("zstd checksum flag should not fail");
    encoder.write_all(data).expect("zstd compression should not fail");
    encoder.finish().expect("zstd frame finish should not fail")
}

/// Decompress a zstd stream produced by [`compress`].
///
/// # Errors
/// [`StegoError::CorruptPayload`] if the stream is empty, truncated, not a
/// zstd frame, fails its checksum, or expands beyond [`MAX_DECOMPRESSED_LEN`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, StegoError> {
    if data.is_empty() {
        return Err(StegoError::CorruptPayload);
    }

    let decoder = zstd::stream::read::Decoder::new(data).map_err(|_| StegoError::CorruptPayload)?;
    let mut output = Vec::new();
    decoder
        .take(MAX_DECOMPRESSED_LEN as u64 + 1)
        .read_to_end(&mut output)
        .map_err(|e| {
            log::debug!("zstd decode failed: {e}");
            StegoError::CorruptPayload
        })?;

    if output.len() > MAX_DECOMPRESSED_LEN {
        return Err(StegoError::CorruptPayload);
    }
    Ok(output)
}
