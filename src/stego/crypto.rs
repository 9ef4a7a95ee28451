// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Authenticated encryption stage.
//!
//! Payloads are sealed with AES-256-GCM-SIV under a caller-supplied 32-byte
//! key. Every call draws a fresh random nonce, which travels in front of the
//! ciphertext so the blob is self-contained:
//!
//! ```text
//! [12 bytes] nonce
//! [N bytes ] ciphertext
//! [16 bytes] authentication tag
//! ```
//!
//! Any flipped bit in the embedded blob surfaces as
//! [`StegoError::AuthenticationFailed`] rather than as altered plaintext.

use core::fmt;

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;
/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Bytes added to a payload by [`encrypt`]: nonce(12) + tag(16) = 28.
pub const ENCRYPTION_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// A validated 256-bit encryption key. Wiped from memory on drop.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<[u8; KEY_LEN]>);

impl SecretKey {
    /// Validate and copy a key.
    ///
    /// # Errors
    /// [`StegoError::InvalidKeyLength`] unless `bytes` is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, StegoError> {
        let key: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| StegoError::InvalidKeyLength(bytes.len()))?;
        Ok(Self(Zeroizing::new(key)))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for SecretKey {
    fn from(key: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(key))
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = StegoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Encrypt plaintext with AES-256-GCM-SIV.
///
/// Returns `nonce || ciphertext || tag`, always `plaintext.len() + 28` bytes.
pub fn encrypt(plaintext: &[u8], key: &SecretKey) -> Vec<u8> {
    use rand::RngCore;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let cipher = Aes256GcmSiv::new_from_slice(key.as_bytes()).expect("valid key length");
    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher.encrypt(nonce, plaintext).expect("AES-GCM-SIV encrypt should not fail");

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    blob
}

/// Decrypt a `nonce || ciphertext || tag` blob produced by [`encrypt`].
///
/// # Errors
/// - [`StegoError::CiphertextTooShort`] if the blob cannot hold a nonce.
/// - [`StegoError::AuthenticationFailed`] if the key is wrong or any byte
///   was altered.
pub fn decrypt(blob: &[u8], key: &SecretKey) -> Result<Vec<u8>, StegoError> {
    if blob.len() < NONCE_LEN {
        return Err(StegoError::CiphertextTooShort);
    }
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);

    let cipher = Aes256GcmSiv::new_from_slice(key.as_bytes()).expect("valid key length");
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| StegoError::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(fill: u8) -> SecretKey {
        SecretKey::from([fill; KEY_LEN])
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let msg = b"Hello there, this is a test message";
        let blob = encrypt(msg, &key(7));
        assert_eq!(blob.len(), msg.len() + ENCRYPTION_OVERHEAD);
        assert_eq!(decrypt(&blob, &key(7)).unwrap(), msg);
    }

    #[test]
    fn wrong_key_fails() {
        let blob = encrypt(b"secret message", &key(1));
        assert!(matches!(decrypt(&blob, &key(2)), Err(StegoError::AuthenticationFailed)));
    }

    #[test]
    fn tampered_blob_fails() {
        let mut blob = encrypt(b"secret message", &key(1));
        let last = blob.len() - 1;
        blob[last] ^= 0x01;
        assert!(matches!(decrypt(&blob, &key(1)), Err(StegoError::AuthenticationFailed)));
    }

    #[test]
    fn empty_message_works() {
        let blob = encrypt(b"", &key(3));
        assert_eq!(blob.len(), ENCRYPTION_OVERHEAD);
        assert!(decrypt(&blob, &key(3)).unwrap().is_empty());
    }

    #[test]
    fn short_blobs() {
        assert!(matches!(decrypt(&[0u8; 11], &key(0)), Err(StegoError::CiphertextTooShort)));
        assert!(matches!(decrypt(&[], &key(0)), Err(StegoError::CiphertextTooShort)));
        // A nonce with no room for a tag is long enough to try, and fails auth.
        assert!(matches!(decrypt(&[0u8; 12], &key(0)), Err(StegoError::AuthenticationFailed)));
    }

    #[test]
    fn ciphertext_differs_per_encryption() {
        let a = encrypt(b"same message", &key(9));
        let b = encrypt(b"same message", &key(9));
        assert_ne!(a, b, "fresh nonce per call");
    }

    #[test]
    fn key_length_validation() {
        for len in [0usize, 16, 31, 33, 64] {
            let bytes = vec![0u8; len];
            assert!(
                matches!(SecretKey::from_slice(&bytes), Err(StegoError::InvalidKeyLength(l)) if l == len),
                "length {len} should be rejected"
            );
        }
        assert!(SecretKey::from_slice(&[0u8; 32]).is_ok());
        assert!(SecretKey::try_from(&b"3GjmkamDG8k4JLxeCJ58KB0ne65wmJFl"[..]).is_ok());
    }

    #[test]
    fn debug_redacts_key() {
        assert_eq!(format!("{:?}", key(0xAA)), "SecretKey(..)");
    }
}
