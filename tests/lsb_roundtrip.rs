// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Round-trip integration tests for LSB encode/decode.

use pixsteg_core::{capacity, decode, decode_bytes, encode, encode_bytes, EmbedPolicy, PixelGrid, StegoError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const KEY: &[u8; 32] = b"3GjmkamDG8k4JLxeCJ58KB0ne65wmJFl";
const OTHER_KEY: &[u8; 32] = b"d3Q8fjQ9CQzosiIvHeQz3Lo0L09MkEXW";

fn noisy_cover(width: u32, height: u32, seed: u64) -> PixelGrid {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut raw = vec![0u8; width as usize * height as usize * 4];
    rng.fill_bytes(&mut raw);
    PixelGrid::from_raw(width, height, &raw).unwrap()
}

fn all_policies() -> Vec<EmbedPolicy> {
    vec![
        EmbedPolicy::plain(),
        EmbedPolicy::plain().compressed(true),
        EmbedPolicy::with_key(KEY).unwrap(),
        EmbedPolicy::with_key(KEY).unwrap().compressed(true),
    ]
}

#[test]
fn concrete_scenario_100x100() {
    let cover = noisy_cover(100, 100, 1);
    let message = "Hello there, this is a test message";
    assert_eq!(capacity(100, 100), 1245);

    let plain = EmbedPolicy::plain();
    let stego_plain = encode(&cover, message, &plain).unwrap();
    assert_eq!(decode(&stego_plain, &plain).unwrap(), message);

    let keyed = EmbedPolicy::with_key(KEY).unwrap();
    let stego_keyed = encode(&cover, message, &keyed).unwrap();
    assert_ne!(stego_keyed, stego_plain, "keyed run should embed a different bit pattern");
    assert_eq!(decode(&stego_keyed, &keyed).unwrap(), message);
}

#[test]
fn roundtrip_every_policy() {
    let cover = noisy_cover(120, 90, 2);
    let messages = [
        "x".to_string(),
        "Hello, steganography!".to_string(),
        "Héllo wörld! 日本語テスト 🔐".to_string(),
        "The quick brown fox jumps over the lazy dog. ".repeat(12),
    ];

    for policy in all_policies() {
        for message in &messages {
            let stego = encode(&cover, message, &policy).unwrap();
            let decoded = decode(&stego, &policy).unwrap();
            assert_eq!(&decoded, message, "policy {policy:?}");
        }
    }
}

#[test]
fn empty_message_every_policy() {
    let cover = noisy_cover(40, 40, 3);
    for policy in all_policies() {
        let stego = encode(&cover, "", &policy).unwrap();
        assert_eq!(decode(&stego, &policy).unwrap(), "", "policy {policy:?}");
    }
}

#[test]
fn smallest_grid_holding_empty_frame() {
    // 33 pixels: exactly the flag + length header.
    let cover = noisy_cover(33, 1, 4);
    let stego = encode(&cover, "", &EmbedPolicy::plain()).unwrap();
    assert_eq!(decode(&stego, &EmbedPolicy::plain()).unwrap(), "");

    let cover = noisy_cover(32, 1, 4);
    assert!(matches!(
        encode(&cover, "", &EmbedPolicy::plain()),
        Err(StegoError::MessageTooLarge { .. })
    ));
}

#[test]
fn binary_payload_roundtrip() {
    let cover = noisy_cover(64, 64, 5);
    let payload: Vec<u8> = (0..=255u8).collect();
    for policy in all_policies() {
        let stego = encode_bytes(&cover, &payload, &policy).unwrap();
        assert_eq!(decode_bytes(&stego, &policy).unwrap(), payload);
    }
}

#[test]
fn wrong_key_fails_authentication() {
    let cover = noisy_cover(100, 100, 6);
    for compress in [false, true] {
        let policy = EmbedPolicy::with_key(KEY).unwrap().compressed(compress);
        let stego = encode(&cover, &"secret msg ".repeat(20), &policy).unwrap();

        let wrong = EmbedPolicy::with_key(OTHER_KEY).unwrap();
        assert!(
            matches!(decode(&stego, &wrong), Err(StegoError::AuthenticationFailed)),
            "compress={compress}"
        );
    }
}

#[test]
fn missing_key_does_not_yield_plaintext() {
    let cover = noisy_cover(100, 100, 7);
    let message = "Hello there, this is a test message";
    let stego = encode(&cover, message, &EmbedPolicy::with_key(KEY).unwrap()).unwrap();

    // Without the key the payload comes back as nonce || ciphertext || tag.
    let raw = decode_bytes(&stego, &EmbedPolicy::plain()).unwrap();
    assert_eq!(raw.len(), message.len() + 28);
    assert_ne!(&raw[12..12 + message.len()], message.as_bytes());
}

#[test]
fn key_supplied_for_unkeyed_image_fails() {
    let cover = noisy_cover(100, 100, 8);
    let stego = encode(&cover, "no key used", &EmbedPolicy::plain()).unwrap();
    assert!(matches!(
        decode(&stego, &EmbedPolicy::with_key(KEY).unwrap()),
        Err(StegoError::CiphertextTooShort)
    ));
}

#[test]
fn key_length_validation() {
    for len in [0usize, 16, 33] {
        let key = vec![7u8; len];
        assert!(
            matches!(EmbedPolicy::with_key(&key), Err(StegoError::InvalidKeyLength(l)) if l == len),
            "key of {len} bytes should be rejected"
        );
    }
    assert!(EmbedPolicy::with_key(&[7u8; 32]).is_ok());
}

#[test]
fn fresh_cover_per_call_is_independent() {
    // The same policy and message produce identical plain stego output,
    // but keyed output differs per call (random nonce).
    let cover = noisy_cover(80, 80, 9);
    let plain = EmbedPolicy::plain();
    assert_eq!(encode(&cover, "repeat", &plain).unwrap(), encode(&cover, "repeat", &plain).unwrap());

    let keyed = EmbedPolicy::with_key(KEY).unwrap();
    let a = encode(&cover, "repeat", &keyed).unwrap();
    let b = encode(&cover, "repeat", &keyed).unwrap();
    assert_ne!(a, b);
    assert_eq!(decode(&a, &keyed).unwrap(), decode(&b, &keyed).unwrap());
}

#[test]
fn re_encoding_overwrites_previous_frame() {
    let cover = noisy_cover(100, 100, 10);
    let first = encode(&cover, &"first message ".repeat(30), &EmbedPolicy::plain()).unwrap();
    let second = encode(&first, "second", &EmbedPolicy::plain()).unwrap();
    assert_eq!(decode(&second, &EmbedPolicy::plain()).unwrap(), "second");
}
