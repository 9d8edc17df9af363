//! 128-bit block cipher engine.
//!
//! The construction follows the familiar substitute / shift / mix / add-key
//! round structure with a 10-round schedule, but it is a private transform:
//! round-trip correctness against itself is guaranteed, bit-compatibility
//! with outside implementations is not claimed. Messages are padded and each
//! 16-byte block is processed independently (codebook style), so ciphertext
//! is always a whole number of blocks.

pub mod block;
pub mod gf;
pub mod key_schedule;
pub mod tables;

use crate::error::{CipherError, Result};
use crate::utils::{self, BLOCK_SIZE};
use block::State;
use key_schedule::{expand_key, KeySchedule};

/// How the key string is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyFormat {
    /// One byte per character (code point truncated to a byte).
    Text,
    /// Literal hex pairs, case-insensitive, no separators.
    Hex,
}

/// Normalizes a key string to exactly 16 bytes: shorter keys are zero-padded,
/// longer keys truncated. An empty key is allowed here; it zero-pads.
fn process_key(key: &str, format: KeyFormat) -> std::result::Result<[u8; 16], hex::FromHexError> {
    let mut bytes = match format {
        KeyFormat::Text => utils::text_to_bytes(key),
        KeyFormat::Hex => hex::decode(key)?,
    };
    bytes.resize(16, 0);

    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes[..16]);
    Ok(out)
}

fn encrypt_block(block: &[u8], schedule: &KeySchedule) -> [u8; 16] {
    let mut state = State::from_bytes(block);

    state.add_round_key(schedule, 0);

    for round in 1..10 {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();
        state.add_round_key(schedule, round);
    }

    // Final round skips the column mix.
    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(schedule, 10);

    state.to_bytes()
}

fn decrypt_block(block: &[u8], schedule: &KeySchedule) -> [u8; 16] {
    let mut state = State::from_bytes(block);

    state.add_round_key(schedule, 10);
    state.inv_shift_rows();
    state.inv_sub_bytes();

    for round in (1..10).rev() {
        state.add_round_key(schedule, round);
        state.inv_mix_columns();
        state.inv_shift_rows();
        state.inv_sub_bytes();
    }

    state.add_round_key(schedule, 0);

    state.to_bytes()
}

/// Encrypts `plaintext` under `key`, returning lowercase hex.
///
/// The output length is always a multiple of 32 hex characters; an empty
/// plaintext still produces one padding-only block.
pub fn encrypt(plaintext: &str, key: &str, format: KeyFormat) -> Result<String> {
    let key_bytes = process_key(key, format)
        .map_err(|e| CipherError::Encryption(format!("invalid hex key: {e}")))?;
    let schedule = expand_key(&key_bytes);

    let padded = utils::pad(&utils::text_to_bytes(plaintext));
    let mut ciphertext = Vec::with_capacity(padded.len());
    for chunk in padded.chunks(BLOCK_SIZE) {
        ciphertext.extend_from_slice(&encrypt_block(chunk, &schedule));
    }

    Ok(hex::encode(ciphertext))
}

/// Decrypts a hex ciphertext produced by [`encrypt`] back into text.
///
/// Rejects non-hex input and lengths that are not whole blocks. Padding is
/// stripped leniently: a nonsensical final byte leaves the data untouched.
pub fn decrypt(ciphertext: &str, key: &str, format: KeyFormat) -> Result<String> {
    if !utils::is_hex(ciphertext) {
        return Err(CipherError::NonHexCiphertext);
    }
    let cipher_bytes =
        hex::decode(ciphertext).map_err(|_| CipherError::InvalidCiphertextLength)?;
    if cipher_bytes.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidCiphertextLength);
    }

    let key_bytes = process_key(key, format)
        .map_err(|e| CipherError::Decryption(format!("invalid hex key: {e}")))?;
    let schedule = expand_key(&key_bytes);

    let mut plaintext = Vec::with_capacity(cipher_bytes.len());
    for chunk in cipher_bytes.chunks(BLOCK_SIZE) {
        plaintext.extend_from_slice(&decrypt_block(chunk, &schedule));
    }

    Ok(utils::bytes_to_text(&utils::unpad(&plaintext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_text_key() {
        let encrypted = encrypt("Hello World!", "mysecretkey12345", KeyFormat::Text).unwrap();
        assert_eq!(encrypted.len(), 32);
        assert!(encrypted.chars().all(|c| c.is_ascii_hexdigit()));
        let decrypted = decrypt(&encrypted, "mysecretkey12345", KeyFormat::Text).unwrap();
        assert_eq!(decrypted, "Hello World!");
    }

    #[test]
    fn test_round_trip_hex_key() {
        let key = "0123456789abcdef0123456789abcdef";
        let encrypted = encrypt("Test message", key, KeyFormat::Hex).unwrap();
        let decrypted = decrypt(&encrypted, key, KeyFormat::Hex).unwrap();
        assert_eq!(decrypted, "Test message");
    }

    #[test]
    fn test_hex_key_is_case_insensitive() {
        let lower = encrypt("same", "00aaBBcc00aabbcc00aabbcc00aabbcc", KeyFormat::Hex).unwrap();
        let upper = encrypt("same", "00AABBCC00AABBCC00AABBCC00AABBCC", KeyFormat::Hex).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_short_and_long_keys_round_trip() {
        let plaintext = "Test with different key lengths";
        for key in ["short", "thisisaverylongkeythatwillbetruncated"] {
            let encrypted = encrypt(plaintext, key, KeyFormat::Text).unwrap();
            let decrypted = decrypt(&encrypted, key, KeyFormat::Text).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }

    #[test]
    fn test_truncated_key_matches_its_prefix() {
        let long = "thisisaverylongkeythatwillbetruncated";
        let prefix = &long[..16];
        assert_eq!(
            encrypt("x", long, KeyFormat::Text).unwrap(),
            encrypt("x", prefix, KeyFormat::Text).unwrap()
        );
    }

    #[test]
    fn test_empty_key_zero_pads_instead_of_failing() {
        let encrypted = encrypt("data", "", KeyFormat::Text).unwrap();
        assert_eq!(decrypt(&encrypted, "", KeyFormat::Text).unwrap(), "data");
    }

    #[test]
    fn test_empty_input_round_trips_to_empty() {
        let encrypted = encrypt("", "testkey12345", KeyFormat::Text).unwrap();
        // Still a full padding block on the wire.
        assert_eq!(encrypted.len(), 32);
        assert_eq!(decrypt(&encrypted, "testkey12345", KeyFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_multi_block_round_trip() {
        let plaintext = "A message that is well over sixteen bytes long, spanning blocks.";
        let encrypted = encrypt(plaintext, "key", KeyFormat::Text).unwrap();
        assert_eq!(encrypted.len() % 32, 0);
        assert!(encrypted.len() > 32);
        assert_eq!(decrypt(&encrypted, "key", KeyFormat::Text).unwrap(), plaintext);
    }

    #[test]
    fn test_decrypt_rejects_non_hex() {
        assert_eq!(
            decrypt("not hex at all", "key", KeyFormat::Text),
            Err(CipherError::NonHexCiphertext)
        );
    }

    #[test]
    fn test_decrypt_rejects_partial_blocks() {
        assert_eq!(
            decrypt("00ff", "key", KeyFormat::Text),
            Err(CipherError::InvalidCiphertextLength)
        );
    }

    #[test]
    fn test_invalid_hex_key_is_wrapped() {
        match encrypt("text", "zz", KeyFormat::Hex) {
            Err(CipherError::Encryption(msg)) => assert!(msg.contains("invalid hex key")),
            other => panic!("expected encryption error, got {other:?}"),
        }
        match decrypt("00".repeat(16).as_str(), "zz", KeyFormat::Hex) {
            Err(CipherError::Decryption(msg)) => assert!(msg.contains("invalid hex key")),
            other => panic!("expected decryption error, got {other:?}"),
        }
    }

    #[test]
    fn test_ciphertext_is_lowercase_hex() {
        let encrypted = encrypt("Case check", "key", KeyFormat::Text).unwrap();
        assert_eq!(encrypted, encrypted.to_lowercase());
    }
}
