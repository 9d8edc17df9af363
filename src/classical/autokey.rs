//! Self-synchronizing Autokey cipher

use super::{shift_back, shift_forward};
use crate::error::{CipherError, Result};
use crate::utils::normalize_letters;

/// Encrypts with a keystream made of the key followed by the plaintext
/// itself, so the message supplies its own key material past the key length.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let text = normalize_letters(plaintext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = normalize_letters(key);
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let stream: Vec<u8> = key.bytes().chain(text.bytes()).collect();
    Ok(text
        .bytes()
        .enumerate()
        .map(|(i, p)| shift_forward(p, stream[i]))
        .collect())
}

/// Decrypts by growing the keystream one letter at a time from each recovered
/// plaintext letter. Letter `i` cannot be recovered before letter `i - 1`, so
/// this is strictly sequential.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let text = normalize_letters(ciphertext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = normalize_letters(key);
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let mut stream = key.into_bytes();
    let mut result = String::with_capacity(text.len());
    for (i, c) in text.bytes().enumerate() {
        let p = shift_back(c, stream[i]);
        result.push(p);
        stream.push(p as u8);
    }

    Ok(result)
}
