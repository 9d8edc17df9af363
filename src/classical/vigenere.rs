//! Repeating-key Vigenère cipher

use super::{shift_back, shift_forward};
use crate::error::{CipherError, Result};
use crate::utils::normalize_letters;

/// Encrypts with a repeating key: letter `i` combines with key letter
/// `i mod key_len`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let text = normalize_letters(plaintext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = normalize_letters(key);
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let key = key.as_bytes();
    Ok(text
        .bytes()
        .enumerate()
        .map(|(i, p)| shift_forward(p, key[i % key.len()]))
        .collect())
}

pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let text = normalize_letters(ciphertext);
    if text.is_empty() {
        return Ok(String::new());
    }
    let key = normalize_letters(key);
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    let key = key.as_bytes();
    Ok(text
        .bytes()
        .enumerate()
        .map(|(i, c)| shift_back(c, key[i % key.len()]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
        assert_eq!(decrypt("LXFOPVEFRNHR", "LEMON").unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_input_is_normalized() {
        // Punctuation, digits and case disappear before encryption.
        assert_eq!(
            encrypt("Attack at dawn!", "lemon").unwrap(),
            encrypt("ATTACKATDAWN", "LEMON").unwrap()
        );
    }

    #[test]
    fn test_key_wraps_around() {
        // Single-letter key shifts every letter by the same amount.
        assert_eq!(encrypt("ABC", "B").unwrap(), "BCD");
        assert_eq!(decrypt("BCD", "B").unwrap(), "ABC");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(encrypt("", "LEMON").unwrap(), "");
        assert_eq!(decrypt("123!", "LEMON").unwrap(), "");
        // Empty input wins over an empty key.
        assert_eq!(encrypt("", "").unwrap(), "");
    }

    #[test]
    fn test_empty_key_fails() {
        assert_eq!(encrypt("TEST", ""), Err(CipherError::EmptyKey));
        assert_eq!(encrypt("TEST", "123"), Err(CipherError::EmptyKey));
        assert_eq!(decrypt("TEST", ""), Err(CipherError::EmptyKey));
    }
}
