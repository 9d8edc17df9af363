//! Classical mod-26 letter ciphers.
//!
//! Both engines normalize input to uppercase A-Z before doing anything (every
//! other character is dropped), map letters to 0..26 and combine plaintext and
//! key letters with modular addition or subtraction. An empty normalized key
//! is a configuration error; an empty normalized input is simply empty output.

pub mod autokey;
pub mod vigenere;

/// Adds a key letter to a plaintext letter, both ASCII uppercase.
fn shift_forward(p: u8, k: u8) -> char {
    char::from((p - b'A' + (k - b'A')) % 26 + b'A')
}

/// Subtracts a key letter from a ciphertext letter.
fn shift_back(c: u8, k: u8) -> char {
    char::from((c - b'A' + 26 - (k - b'A')) % 26 + b'A')
}
