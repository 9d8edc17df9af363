//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key must contain at least one letter A-Z")]
    EmptyKey,

    #[error("Ciphertext must be a hexadecimal string")]
    NonHexCiphertext,

    #[error("Ciphertext length must be a multiple of 16 bytes")]
    InvalidCiphertextLength,

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption error: {0}")]
    Decryption(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
