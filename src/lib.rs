//! # Cipher Chain Library
//!
//! This library composes symmetric cipher algorithms into an ordered,
//! reversible pipeline: the enabled stages transform the input one after the
//! other, and running the same configuration in the opposite direction
//! recovers it.
//!
//! ## Supported ciphers
//!
//! - **Block cipher** - from-scratch 128-bit substitution-permutation cipher
//!   (10 rounds, hex wire format, codebook-style blocks)
//! - **Autokey** - self-synchronizing running-key letter cipher
//! - **Vigenère** - fixed repeating-key letter cipher
//!
//! ## Usage
//!
//! ```rust
//! use cipher_chain::{run_pipeline, CipherKind, KeyFormat, Mode, Stage};
//!
//! let stages = vec![
//!     Stage::new(
//!         "aes1",
//!         CipherKind::Aes { key: "mysecretkey12345".into(), format: KeyFormat::Text },
//!         true,
//!     ),
//! ];
//!
//! let encrypted = run_pipeline("Hello World!", &stages, Mode::Encrypt)?;
//! let decrypted = run_pipeline(&encrypted.output, &stages, Mode::Decrypt)?;
//! assert_eq!(decrypted.output, "Hello World!");
//! # Ok::<(), cipher_chain::CipherError>(())
//! ```
//!
//! ## A word of warning
//!
//! Nothing here is cryptographically secure: there is no authenticated
//! encryption, no initialization vector and no key derivation, and the block
//! cipher makes no compatibility claim against outside implementations of the
//! same construction. Treat it as a study of cipher composition, not as a
//! protection for real data.

pub mod aes;
pub mod classical;
pub mod error;
pub mod pipeline;
pub mod utils;

pub use aes::KeyFormat;
pub use error::{CipherError, Result};
pub use pipeline::{
    run_pipeline, CipherKind, Mode, Pipeline, PipelineRun, Stage, StageResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
