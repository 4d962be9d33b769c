//! Block cipher implementations and modes of operation
//!
//! The [`BlockCipher`] trait abstracts over the fixed-block primitive; the
//! [`aes`] module supplies the three AES variants and the [`modes`] module
//! chains them over variable-length byte streams.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;

#[cfg(feature = "alloc")]
pub mod modes;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};

#[cfg(feature = "alloc")]
pub use modes::cbc::Cbc;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Marker trait for specific AES key sizes
pub trait AesVariant: CipherAlgorithm {
    /// Number of rounds (Nr); the expanded key holds Nr + 1 round keys
    const ROUNDS: usize;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    ///
    /// Key expansion runs once here; the expanded key is reused across all
    /// blocks encrypted or decrypted through this instance.
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
