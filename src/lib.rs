//! AES-CBC with PKCS#7 padding built from primitive byte operations
//!
//! This crate implements the AES block cipher (FIPS 197) and CBC mode from
//! first principles: GF(2^8) arithmetic, the fixed substitution tables, the
//! byte-oriented key schedule, the forward/inverse round transform network,
//! and the CBC chaining plus PKCS#7 padding protocol that turns the
//! fixed-block primitive into a variable-length byte-stream cipher. No
//! external crypto library is called; correctness is validated against the
//! FIPS 197 and NIST SP 800-38A known-answer vectors.
//!
//! The implementation is table-driven and makes **no constant-time or
//! side-channel guarantees**, and provides no authentication: CBC ciphertext
//! is malleable. Key material is zeroized on drop.
//!
//! # Example
//!
//! ```
//! use blockcrypt::{cbc_decrypt, cbc_encrypt, Iv};
//!
//! let key = [0x42u8; 16]; // AES-128
//! let iv = Iv::new([0x24u8; 16]);
//!
//! let ciphertext = cbc_encrypt(b"attack at dawn", &iv, &key).unwrap();
//! let plaintext = cbc_decrypt(&ciphertext, &iv, &key).unwrap();
//!
//! assert_eq!(&plaintext, b"attack at dawn");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type system
pub mod types;
pub use types::{Iv, SecretBuffer, SecretBytes};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, AesVariant, BlockCipher, CipherAlgorithm};

#[cfg(feature = "alloc")]
pub use block::modes::cbc::{cbc_decrypt, cbc_encrypt, Cbc};

// PKCS#7 padding
#[cfg(feature = "alloc")]
pub mod padding;
