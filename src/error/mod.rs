//! Error handling for the cipher core
//!
//! Every failure mode of the crate is represented by a typed variant here.
//! Errors are detected synchronously at the boundary of the operation that
//! can detect them; no operation returns partial output alongside an error.

use core::fmt;

/// The error type for cipher operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key length is not one of the supported AES sizes (16, 24 or 32 bytes)
    KeySize {
        /// Length of the rejected key in bytes
        actual: usize,
    },

    /// Ciphertext length is not a positive multiple of the block size
    CiphertextLength {
        /// Length of the rejected ciphertext in bytes
        actual: usize,
    },

    /// PKCS#7 padding validation failure
    ///
    /// Deliberately carries no detail about which check failed: callers get a
    /// single signal that the message did not decrypt to well-formed padding.
    Padding,

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeySize { actual } => {
                write!(
                    f,
                    "Invalid AES key size: {} bytes (expected 16, 24 or 32)",
                    actual
                )
            }
            Error::CiphertextLength { actual } => {
                write!(
                    f,
                    "Invalid ciphertext length: {} bytes (expected a positive multiple of 16)",
                    actual
                )
            }
            Error::Padding => write!(f, "Invalid PKCS#7 padding"),
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
