//! Validation utilities for the cipher core

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a supported AES key size (16, 24 or 32 bytes)
#[inline(always)]
pub fn key_size(actual: usize) -> Result<()> {
    match actual {
        16 | 24 | 32 => Ok(()),
        _ => Err(Error::KeySize { actual }),
    }
}

/// Validate that a ciphertext is a positive multiple of the block size
#[inline(always)]
pub fn ciphertext_length(actual: usize, block_size: usize) -> Result<()> {
    if actual == 0 || actual % block_size != 0 {
        return Err(Error::CiphertextLength { actual });
    }
    Ok(())
}
