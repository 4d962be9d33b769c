//! PKCS#7 padding
//!
//! Deterministic padding of arbitrary-length byte streams to a block
//! multiple: N bytes of value N are appended, where N is the distance to the
//! next block boundary (a full extra block when the input length is already
//! a multiple). Unpadding validates the claimed padding before stripping it;
//! accepting malformed padding silently is a correctness bug, so every
//! malformed case surfaces as [`Error::Padding`] rather than truncated or
//! garbled output.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

/// Pad `data` to a multiple of `block_size` bytes
///
/// The appended byte count is always in `1..=block_size`, so the output is
/// strictly longer than the input. `block_size` must be in 1..=255 for the
/// count to be representable in a single byte.
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "PKCS#7 block size must be in 1..=255",
    )?;

    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    Ok(padded)
}

/// Strip and validate PKCS#7 padding
///
/// The last byte claims the padding count p; the input is rejected unless
/// p is in `1..=block_size`, the input holds at least p bytes, and the last
/// p bytes all equal p. The upper bound is the block size used for this
/// encryption, not a fixed constant.
pub fn unpad(padded: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block_size",
        "PKCS#7 block size must be in 1..=255",
    )?;

    let claimed = *padded.last().ok_or(Error::Padding)?;
    let count = claimed as usize;
    if count == 0 || count > block_size || count > padded.len() {
        return Err(Error::Padding);
    }

    let boundary = padded.len() - count;
    if padded[boundary..].iter().any(|&byte| byte != claimed) {
        return Err(Error::Padding);
    }

    Ok(padded[..boundary].to_vec())
}
