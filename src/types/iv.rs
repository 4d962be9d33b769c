//! Initialization vector type for block cipher modes

use core::fmt;
use core::ops::{Deref, DerefMut};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// A 16-byte initialization vector for CBC mode
///
/// The IV is consumed once at the start of the chain. Reusing an IV across
/// independent messages under the same key breaks the confidentiality
/// guarantees of CBC; that contract is the caller's to uphold and is not
/// enforced here.
#[derive(Clone, Zeroize)]
pub struct Iv {
    data: [u8; 16],
}

impl Iv {
    /// Create a new IV from an existing array
    pub fn new(data: [u8; 16]) -> Self {
        Self { data }
    }

    /// Create a zeroed IV
    pub fn zeroed() -> Self {
        Self { data: [0u8; 16] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("initialization vector", slice.len(), 16)?;

        let mut data = [0u8; 16];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random IV
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; 16];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the size of an IV in bytes
    pub fn size() -> usize {
        16
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for Iv {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Deref for Iv {
    type Target = [u8; 16];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Iv {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl PartialEq for Iv {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl Eq for Iv {}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({:02x?})", &self.data[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iv_from_slice() {
        let iv = Iv::from_slice(&[7u8; 16]).unwrap();
        assert_eq!(iv.as_ref(), &[7u8; 16]);

        assert!(Iv::from_slice(&[7u8; 12]).is_err());
        assert!(Iv::from_slice(&[7u8; 17]).is_err());
    }

    #[test]
    fn test_iv_eq() {
        let a = Iv::new([1u8; 16]);
        let b = Iv::new([1u8; 16]);
        let c = Iv::zeroed();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
