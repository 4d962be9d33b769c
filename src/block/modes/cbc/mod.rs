//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector. The
//! chaining imposes a strict sequential data dependency within a message,
//! so blocks are processed in order.
//!
//! [`Cbc::encrypt`] and [`Cbc::decrypt`] apply PKCS#7 padding, turning the
//! fixed-block primitive into a variable-length byte-stream cipher. The
//! unpadded [`Cbc::encrypt_blocks`] / [`Cbc::decrypt_blocks`] pair exposes
//! the bare chain for callers working in exact block multiples (NIST CAVP
//! known-answer vectors, for instance).
//!
//! The IV is consumed once at the start of the chain and is never itself
//! encrypted or emitted as cipher data. IVs must not be reused across
//! independent messages under the same key; that contract is the caller's.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::block::aes::{Aes128, Aes192, Aes256, BLOCK_SIZE};
use crate::error::{validate, Error, Result};
use crate::padding;
use crate::types::Iv;

/// CBC mode over a block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Iv,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one cipher block wide.
    pub fn new(cipher: B, iv: &Iv) -> Result<Self> {
        validate::length("CBC initialization vector", Iv::size(), B::block_size())?;

        Ok(Self {
            cipher,
            iv: iv.clone(),
        })
    }

    /// Encrypts a message, padding it with PKCS#7 first
    ///
    /// The ciphertext length equals the padded plaintext length: always a
    /// positive multiple of the block size, and always strictly longer than
    /// the plaintext.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = padding::pad(plaintext, B::block_size())?;
        self.encrypt_blocks(&padded)
    }

    /// Decrypts a message and strips its PKCS#7 padding
    ///
    /// The ciphertext length must be a positive multiple of the block size.
    /// A padding validation failure after unchaining surfaces as
    /// [`Error::Padding`]; callers must not treat it as decryption that
    /// succeeded with garbage.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::ciphertext_length(ciphertext.len(), B::block_size())?;

        let padded = self.decrypt_blocks(ciphertext)?;
        padding::unpad(&padded, B::block_size())
    }

    /// Encrypts a message that is already a multiple of the block size
    pub fn encrypt_blocks(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if plaintext.len() % block_size != 0 {
            return Err(Error::Length {
                context: "CBC plaintext",
                expected: ((plaintext.len() / block_size) + 1) * block_size,
                actual: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut chain = [0u8; BLOCK_SIZE];
        chain.copy_from_slice(self.iv.as_ref());

        for chunk in plaintext.chunks(block_size) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // XOR with previous ciphertext block (or IV for the first block)
            for (byte, chain_byte) in block.iter_mut().zip(chain.iter()) {
                *byte ^= chain_byte;
            }

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            chain = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message without touching padding
    ///
    /// Each ciphertext block is saved as the next chain value before
    /// decryption, so decryption of block i needs only ciphertext block
    /// i - 1, not earlier plaintext.
    pub fn decrypt_blocks(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::Length {
                context: "CBC ciphertext",
                expected: ((ciphertext.len() / block_size) + 1) * block_size,
                actual: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut chain = [0u8; BLOCK_SIZE];
        chain.copy_from_slice(self.iv.as_ref());

        for chunk in ciphertext.chunks(block_size) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);

            let next_chain = block;
            self.cipher.decrypt_block(&mut block)?;

            for (byte, chain_byte) in block.iter_mut().zip(chain.iter()) {
                *byte ^= chain_byte;
            }

            plaintext.extend_from_slice(&block);
            chain = next_chain;
        }

        Ok(plaintext)
    }
}

/// Encrypts a message under AES-CBC with PKCS#7 padding
///
/// The key length selects the AES variant (16, 24 or 32 bytes); any other
/// length is rejected with [`Error::KeySize`] before key expansion.
pub fn cbc_encrypt(plaintext: &[u8], iv: &Iv, key: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => Cbc::new(Aes128::new_from_slice(key)?, iv)?.encrypt(plaintext),
        24 => Cbc::new(Aes192::new_from_slice(key)?, iv)?.encrypt(plaintext),
        32 => Cbc::new(Aes256::new_from_slice(key)?, iv)?.encrypt(plaintext),
        actual => Err(Error::KeySize { actual }),
    }
}

/// Decrypts an AES-CBC message and strips its PKCS#7 padding
///
/// Rejects keys that are not 16, 24 or 32 bytes, ciphertexts that are not a
/// positive multiple of 16 bytes, and messages whose padding fails
/// validation after decryption.
pub fn cbc_decrypt(ciphertext: &[u8], iv: &Iv, key: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        16 => Cbc::new(Aes128::new_from_slice(key)?, iv)?.decrypt(ciphertext),
        24 => Cbc::new(Aes192::new_from_slice(key)?, iv)?.decrypt(ciphertext),
        32 => Cbc::new(Aes256::new_from_slice(key)?, iv)?.decrypt(ciphertext),
        actual => Err(Error::KeySize { actual }),
    }
}
