//! AES block cipher (FIPS 197) built from primitive byte operations
//!
//! This module implements the Advanced Encryption Standard from first
//! principles: GF(2^8) arithmetic, the fixed substitution tables, the
//! byte-oriented key schedule and the forward/inverse round transform
//! network. Correctness is validated against the FIPS 197 appendix C known
//! answers rather than derived by inspection.
//!
//! The implementation is table-driven and makes no constant-time or
//! side-channel guarantees. Key material (caller keys and the expanded round
//! keys) is zeroized on drop.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{AesVariant, BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::{SecretBuffer, SecretBytes};

pub(crate) mod gf;
pub(crate) mod state;
mod tables;

use gf::gf_mul;
use state::ColumnMajorBlock;
use tables::{INV_SBOX, RCON, SBOX};

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Size of a key-schedule word in bytes
const WORD_SIZE: usize = 4;

// --- Key schedule ---

/// Key-schedule core applied at key-length word boundaries: rotate the word
/// left by one byte, substitute each byte through the S-box, then fold the
/// round constant into the first byte.
fn schedule_core(word: &mut [u8; WORD_SIZE], rcon_iteration: usize) {
    word.rotate_left(1);
    for byte in word.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
    word[0] ^= RCON[rcon_iteration];
}

/// Byte-oriented key expansion
///
/// The first `key.len()` bytes of the expanded key are the key itself;
/// thereafter 4-byte words are appended, each XORed with the word
/// `key.len()` bytes earlier. The schedule core runs at every multiple of
/// the key length (the Rcon iteration counter starts at 1; index 0 of the
/// table is never read), and 256-bit keys additionally substitute the word
/// halfway through each key-length stride.
///
/// `expanded.len()` selects the round count: 16 * (Nr + 1) bytes.
fn expand_key(key: &[u8], expanded: &mut [u8]) {
    let key_size = key.len();
    expanded[..key_size].copy_from_slice(key);

    let mut current = key_size;
    let mut rcon_iteration = 1;
    let mut word = [0u8; WORD_SIZE];
    while current < expanded.len() {
        word.copy_from_slice(&expanded[current - WORD_SIZE..current]);
        if current % key_size == 0 {
            schedule_core(&mut word, rcon_iteration);
            rcon_iteration += 1;
        }
        if key_size == 32 && current % key_size == BLOCK_SIZE {
            for byte in word.iter_mut() {
                *byte = SBOX[*byte as usize];
            }
        }
        for &byte in word.iter() {
            expanded[current] = expanded[current - key_size] ^ byte;
            current += 1;
        }
    }
}

// --- Round operations ---
//
// All of these work on the row-major state layout (matrix rows contiguous);
// see the `state` module for the entry/exit transposition.

/// SubBytes step
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

/// Inverse SubBytes
fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// ShiftRows step: row r is rotated left by r positions
fn shift_rows(state: &mut [u8; 16]) {
    for r in 1..4 {
        state[4 * r..4 * (r + 1)].rotate_left(r);
    }
}

/// Inverse ShiftRows: row r is rotated right by r positions
fn inv_shift_rows(state: &mut [u8; 16]) {
    for r in 1..4 {
        state[4 * r..4 * (r + 1)].rotate_right(r);
    }
}

/// MixColumns step: each column is multiplied by the fixed matrix
/// [2,3,1,1; 1,2,3,1; 1,1,2,3; 3,1,1,2] over GF(2^8)
fn mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let s0 = state[c];
        let s1 = state[4 + c];
        let s2 = state[8 + c];
        let s3 = state[12 + c];
        state[c] = gf_mul(s0, 2) ^ gf_mul(s1, 3) ^ s2 ^ s3;
        state[4 + c] = s0 ^ gf_mul(s1, 2) ^ gf_mul(s2, 3) ^ s3;
        state[8 + c] = s0 ^ s1 ^ gf_mul(s2, 2) ^ gf_mul(s3, 3);
        state[12 + c] = gf_mul(s0, 3) ^ s1 ^ s2 ^ gf_mul(s3, 2);
    }
}

/// Inverse MixColumns with matrix [14,11,13,9; 9,14,11,13; 13,9,14,11; 11,13,9,14]
fn inv_mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let s0 = state[c];
        let s1 = state[4 + c];
        let s2 = state[8 + c];
        let s3 = state[12 + c];
        state[c] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        state[4 + c] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        state[8 + c] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        state[12 + c] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}

/// Extract round key `round` from the expanded key, transposed into the
/// row-major layout the state uses
fn round_key(expanded: &[u8], round: usize) -> [u8; 16] {
    let slice = &expanded[BLOCK_SIZE * round..BLOCK_SIZE * (round + 1)];
    ColumnMajorBlock::from_slice(slice).to_row_major().0
}

/// AddRoundKey step
fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for (byte, key_byte) in state.iter_mut().zip(round_key.iter()) {
        *byte ^= key_byte;
    }
}

// --- Full block transform ---

/// Forward round network over a row-major state
fn encrypt_state(state: &mut [u8; 16], expanded: &[u8], rounds: usize) {
    add_round_key(state, &round_key(expanded, 0));
    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &round_key(expanded, round));
    }
    // Final round omits MixColumns
    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &round_key(expanded, rounds));
}

/// Inverse round network; round keys are consumed in descending order
fn decrypt_state(state: &mut [u8; 16], expanded: &[u8], rounds: usize) {
    add_round_key(state, &round_key(expanded, rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &round_key(expanded, round));
        inv_mix_columns(state);
    }
    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, &round_key(expanded, 0));
}

/// Encrypt one 16-byte block in place
fn encrypt_block_inner(block: &mut [u8], expanded: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), BLOCK_SIZE)?;

    let mut state = ColumnMajorBlock::from_slice(block).to_row_major();
    encrypt_state(&mut state.0, expanded, rounds);
    block.copy_from_slice(&state.to_column_major().0);
    Ok(())
}

/// Decrypt one 16-byte block in place
fn decrypt_block_inner(block: &mut [u8], expanded: &[u8], rounds: usize) -> Result<()> {
    validate::length("AES block", block.len(), BLOCK_SIZE)?;

    let mut state = ColumnMajorBlock::from_slice(block).to_row_major();
    decrypt_state(&mut state.0, expanded, rounds);
    block.copy_from_slice(&state.to_column_major().0);
    Ok(())
}

// --- Cipher types ---

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = 16;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

impl AesVariant for Aes128Algorithm {
    const ROUNDS: usize = 10;
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = 24;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

impl AesVariant for Aes192Algorithm {
    const ROUNDS: usize = 12;
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = 32;
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl AesVariant for Aes256Algorithm {
    const ROUNDS: usize = 14;
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<176>, // 11 round keys x 16 bytes
}

/// AES-192 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: SecretBuffer<208>, // 13 round keys x 16 bytes
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<240>, // 15 round keys x 16 bytes
}

impl Aes128 {
    /// Create a cipher from a key slice, rejecting wrong lengths
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), Aes128Algorithm::KEY_SIZE)?;
        Ok(Self::new(&SecretBytes::from_slice(key)?))
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<16>;

    fn new(key: &Self::Key) -> Self {
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key.as_ref(), round_keys.as_mut_slice());
        Aes128 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_block_inner(block, self.round_keys.as_ref(), Aes128Algorithm::ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_block_inner(block, self.round_keys.as_ref(), Aes128Algorithm::ROUNDS)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl Aes192 {
    /// Create a cipher from a key slice, rejecting wrong lengths
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-192 key", key.len(), Aes192Algorithm::KEY_SIZE)?;
        Ok(Self::new(&SecretBytes::from_slice(key)?))
    }
}

impl BlockCipher for Aes192 {
    type Algorithm = Aes192Algorithm;
    type Key = SecretBytes<24>;

    fn new(key: &Self::Key) -> Self {
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key.as_ref(), round_keys.as_mut_slice());
        Aes192 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_block_inner(block, self.round_keys.as_ref(), Aes192Algorithm::ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_block_inner(block, self.round_keys.as_ref(), Aes192Algorithm::ROUNDS)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl Aes256 {
    /// Create a cipher from a key slice, rejecting wrong lengths
    pub fn new_from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), Aes256Algorithm::KEY_SIZE)?;
        Ok(Self::new(&SecretBytes::from_slice(key)?))
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<32>;

    fn new(key: &Self::Key) -> Self {
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key.as_ref(), round_keys.as_mut_slice());
        Aes256 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_block_inner(block, self.round_keys.as_ref(), Aes256Algorithm::ROUNDS)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_block_inner(block, self.round_keys.as_ref(), Aes256Algorithm::ROUNDS)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}
