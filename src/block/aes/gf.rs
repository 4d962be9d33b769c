//! Arithmetic in GF(2^8) under the AES reduction polynomial

/// Multiply two bytes in GF(2^8) with AES's reduction poly x^8 + x^4 + x^3 + x + 1
///
/// Standard shift-and-reduce loop over the 8 bits of `b`, written with byte
/// masks instead of data-dependent branches. Pure and total over all byte
/// pairs.
#[inline(always)]
pub(crate) fn gf_mul(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // All-ones when the low bit of b is set, all-zeros otherwise
        product ^= a & (b & 1).wrapping_neg();
        let carry = (a >> 7).wrapping_neg();
        a <<= 1;
        a ^= 0x1B & carry;
        b >>= 1;
    }
    product
}
