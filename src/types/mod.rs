//! Type-safe wrappers for keys, round keys and initialization vectors
//!
//! Key material is held in fixed-size wrappers that guarantee zeroization on
//! drop and never leak their contents through `Debug` output. Equality on
//! these types is constant time.

mod iv;
mod secret;

pub use iv::Iv;
pub use secret::{SecretBuffer, SecretBytes};
