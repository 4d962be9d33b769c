//! Block cipher modes of operation
//!
//! Currently only CBC, which is the mode the padded byte-stream API is
//! built on.

pub mod cbc;

// Re-exports
pub use cbc::Cbc;
