//! Dual byte-ordering views of a 16-byte block
//!
//! The same 16 bytes are interpreted as a 4x4 matrix in two layouts. Blocks
//! cross the cipher boundary in column-major order (consecutive bytes fill
//! the matrix columns, the FIPS 197 "state" order) but the round transform
//! works on a row-major layout with each matrix row contiguous. A mismatched
//! transposition silently corrupts output, so the conversion lives here as a
//! single named operation instead of index arithmetic scattered through the
//! transform.

/// A block in the order bytes enter and leave the cipher: byte `4c + r` is
/// matrix cell (row r, column c).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColumnMajorBlock(pub(crate) [u8; 16]);

/// A block in the transform's working layout: byte `4r + c` is matrix cell
/// (row r, column c), so each row occupies four contiguous bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowMajorBlock(pub(crate) [u8; 16]);

/// Transpose the 4x4 matrix: `out[4i + j] = in[4j + i]`. An involution.
#[inline]
fn transpose(src: &[u8; 16]) -> [u8; 16] {
    let mut dest = [0u8; 16];
    for i in 0..4 {
        for j in 0..4 {
            dest[4 * i + j] = src[4 * j + i];
        }
    }
    dest
}

impl ColumnMajorBlock {
    pub(crate) fn from_slice(slice: &[u8]) -> Self {
        let mut data = [0u8; 16];
        data.copy_from_slice(slice);
        Self(data)
    }

    /// Reinterpret as the row-major working layout
    pub(crate) fn to_row_major(self) -> RowMajorBlock {
        RowMajorBlock(transpose(&self.0))
    }
}

impl RowMajorBlock {
    /// Reinterpret as the column-major wire layout
    pub(crate) fn to_column_major(self) -> ColumnMajorBlock {
        ColumnMajorBlock(transpose(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposition_known_pattern() {
        let wire = ColumnMajorBlock([
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
        ]);
        let state = wire.to_row_major();
        // Column 0 of the wire block becomes row-leading bytes of each row
        assert_eq!(
            state.0,
            [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]
        );
    }

    #[test]
    fn test_transposition_involution() {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let wire = ColumnMajorBlock(bytes);
        assert_eq!(wire.to_row_major().to_column_major(), wire);
    }
}
