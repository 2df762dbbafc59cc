//! Mirrored grid construction
//!
//! Each group of three digest bytes `[a, b, c]` becomes the row `[a, b, c, b, a]`,
//! which is what gives every identicon its left-right symmetry. Rows are
//! flattened in row-major order and every value is tagged with its position.

use crate::io::configuration::{CHUNK_SIZE, GRID_COLUMNS, USABLE_DIGEST_BYTES};
use crate::io::error::{Result, malformed_digest};

/// One cell of the 5x5 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Digest-derived intensity
    pub value: u8,
    /// Row-major position in the unfiltered grid, in `0..25`
    pub index: u32,
}

impl GridCell {
    /// Create a cell
    pub const fn new(value: u8, index: u32) -> Self {
        Self { value, index }
    }

    /// Even cells are painted, odd cells are left as background
    pub const fn is_even(self) -> bool {
        self.value % 2 == 0
    }

    /// Zero-based column within the grid
    pub const fn column(self) -> u32 {
        self.index % GRID_COLUMNS
    }

    /// Zero-based row within the grid
    pub const fn row(self) -> u32 {
        self.index / GRID_COLUMNS
    }
}

/// Append the second and then the first element of `chunk` to a copy of it
///
/// Chunks shorter than two elements have nothing to mirror and are returned
/// unchanged.
pub fn mirror_row(chunk: &[u8]) -> Vec<u8> {
    let mut row = chunk.to_vec();
    if let [first, second, ..] = chunk {
        row.extend([*second, *first]);
    }
    row
}

/// Expand the first 15 digest bytes into 25 indexed cells
///
/// Bytes beyond the first 15 are ignored so the grid always consists of five
/// complete mirrored rows.
///
/// # Errors
///
/// Returns [`IdenticonError::MalformedDigest`](crate::IdenticonError::MalformedDigest)
/// if `hash_bytes` holds fewer than 15 bytes
pub fn build_grid(hash_bytes: &[u8]) -> Result<Vec<GridCell>> {
    let usable = hash_bytes
        .get(..USABLE_DIGEST_BYTES)
        .ok_or_else(|| malformed_digest("build_grid", USABLE_DIGEST_BYTES, hash_bytes.len()))?;

    Ok(usable
        .chunks_exact(CHUNK_SIZE)
        .flat_map(mirror_row)
        .zip(0_u32..)
        .map(|(value, index)| GridCell::new(value, index))
        .collect())
}
