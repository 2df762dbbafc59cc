//! Pure transformation stages that turn an input string into an identicon
//!
//! Stages run strictly in order: hash the input, pick a colour and build the
//! mirrored grid from the digest, drop odd cells, then map the survivors to
//! pixel rectangles. Nothing here touches the filesystem.

/// Fill colour derived from the digest
pub mod color;
/// Ownership-passing record threaded through the stages
pub mod descriptor;
/// Removal of odd-valued grid cells
pub mod filter;
/// Mirrored 5x5 grid construction
pub mod grid;
/// Input string hashing
pub mod hasher;
/// Cell to pixel rectangle mapping
pub mod pixel_map;

pub use color::Color;
pub use descriptor::ImageDescriptor;
pub use grid::GridCell;
pub use pixel_map::{Point, Rect};

use crate::io::error::Result;

/// Everything the rasterizer needs to paint an identicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identicon {
    /// Fill colour for every painted cell
    pub color: Color,
    /// Rectangles to paint, in grid order
    pub pixel_map: Vec<Rect>,
}

/// Run every pure stage for `input`
///
/// # Errors
///
/// Returns an error only if a stage invariant is violated, which indicates a
/// defect in the pipeline rather than a problem with `input`
pub fn generate(input: &str) -> Result<Identicon> {
    ImageDescriptor::from_input(input)
        .pick_color()?
        .build_grid()?
        .filter_odd_cells()?
        .build_pixel_map()?
        .into_identicon()
}
