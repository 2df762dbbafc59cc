//! Grid cell to pixel rectangle mapping

use crate::io::configuration::CELL_SIZE;
use crate::pipeline::grid::GridCell;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal offset from the left edge
    pub x: u32,
    /// Vertical offset from the top edge
    pub y: u32,
}

impl Point {
    /// Create a point
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle spanning `[top_left, bottom_right)` on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive upper-left corner
    pub top_left: Point,
    /// Exclusive lower-right corner
    pub bottom_right: Point,
}

/// Rectangle covered by `cell` in the 5-column layout
pub const fn cell_rect(cell: GridCell) -> Rect {
    let x = cell.column() * CELL_SIZE;
    let y = cell.row().saturating_mul(CELL_SIZE);
    Rect {
        top_left: Point::new(x, y),
        bottom_right: Point::new(x + CELL_SIZE, y.saturating_add(CELL_SIZE)),
    }
}

/// Map every cell to its rectangle, one rectangle per cell, in input order
pub fn build_pixel_map(grid: &[GridCell]) -> Vec<Rect> {
    grid.iter().copied().map(cell_rect).collect()
}
