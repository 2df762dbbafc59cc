//! Odd cell culling

use crate::pipeline::grid::GridCell;

/// Keep only even-valued cells, preserving order and original indices
///
/// An all-odd grid yields an empty result, which renders as a blank canvas.
pub fn filter_odd_cells(grid: Vec<GridCell>) -> Vec<GridCell> {
    grid.into_iter().filter(|cell| cell.is_even()).collect()
}
