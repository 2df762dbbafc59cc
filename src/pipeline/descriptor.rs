//! Image descriptor threaded through the pipeline
//!
//! Each stage consumes the descriptor, fills in one field and hands it back, so
//! exactly one owner exists at any time. Fields are populated in dependency
//! order `hash_bytes -> (color, grid) -> grid (filtered) -> pixel_map`; a stage
//! that runs before its inputs exist reports [`IdenticonError::StageOrder`].

use crate::io::error::{IdenticonError, Result};
use crate::pipeline::Identicon;
use crate::pipeline::color::{Color, pick_color};
use crate::pipeline::filter::filter_odd_cells;
use crate::pipeline::grid::{GridCell, build_grid};
use crate::pipeline::hasher::{HashBytes, hash_input};
use crate::pipeline::pixel_map::{Rect, build_pixel_map};

/// Partially built identicon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageDescriptor {
    hash_bytes: Option<HashBytes>,
    color: Option<Color>,
    grid: Option<Vec<GridCell>>,
    filtered: bool,
    pixel_map: Option<Vec<Rect>>,
}

const fn missing(field: &'static str) -> IdenticonError {
    IdenticonError::StageOrder { field }
}

impl ImageDescriptor {
    /// Start a descriptor by hashing `input`
    pub fn from_input(input: &str) -> Self {
        let hash_bytes = hash_input(input);
        tracing::debug!(input, ?hash_bytes, "hashed input");
        Self {
            hash_bytes: Some(hash_bytes),
            ..Self::default()
        }
    }

    /// Derive the fill colour from the digest
    ///
    /// # Errors
    ///
    /// Returns an error if the digest has not been computed or is too short
    pub fn pick_color(mut self) -> Result<Self> {
        let color = pick_color(self.hash_bytes()?)?;
        tracing::debug!(?color, "picked color");
        self.color = Some(color);
        Ok(self)
    }

    /// Expand the digest into the mirrored 25-cell grid
    ///
    /// # Errors
    ///
    /// Returns an error if the digest has not been computed or is too short
    pub fn build_grid(mut self) -> Result<Self> {
        let grid = build_grid(self.hash_bytes()?)?;
        tracing::debug!(cells = grid.len(), "built grid");
        self.grid = Some(grid);
        self.filtered = false;
        self.pixel_map = None;
        Ok(self)
    }

    /// Replace the grid with its even-valued cells
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has not been built
    pub fn filter_odd_cells(mut self) -> Result<Self> {
        let grid = self.grid.take().ok_or_else(|| missing("grid"))?;
        let kept = filter_odd_cells(grid);
        tracing::debug!(cells = kept.len(), "filtered odd cells");
        self.grid = Some(kept);
        self.filtered = true;
        Ok(self)
    }

    /// Map the filtered grid to pixel rectangles
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has not been built and filtered
    pub fn build_pixel_map(mut self) -> Result<Self> {
        if !self.filtered {
            return Err(missing("grid (filtered)"));
        }
        let pixel_map = build_pixel_map(self.grid()?);
        tracing::debug!(rects = pixel_map.len(), "built pixel map");
        self.pixel_map = Some(pixel_map);
        Ok(self)
    }

    /// Finish the pipeline, keeping only what the rasterizer needs
    ///
    /// # Errors
    ///
    /// Returns an error if the colour or pixel map has not been populated
    pub fn into_identicon(self) -> Result<Identicon> {
        let color = self.color()?;
        let pixel_map = self.pixel_map.ok_or_else(|| missing("pixel_map"))?;
        Ok(Identicon { color, pixel_map })
    }

    /// Digest of the input
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor was not created from an input
    pub fn hash_bytes(&self) -> Result<&HashBytes> {
        self.hash_bytes.as_ref().ok_or_else(|| missing("hash_bytes"))
    }

    /// Fill colour
    ///
    /// # Errors
    ///
    /// Returns an error if [`Self::pick_color`] has not run
    pub fn color(&self) -> Result<Color> {
        self.color.ok_or_else(|| missing("color"))
    }

    /// Current grid, filtered or not
    ///
    /// # Errors
    ///
    /// Returns an error if [`Self::build_grid`] has not run
    pub fn grid(&self) -> Result<&[GridCell]> {
        self.grid.as_deref().ok_or_else(|| missing("grid"))
    }

    /// Rectangles to paint
    ///
    /// # Errors
    ///
    /// Returns an error if [`Self::build_pixel_map`] has not run
    pub fn pixel_map(&self) -> Result<&[Rect]> {
        self.pixel_map.as_deref().ok_or_else(|| missing("pixel_map"))
    }
}
