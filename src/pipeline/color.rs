//! Colour selection from the leading digest bytes

use crate::io::configuration::COLOR_BYTES;
use crate::io::error::{Result, malformed_digest};
use image::Rgba;

/// Opaque RGB fill colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA pixel of this colour
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }
}

/// Use the first three digest bytes, unmodified, as red, green and blue
///
/// # Errors
///
/// Returns [`IdenticonError::MalformedDigest`](crate::IdenticonError::MalformedDigest)
/// if `hash_bytes` holds fewer than three bytes
pub fn pick_color(hash_bytes: &[u8]) -> Result<Color> {
    match hash_bytes {
        [r, g, b, ..] => Ok(Color::new(*r, *g, *b)),
        _ => Err(malformed_digest("pick_color", COLOR_BYTES, hash_bytes.len())),
    }
}
