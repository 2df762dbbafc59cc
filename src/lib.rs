//! Deterministic GitHub-style identicon generation
//!
//! An input string is hashed with MD5; the first three digest bytes become the
//! fill colour and the first fifteen are expanded into a left-right symmetric
//! 5x5 grid. Even-valued cells are painted as 50x50 squares on a transparent
//! 250x250 PNG.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Pure generation stages from input string to pixel rectangles
pub mod pipeline;

pub use io::error::{IdenticonError, Result};
pub use io::image::render_to_file;
pub use pipeline::{Identicon, generate};
