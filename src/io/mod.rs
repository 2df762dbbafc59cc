/// Command-line parsing and batch processing
pub mod cli;
/// Fixed geometry and runtime defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// Rasterization and PNG output
pub mod image;
/// Structured logging setup
pub mod logging;
/// Batch progress display
pub mod progress;
