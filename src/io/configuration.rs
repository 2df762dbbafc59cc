//! Fixed geometry and runtime defaults for identicon generation

// Grid layout
/// Number of columns in the virtual cell grid
pub const GRID_COLUMNS: u32 = 5;
/// Number of rows in the virtual cell grid
pub const GRID_ROWS: u32 = 5;
/// Digest bytes consumed per grid row before mirroring
pub const CHUNK_SIZE: usize = 3;
/// Total number of cells in an unfiltered grid
pub const GRID_CELLS: usize = (GRID_COLUMNS * GRID_ROWS) as usize;

// Digest layout
/// Length in bytes of the 128-bit input digest
pub const DIGEST_LENGTH: usize = 16;
// The trailing digest byte cannot form a full row and is never read
/// Digest bytes that contribute to the grid
pub const USABLE_DIGEST_BYTES: usize = CHUNK_SIZE * GRID_ROWS as usize;
/// Digest bytes consumed by colour selection
pub const COLOR_BYTES: usize = 3;

// Raster geometry, a 5x5 grid of cells exactly fills the canvas
/// Edge length of one grid cell in pixels
pub const CELL_SIZE: u32 = 50;
/// Edge length of the square output canvas in pixels
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_COLUMNS;
/// Canvas fill for cells that are not painted (fully transparent)
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 0];

// Output settings
/// File extension appended to the input string to form the output name
pub const OUTPUT_EXTENSION: &str = "png";
/// Directory used when no output directory is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Progress bar display settings
/// Smallest batch that gets a progress bar
pub const MIN_BATCH_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log filter used when verbose output is requested
pub const VERBOSE_LOG_LEVEL: &str = "debug";
