//! Error types for identicon generation and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum IdenticonError {
    /// Digest is too short for a pipeline stage
    ///
    /// Indicates a broken hasher rather than bad user input; callers should
    /// abort instead of retrying.
    MalformedDigest {
        /// Stage that rejected the digest
        stage: &'static str,
        /// Minimum number of bytes the stage needs
        required: usize,
        /// Number of bytes actually supplied
        actual: usize,
    },

    /// A descriptor field was read before the stage that populates it ran
    StageOrder {
        /// Name of the missing field
        field: &'static str,
    },

    /// Failed to encode the canvas into PNG bytes
    ImageEncode {
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Invocation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl IdenticonError {
    /// Whether this error signals a violated internal invariant rather than
    /// an environmental failure such as an unwritable path
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::MalformedDigest { .. } | Self::StageOrder { .. })
    }
}

impl fmt::Display for IdenticonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDigest {
                stage,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Malformed digest in {stage}: need at least {required} bytes, got {actual}"
                )
            }
            Self::StageOrder { field } => {
                write!(f, "Descriptor field '{field}' read before it was populated")
            }
            Self::ImageEncode { source } => {
                write!(f, "Failed to encode image: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for IdenticonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageEncode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, IdenticonError>;

impl From<image::ImageError> for IdenticonError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageEncode { source: err }
    }
}


/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> IdenticonError {
    IdenticonError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed digest error for a stage
pub const fn malformed_digest(
    stage: &'static str,
    required: usize,
    actual: usize,
) -> IdenticonError {
    IdenticonError::MalformedDigest {
        stage,
        required,
        actual,
    }
}
