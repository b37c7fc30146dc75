//! Error types for walk generation, rendering and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all walk operations
#[derive(Debug)]
pub enum WalkError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A retrying generator hit its attempt cap without producing a walk
    RetriesExceeded {
        /// Which retry loop gave up
        generator: &'static str,
        /// Walk length the loop was building
        length: usize,
        /// Attempts made before giving up
        attempts: usize,
    },

    /// The randomness source could not supply another draw
    RandomnessExhausted {
        /// Draws served before exhaustion
        draws: usize,
    },

    /// The randomness source returned a choice outside the offered range
    InvalidChoice {
        /// The returned choice
        choice: usize,
        /// Number of alternatives offered
        alternatives: usize,
    },

    /// Walk cannot be processed in its current shape
    InvalidWalk {
        /// Description of what's wrong with the walk
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::RetriesExceeded {
                generator,
                length,
                attempts,
            } => {
                write!(
                    f,
                    "{generator} gave up on a walk of length {length} after {attempts} attempts"
                )
            }
            Self::RandomnessExhausted { draws } => {
                write!(f, "Randomness source exhausted after {draws} draws")
            }
            Self::InvalidChoice {
                choice,
                alternatives,
            } => {
                write!(
                    f,
                    "Randomness source chose {choice} from {alternatives} alternatives"
                )
            }
            Self::InvalidWalk { reason } => {
                write!(f, "Invalid walk: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for walk results
pub type Result<T> = std::result::Result<T, WalkError>;

impl From<std::io::Error> for WalkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WalkError {
    WalkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a path that cannot be used for output
pub fn io_error(msg: &str) -> WalkError {
    WalkError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
