//! Error types for image loading and matrix validation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all loading and validation operations
#[derive(Debug)]
pub enum MatrixError {
    /// Input cannot be traversed as a sequence
    NotIterable {
        /// Display form of the rejected input
        content: String,
    },

    /// A row of a supposed list-of-lists is a scalar or a string
    NotAList {
        /// Index of the offending row
        row: usize,
        /// Display form of the offending row
        content: String,
    },

    /// Element of a one-dimensional sequence is not a number
    NonNumericElement {
        /// Position of the element in the sequence
        index: usize,
        /// Display form of the element
        value: String,
    },

    /// Cell of a two-dimensional matrix is not a number
    NonNumericCell {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// Display form of the cell
        value: String,
    },

    /// Rows of a matrix have different lengths
    RaggedMatrix {
        /// Row length established by the first row
        expected: usize,
        /// Index of the first row whose length differs
        row: usize,
        /// Length of that row
        actual: usize,
    },

    /// Image path does not exist
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Image decoder rejected the file
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failed to write a converted image to disk
    Encode {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoding error
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

    /// Requested dataset name is not registered
    UnknownAsset {
        /// Name that was looked up
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotIterable { content } => write!(f, "'{content}' is not iterable"),
            Self::NotAList { row, content } => write!(
                f,
                "Element [{row}] (content = '{content}') is not a list (expecting list-of-lists)"
            ),
            Self::NonNumericElement { index, value } => {
                write!(f, "Element #{index} is not numeric ('{value}')")
            }
            Self::NonNumericCell { row, col, value } => {
                write!(f, "Element [{row}][{col}] is not numeric (content = '{value}')")
            }
            Self::RaggedMatrix {
                expected,
                row,
                actual,
            } => write!(
                f,
                "list-of-lists length error: previous sub-lists had {expected} elements, but list #{row} has {actual} elements"
            ),
            Self::FileNotFound { path } => {
                write!(f, "Image file not found: '{}'", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::Encode { path, source } => {
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
            Self::UnknownAsset { name } => write!(f, "No dataset registered as '{name}'"),
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

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MatrixError {
    /// Whether the error came from validating caller-supplied data
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotIterable { .. }
                | Self::NotAList { .. }
                | Self::NonNumericElement { .. }
                | Self::NonNumericCell { .. }
                | Self::RaggedMatrix { .. }
        )
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MatrixError {
    MatrixError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
