//! Input/output operations, configuration and error handling

/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and grayscale export
pub mod image;
/// Batch progress display
pub mod progress;
