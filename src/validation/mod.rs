//! Structural and numeric validation of caller-supplied data
//!
//! Every check is fail-fast: it returns on the first violation with an error
//! naming where the violation is.

/// Rectangular numeric list-of-lists checks
pub mod matrix;
/// Iterable and numeric sequence checks
pub mod sequence;
/// Length capping for oversized inputs
pub mod truncate;
/// Loosely typed input values
pub mod value;

pub use matrix::assert_numeric_matrix;
pub use sequence::{assert_iterable, assert_numeric_sequence};
pub use truncate::{truncate, truncate_to};
pub use value::Value;
