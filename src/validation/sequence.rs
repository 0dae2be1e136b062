//! One-dimensional sequence checks

use crate::io::error::{MatrixError, Result};
use crate::validation::Value;

/// Reject input that cannot be traversed as a sequence
///
/// # Errors
///
/// Returns `NotIterable` for scalars and `Null`.
pub fn assert_iterable(data: &Value) -> Result<()> {
    if data.is_iterable() {
        Ok(())
    } else {
        Err(MatrixError::NotIterable {
            content: data.to_string(),
        })
    }
}

/// Require every element of a sequence to be numeric
///
/// Stops at the first offending element.
///
/// # Errors
///
/// Returns `NotIterable` if `data` is not a sequence, or `NonNumericElement`
/// carrying the 0-based index of the first non-numeric element.
pub fn assert_numeric_sequence(data: &Value) -> Result<()> {
    assert_iterable(data)?;
    let elements = data.elements().unwrap_or_default();

    match elements.iter().position(|value| !value.is_numeric()) {
        Some(index) => Err(MatrixError::NonNumericElement {
            index,
            value: elements
                .get(index)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }),
        None => Ok(()),
    }
}
