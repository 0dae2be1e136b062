//! Two-dimensional list-of-lists checks

use crate::io::error::{MatrixError, Result};
use crate::validation::{Value, assert_iterable};

/// Require a rectangular list-of-lists whose cells are all numeric
///
/// Rows are checked in order and the first violation is reported. The first
/// row fixes the expected length, even when it is empty. An empty outer
/// sequence has no rows to disagree and is accepted.
///
/// # Errors
///
/// - `NotIterable` if `data` itself is not a sequence
/// - `NotAList` if a row is text or a scalar
/// - `RaggedMatrix` if a row length differs from the first row
/// - `NonNumericCell` for the first non-numeric cell of an otherwise valid row
pub fn assert_numeric_matrix(data: &Value) -> Result<()> {
    assert_iterable(data)?;

    let mut expected = None;
    for (row, entry) in data.elements().unwrap_or_default().iter().enumerate() {
        let Value::List(cells) = entry else {
            return Err(MatrixError::NotAList {
                row,
                content: entry.to_string(),
            });
        };

        let actual = cells.len();
        match expected {
            None => expected = Some(actual),
            Some(len) if len != actual => {
                return Err(MatrixError::RaggedMatrix {
                    expected: len,
                    row,
                    actual,
                });
            }
            Some(_) => {}
        }

        if let Some((col, value)) = cells.iter().enumerate().find(|(_, v)| !v.is_numeric()) {
            return Err(MatrixError::NonNumericCell {
                row,
                col,
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
