//! Rectangular row-major matrix with a checked constructor
//!
//! Storage is an `ndarray::Array2`, so rectangularity holds by construction.
//! There are no mutable accessors: a matrix is produced once and read many
//! times, and consumers that need a subset work on copies.

use ndarray::{Array2, ArrayView1};

use crate::io::error::{MatrixError, Result};
use crate::validation::Value;

/// Immutable rectangular grid indexed by (row, column)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Array2<T>,
}

impl<T: Clone> Matrix<T> {
    /// Build a matrix from explicit rows
    ///
    /// # Errors
    ///
    /// Returns `RaggedMatrix` naming the first row whose length differs from
    /// the first row's length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MatrixError::RaggedMatrix {
                expected: width,
                row,
                actual,
            });
        }

        let flat: Vec<T> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            crate::io::error::invalid_parameter("rows", &format!("{height}x{width}"), &e)
        })?;
        Ok(Self { data })
    }

    /// Copy the matrix back out as explicit rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Copy of the underlying array for numeric consumers
    pub fn to_array2(&self) -> Array2<T> {
        self.data.clone()
    }

    /// Apply `f` to every cell, preserving shape
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.map(f),
        }
    }

    /// Convert into the loosely typed list-of-lists form accepted by the validators
    pub fn to_value(&self) -> Value
    where
        T: Into<Value>,
    {
        Value::List(
            self.data
                .outer_iter()
                .map(|row| Value::List(row.iter().cloned().map(Into::into).collect()))
                .collect(),
        )
    }
}

impl<T> Matrix<T> {
    /// Build a matrix by evaluating `f(row, col)` for every cell
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            data: Array2::from_shape_fn((rows, cols), |(r, c)| f(r, c)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// True when the matrix holds no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get((row, col))
    }

    /// View of a single row, if in bounds
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, T>> {
        (row < self.rows()).then(|| self.data.row(row))
    }

    /// Iterate over rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, T>> {
        self.data.outer_iter()
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> From<Array2<T>> for Matrix<T> {
    fn from(data: Array2<T>) -> Self {
        Self { data }
    }
}
