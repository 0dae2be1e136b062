//! Tests for the rectangular matrix container

#[cfg(test)]
mod tests {
    use pixelmatrix::validation::assert_numeric_matrix;
    use pixelmatrix::{Matrix, MatrixError};

    // Tests explicit rows round-trip through the container
    // Verified by transposing on construction
    #[test]
    fn test_from_rows_shape_and_access() {
        let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.get(0, 2), Some(&3));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    // Tests ragged rows are refused with the offending row
    // Verified by padding short rows
    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(matches!(
            result,
            Err(MatrixError::RaggedMatrix {
                expected: 2,
                row: 2,
                actual: 1
            })
        ));
    }

    // Tests an empty row list gives an empty matrix
    // Verified by erroring on empty input
    #[test]
    fn test_from_rows_empty() {
        let matrix = Matrix::<u8>::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.shape(), (0, 0));
    }

    // Tests rows of zero width keep their row count
    // Verified by collapsing to zero rows
    #[test]
    fn test_zero_width_rows() {
        let matrix = Matrix::<u8>::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(matrix.shape(), (2, 0));
        assert!(matrix.is_empty());
    }

    // Tests cell generator receives (row, col)
    // Verified by swapping generator arguments
    #[test]
    fn test_from_fn_coordinates() {
        let matrix = Matrix::from_fn(2, 3, |r, c| r * 10 + c);
        assert_eq!(matrix.to_rows(), vec![vec![0, 1, 2], vec![10, 11, 12]]);
    }

    // Tests map preserves shape and order
    // Verified by mapping a single row
    #[test]
    fn test_map_preserves_shape() {
        let matrix = Matrix::from_fn(3, 2, |r, c| (r + c) as u8);
        let doubled = matrix.map(|v| u16::from(*v) * 2);

        assert_eq!(doubled.shape(), matrix.shape());
        assert_eq!(doubled.get(2, 1), Some(&6));
    }

    // Tests row views and row iteration
    // Verified by returning columns
    #[test]
    fn test_row_access() {
        let matrix = Matrix::from_fn(2, 2, |r, c| r * 2 + c);

        assert_eq!(matrix.row(1).map(|row| row.to_vec()), Some(vec![2, 3]));
        assert!(matrix.row(2).is_none());
        assert_eq!(matrix.iter_rows().count(), 2);
    }

    // Tests the loose list-of-lists form passes matrix validation
    // Verified by flattening rows in the conversion
    #[test]
    fn test_to_value_validates() {
        let matrix = Matrix::from_fn(4, 5, |r, c| (r * c) as u8);
        assert!(assert_numeric_matrix(&matrix.to_value()).is_ok());
    }

    // Tests ndarray export keeps layout
    // Verified by exporting a transposed view
    #[test]
    fn test_to_array2() {
        let matrix = Matrix::from_fn(2, 3, |r, c| r * 3 + c);
        let array = matrix.to_array2();

        assert_eq!(array.dim(), (2, 3));
        assert_eq!(array[(1, 2)], 5);
        assert_eq!(Matrix::from(array), matrix);
    }

    // Tests cell iteration follows row-major order
    // Verified by iterating the transposed array
    #[test]
    fn test_iter_is_row_major() {
        let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(matrix.get(1, 0), Some(&4));
        assert_eq!(
            matrix.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }
}
