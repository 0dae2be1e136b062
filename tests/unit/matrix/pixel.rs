//! Tests for pixel types and grayscale conversion

#[cfg(test)]
mod tests {
    use pixelmatrix::matrix::pixel::GrayscaleSummary;
    use pixelmatrix::matrix::{Matrix, PixelMatrix, rgb_to_gray, to_grayscale};
    use rand::Rng;

    // Tests the unweighted average on primary colours
    // Verified by switching to luminance weights
    #[test]
    fn test_primary_colours_average() {
        assert_eq!(rgb_to_gray([255, 0, 0]), 85);
        assert_eq!(rgb_to_gray([0, 255, 0]), 85);
        assert_eq!(rgb_to_gray([0, 0, 255]), 85);
    }

    // Tests extremes stay in range
    // Verified by dividing before summing
    #[test]
    fn test_extremes() {
        assert_eq!(rgb_to_gray([0, 0, 0]), 0);
        assert_eq!(rgb_to_gray([255, 255, 255]), 255);
        assert_eq!(rgb_to_gray([255, 255, 254]), 255);
    }

    // Tests rounding to nearest against a floating-point reference
    // Verified by truncating instead of rounding
    #[test]
    fn test_matches_rounded_average() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let pixel: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let sum: f64 = pixel.iter().map(|&c| f64::from(c)).sum();
            let expected = (sum / 3.0).round() as u8;
            assert_eq!(rgb_to_gray(pixel), expected, "pixel {pixel:?}");
        }
    }

    // Tests an all-red 2x2 image converts to 85 everywhere
    // Verified by returning the red channel
    #[test]
    fn test_red_square() {
        let red: PixelMatrix = Matrix::from_fn(2, 2, |_, _| [255, 0, 0]);
        let gray = to_grayscale(&red);
        assert_eq!(gray.to_rows(), vec![vec![85, 85], vec![85, 85]]);
    }

    // Tests grayscale keeps the shape of non-square input
    // Verified by transposing the output
    #[test]
    fn test_shape_preserved() {
        let pixels: PixelMatrix = Matrix::from_fn(3, 7, |r, c| [r as u8, c as u8, 0]);
        let gray = to_grayscale(&pixels);

        assert_eq!(gray.shape(), (3, 7));
        assert_eq!(gray.get(2, 6), Some(&3));
    }

    // Tests the summary statistics
    // Verified by dividing by row count
    #[test]
    fn test_summary() {
        let gray = Matrix::from_rows(vec![vec![0, 10], vec![20, 30]]).unwrap();
        let summary = GrayscaleSummary::of(&gray).unwrap();

        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 30);
        assert!((summary.mean - 15.0).abs() < f64::EPSILON);
        assert!(GrayscaleSummary::of(&Matrix::<u8>::from_rows(Vec::new()).unwrap()).is_none());
    }

    // Tests thirds round to the nearest integer
    // Verified by using ceiling division
    #[test]
    fn test_thirds_round_to_nearest() {
        assert_eq!(rgb_to_gray([1, 0, 0]), 0);
        assert_eq!(rgb_to_gray([1, 1, 0]), 1);
        assert_eq!(rgb_to_gray([2, 2, 0]), 1);
    }
}
