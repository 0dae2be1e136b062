//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use pixelmatrix::io::configuration::{
        BUTTERFLY, DATA_DIR_ENV, DEFAULT_ASSETS, IMAGE_EXTENSIONS, MAX_INDIVIDUAL_PROGRESS_BARS,
        PARROT, PREVIEW_ROWS, TRUNCATE_LIMIT,
    };

    // Tests the truncation cap
    // Verified by changing the cap
    #[test]
    fn test_truncate_limit() {
        assert_eq!(TRUNCATE_LIMIT, 100);
    }

    // Tests the bundled datasets are the parrot and butterfly images
    // Verified by renaming an asset
    #[test]
    fn test_default_assets() {
        let names: Vec<&str> = DEFAULT_ASSETS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![PARROT, BUTTERFLY]);
        for (_, file) in DEFAULT_ASSETS {
            assert!(file.ends_with(".jpg"));
        }
    }

    // Tests environment variable name is shell friendly
    // Verified by adding a dash
    #[test]
    fn test_data_dir_env_name() {
        assert!(
            DATA_DIR_ENV
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_')
        );
    }

    // Tests recognised extensions are lowercase and include jpg
    // Verified by removing jpg
    #[test]
    fn test_image_extensions() {
        assert!(IMAGE_EXTENSIONS.contains(&"jpg"));
        assert!(IMAGE_EXTENSIONS.iter().all(|e| e.chars().all(|c| c.is_ascii_lowercase())));
    }

    // Tests preview and progress limits stay small
    // Verified by raising the limits
    #[test]
    fn test_display_limits() {
        assert_eq!(PREVIEW_ROWS, 8);
        assert!(PREVIEW_ROWS <= TRUNCATE_LIMIT);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
