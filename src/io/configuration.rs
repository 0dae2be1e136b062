//! Constants and runtime configuration defaults

/// Maximum number of elements kept by `truncate`
pub const TRUNCATE_LIMIT: usize = 100;

/// Directory searched for dataset images when none is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable overriding the dataset directory
pub const DATA_DIR_ENV: &str = "PIXELMATRIX_DATA_DIR";

/// Name of the parrot dataset
pub const PARROT: &str = "parrot";
/// Name of the butterfly dataset
pub const BUTTERFLY: &str = "butterfly";

/// Datasets loaded by the default registry as (name, file name) pairs
pub const DEFAULT_ASSETS: [(&str, &str); 2] = [(PARROT, "parrot.jpg"), (BUTTERFLY, "butterfly.jpg")];

/// File extensions the CLI picks up when scanning a directory
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Default number of rows printed by `--preview`
pub const PREVIEW_ROWS: usize = 8;
