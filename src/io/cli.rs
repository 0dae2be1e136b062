//! Command-line interface for converting images into pixel matrices

use crate::io::configuration::{
    DATA_DIR_ENV, DEFAULT_DATA_DIR, IMAGE_EXTENSIONS, PREVIEW_ROWS, TRUNCATE_LIMIT,
};
use crate::io::error::{MatrixError, Result};
use crate::io::image::{export_grayscale_png, load_rgb_matrix};
use crate::io::progress::ProgressManager;
use crate::matrix::pixel::GrayscaleSummary;
use crate::matrix::{GrayscaleMatrix, to_grayscale};
use crate::registry::DatasetRegistry;
use crate::validation::{assert_numeric_matrix, truncate, truncate_to};
use clap::Parser;
use log::debug;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixelmatrix")]
#[command(
    author,
    version,
    about = "Convert images into RGB and grayscale pixel matrices"
)]
/// Command-line arguments for the conversion tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image file or directory of images to convert
    #[arg(value_name = "TARGET", required_unless_present = "datasets")]
    pub target: Option<PathBuf>,

    /// Report grayscale statistics for each image
    #[arg(short, long)]
    pub grayscale: bool,

    /// Print the first N grayscale rows (`-p` alone prints 8, `-p=N` picks N)
    #[arg(short, long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub preview: Option<Option<usize>>,

    /// Write `<name>_gray.png` next to each input
    #[arg(short, long)]
    pub export: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Load and summarise the bundled datasets instead of TARGET
    #[arg(short, long)]
    pub datasets: bool,

    /// Directory holding the bundled datasets
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Number of preview rows requested, capped at the truncation limit
    pub fn preview_rows(&self) -> Option<usize> {
        self.preview
            .map(|rows| rows.unwrap_or(PREVIEW_ROWS).min(TRUNCATE_LIMIT))
    }

    /// Whether grayscale needs computing at all
    pub const fn wants_grayscale(&self) -> bool {
        self.grayscale || self.preview.is_some() || self.export
    }
}

/// Outcome of converting one image
#[derive(Debug, Clone)]
pub struct ImageReport {
    /// Display label (file name or dataset name)
    pub label: String,
    /// Matrix dimensions as (rows, cols)
    pub shape: (usize, usize),
    /// Grayscale statistics when requested
    pub summary: Option<GrayscaleSummary>,
    /// Leading grayscale rows when a preview was requested
    pub preview: Option<Vec<Vec<u8>>>,
    /// Path of the exported grayscale PNG
    pub exported: Option<PathBuf>,
}

impl fmt::Display for ImageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}x{}", self.label, self.shape.0, self.shape.1)?;
        if let Some(summary) = self.summary {
            write!(
                f,
                " gray min={} max={} mean={:.2}",
                summary.min, summary.max, summary.mean
            )?;
        }
        if let Some(ref exported) = self.exported {
            write!(f, " -> {}", exported.display())?;
        }
        if let Some(ref rows) = self.preview {
            for row in rows {
                let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
                write!(f, "\n  [{}]", cells.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Orchestrates conversion of one or many images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Convert the requested images and collect one report per image
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or any image fails to load;
    /// processing stops at the first failure.
    pub fn process(&mut self) -> Result<Vec<ImageReport>> {
        if self.cli.datasets {
            return self.process_datasets();
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            reports.push(self.process_file(file, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            debug!("converted {}/{} images", pm.completed(), pm.file_count());
            pm.finish();
        }

        Ok(reports)
    }

    fn process_datasets(&self) -> Result<Vec<ImageReport>> {
        let registry = DatasetRegistry::load_default(&self.cli.data_dir)?;
        let mut reports = Vec::with_capacity(registry.len());
        for name in registry.names() {
            let dataset = registry.get(name)?;
            reports.push(self.build_report(name.to_string(), dataset.rgb.shape(), &dataset.grayscale, None)?);
        }
        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = self
            .cli
            .target
            .as_ref()
            .ok_or_else(|| crate::io::error::invalid_parameter("target", &"", &"no target given"))?;

        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let read_error = |e: std::io::Error| MatrixError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if is_image_path(&path) {
                    files.push(path);
                }
            }
            files.sort();

            // Outputs of an earlier --export run are not inputs of this one
            if self.cli.export {
                let exports: HashSet<PathBuf> =
                    files.iter().map(|p| Self::get_export_path(p)).collect();
                files.retain(|p| !exports.contains(p));
            }
            Ok(files)
        } else {
            Err(MatrixError::FileNotFound {
                path: target.clone(),
            })
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<ImageReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let rgb = load_rgb_matrix(input_path)?;
        let gray = to_grayscale(&rgb);

        let exported = if self.cli.export {
            let output_path = Self::get_export_path(input_path);
            export_grayscale_png(&gray, &output_path)?;
            Some(output_path)
        } else {
            None
        };

        let label = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let report = self.build_report(label, rgb.shape(), &gray, exported)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, report.shape);
        }

        Ok(report)
    }

    fn build_report(
        &self,
        label: String,
        shape: (usize, usize),
        gray: &GrayscaleMatrix,
        exported: Option<PathBuf>,
    ) -> Result<ImageReport> {
        let summary = if self.cli.wants_grayscale() {
            GrayscaleSummary::of(gray)
        } else {
            None
        };

        let preview = match self.cli.preview_rows() {
            Some(rows) => {
                // Same gate a plotting consumer applies before drawing
                assert_numeric_matrix(&gray.to_value())?;
                let all_rows = gray.to_rows();
                Some(
                    truncate_to(&all_rows, rows)
                        .iter()
                        .map(|row| truncate(row, TRUNCATE_LIMIT).into_owned())
                        .collect(),
                )
            }
            None => None,
        };

        Ok(ImageReport {
            label,
            shape,
            summary,
            preview,
            exported,
        })
    }

    fn get_export_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let export_name = format!("{}_gray.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(export_name)
        } else {
            PathBuf::from(export_name)
        }
    }
}

/// Whether `path` has one of the recognised image extensions
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
