//! Progress display while converting batches of images

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch conversions
///
/// Small batches show one spinner line per file; larger batches also get a
/// single overall bar so the terminal is not flooded.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Images: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_count: 0,
            completed: 0,
        }
    }

    /// Set up bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        self.completed = 0;

        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new_spinner();
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show `path` as being decoded; bars are reused round-robin
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.set_message("decoding");
            bar.tick();
        }
    }

    /// Mark file `index` as converted with its matrix shape
    pub fn complete_file(&mut self, index: usize, shape: (usize, usize)) {
        self.completed += 1;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.bar_for(index) {
            bar.set_message(format!("✓ {}x{}", shape.0, shape.1));
        }
    }

    /// Number of files reported complete since `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Total number of files announced to `initialize`
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images converted");
        }
        for bar in &self.file_bars {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        if self.file_bars.is_empty() {
            return None;
        }
        self.file_bars.get(index % self.file_bars.len())
    }
}
