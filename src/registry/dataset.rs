//! Named image datasets loaded once and shared by reference

use crate::io::configuration::{BUTTERFLY, DATA_DIR_ENV, DEFAULT_ASSETS, DEFAULT_DATA_DIR, PARROT};
use crate::io::error::{MatrixError, Result};
use crate::io::image::load_rgb_matrix;
use crate::matrix::{GrayscaleMatrix, PixelMatrix, to_grayscale};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// RGB matrix of an asset together with its grayscale derivation
#[derive(Debug, Clone)]
pub struct Dataset {
    /// File the matrices were decoded from
    pub source: PathBuf,
    /// Decoded pixels
    pub rgb: PixelMatrix,
    /// Grayscale derived from `rgb`
    pub grayscale: GrayscaleMatrix,
}

impl Dataset {
    /// Decode `path` and derive its grayscale matrix
    ///
    /// # Errors
    ///
    /// Propagates `FileNotFound` or `Decode` from the loader.
    pub fn load(path: &Path) -> Result<Self> {
        let rgb = load_rgb_matrix(path)?;
        let grayscale = to_grayscale(&rgb);
        Ok(Self {
            source: path.to_path_buf(),
            rgb,
            grayscale,
        })
    }
}

/// Registry of decoded datasets keyed by name
///
/// Built once up front; consumers receive `&DatasetRegistry` and read the
/// cached matrices. Nothing is loaded lazily.
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetRegistry {
    /// Load the bundled parrot and butterfly images from `data_dir`
    ///
    /// # Errors
    ///
    /// Fails on the first asset that cannot be loaded; no partial registry is
    /// returned.
    pub fn load_default(data_dir: &Path) -> Result<Self> {
        Self::load_assets(data_dir, &DEFAULT_ASSETS)
    }

    /// Load the default datasets from `$PIXELMATRIX_DATA_DIR`, or `data/`
    ///
    /// # Errors
    ///
    /// Same as [`DatasetRegistry::load_default`].
    pub fn from_env() -> Result<Self> {
        Self::load_default(&default_data_dir())
    }

    /// Load each `(name, file)` pair relative to `data_dir`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a duplicated name, otherwise propagates
    /// the first loading failure.
    pub fn load_assets(data_dir: &Path, assets: &[(&str, &str)]) -> Result<Self> {
        let mut registry = Self::default();
        for (name, file) in assets {
            registry.insert(name, Dataset::load(&data_dir.join(file))?)?;
        }
        Ok(registry)
    }

    /// Register an already loaded dataset
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `name` is already registered.
    pub fn insert(&mut self, name: &str, dataset: Dataset) -> Result<()> {
        if self.datasets.contains_key(name) {
            return Err(crate::io::error::invalid_parameter(
                "name",
                &name,
                &"dataset already registered",
            ));
        }
        debug!(
            "registered dataset '{name}' ({}x{}) from {}",
            dataset.rgb.rows(),
            dataset.rgb.cols(),
            dataset.source.display()
        );
        self.datasets.insert(name.to_string(), dataset);
        Ok(())
    }

    /// Dataset registered as `name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Dataset> {
        self.datasets
            .get(name)
            .ok_or_else(|| MatrixError::UnknownAsset {
                name: name.to_string(),
            })
    }

    /// RGB matrix registered as `name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if nothing is registered under `name`.
    pub fn rgb(&self, name: &str) -> Result<&PixelMatrix> {
        self.get(name).map(|d| &d.rgb)
    }

    /// Grayscale matrix registered as `name`
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if nothing is registered under `name`.
    pub fn grayscale(&self, name: &str) -> Result<&GrayscaleMatrix> {
        self.get(name).map(|d| &d.grayscale)
    }

    /// RGB parrot image
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if the registry was built without it.
    pub fn parrot_rgb(&self) -> Result<&PixelMatrix> {
        self.rgb(PARROT)
    }

    /// Grayscale parrot image
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if the registry was built without it.
    pub fn parrot_grayscale(&self) -> Result<&GrayscaleMatrix> {
        self.grayscale(PARROT)
    }

    /// RGB butterfly image
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if the registry was built without it.
    pub fn butterfly_rgb(&self) -> Result<&PixelMatrix> {
        self.rgb(BUTTERFLY)
    }

    /// Grayscale butterfly image
    ///
    /// # Errors
    ///
    /// Returns `UnknownAsset` if the registry was built without it.
    pub fn butterfly_grayscale(&self) -> Result<&GrayscaleMatrix> {
        self.grayscale(BUTTERFLY)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    /// Number of registered datasets
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

/// Data directory from `$PIXELMATRIX_DATA_DIR`, falling back to `data/`
pub fn default_data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}
