//! Dataset registry built once at startup

/// Named datasets and their cached matrices
pub mod dataset;

pub use dataset::{Dataset, DatasetRegistry, default_data_dir};
