//! Export of cooling curves
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use thermal_decay::output::export::{CsvConfig, CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::new(CsvConfig::default().max_rows(500));
//! exporter.export(&curve, Path::new("coffee.csv"))?;
//! ```

pub mod csv;

pub use csv::{
    CsvConfig, CsvExporter, DEFAULT_PRECISION, downsample_indices, export_samples_csv,
    import_samples_csv, read_samples_csv, write_samples_csv,
};

use std::path::Path;

use crate::solver::CoolingCurve;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format reports its own error type, so callers can match on it
/// without downcasting a boxed error.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Writes every sample of `curve` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `curve` contains no samples
    /// - the path is invalid or the directory does not exist
    fn export(&self, curve: &CoolingCurve, path: &Path) -> Result<(), Self::Error>;
}
