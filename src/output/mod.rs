//! Output of evaluated curves
//!
//! This module hands a [`CoolingCurve`](crate::solver::CoolingCurve) to the
//! outside world:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV export and re-import for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── curve.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use thermal_decay::output::visualization::{plot_cooling_curve, PlotConfig};
//!
//! plot_cooling_curve(&curve, "output.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use thermal_decay::output::export::{export_samples_csv, CsvConfig};
//!
//! export_samples_csv(&curve, "data.csv", Some(&CsvConfig::default().with_metadata()))?;
//! ```
//!
//! Both sub-modules only read the curve; neither one can alter its samples.

pub mod export;
pub mod visualization;

pub use visualization::{PlotConfig, plot_cooling_curve};

pub use export::{CsvConfig, CsvExporter, Exporter, export_samples_csv, import_samples_csv};
