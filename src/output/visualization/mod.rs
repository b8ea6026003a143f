//! Visualization of cooling curves
//!
//! This module renders evaluated curves with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`) with light and dark palettes
//! - **curve**: Temperature vs time plots with shading down to `T_env`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use thermal_decay::output::visualization::{plot_cooling_curve, PlotConfig};
//!
//! let curve = evaluator.evaluate_scenario("iced-tea", None)?;
//!
//! // Light default
//! plot_cooling_curve(&curve, "tea.png", None)?;
//!
//! // Dark palette, vector output
//! let config = PlotConfig::dark().with_title("Iced Tea Warming Up");
//! plot_cooling_curve(&curve, "tea.svg", Some(&config))?;
//! ```

pub mod config;
pub mod curve;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};

pub use curve::{axis_ranges, plot_cooling_curve};
