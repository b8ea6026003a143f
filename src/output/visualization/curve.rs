//! Cooling-curve plots
//!
//! Time on the x axis, temperature on the y axis. Three layers are drawn, in
//! this order:
//!
//! 1. **Shading**: translucent area between the curve and `T_env`
//! 2. **Ambient line**: dashed horizontal reference at `T_env`
//! 3. **Curve**: `T(t)`, labelled with its formula in the legend
//!
//! The backend follows the file extension: `.svg` gives a vector image,
//! anything else a bitmap.
//!
//! # Usage
//!
//! ```rust,ignore
//! use thermal_decay::output::visualization::{plot_cooling_curve, PlotConfig};
//!
//! plot_cooling_curve(&curve, "coffee.png", None)?;
//! plot_cooling_curve(&curve, "coffee.svg", Some(&PlotConfig::dark()))?;
//! ```

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use super::config::{NO_TITLE, PlotConfig};
use crate::error::{CoolingError, Result};
use crate::solver::CoolingCurve;

// =================================================================================================
// Helper Functions: Axis Ranges
// =================================================================================================

/// Fraction of the temperature span added above and below the data
const Y_MARGIN: f64 = 0.1;

/// Axis ranges for a curve: `0..t_max` and the temperature span including
/// `T_env`, widened by [`Y_MARGIN`] on both sides
///
/// A flat curve (T0 == T_env) gets a span of one degree either side so the
/// line is not drawn on the frame.
pub fn axis_ranges(curve: &CoolingCurve) -> (Range<f64>, Range<f64>) {
    let parameters = curve.parameters();
    let ambient = parameters.ambient_temperature();

    let (min, max) = curve
        .temperature_range()
        .map(|(min, max)| (min.min(ambient), max.max(ambient)))
        .unwrap_or((ambient, ambient));

    (0.0..parameters.time_horizon(), temperature_axis(min, max))
}

/// `min..max` widened by [`Y_MARGIN`] of the span, or by one degree when flat
fn temperature_axis(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span > 0.0 { span * Y_MARGIN } else { 1.0 };
    (min - pad)..(max + pad)
}

/// Plotters cannot lay out a mesh over an infinite or NaN range.
fn ranges_are_finite(x_range: &Range<f64>, y_range: &Range<f64>) -> bool {
    [x_range.start, x_range.end, y_range.start, y_range.end]
        .iter()
        .all(|v| v.is_finite())
}

/// Number of dashes in the ambient reference line
const AMBIENT_DASHES: usize = 40;

/// Segments of a horizontal dashed line at `level` over `0..t_max`
///
/// `dashes` drawn segments of equal length separated by equal gaps.
fn dash_segments(t_max: f64, level: f64, dashes: usize) -> Vec<[(f64, f64); 2]> {
    let period = t_max / dashes as f64;
    (0..dashes)
        .map(|i| {
            let start = i as f64 * period;
            [(start, level), (start + period * 0.6, level)]
        })
        .collect()
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a cooling curve to a PNG or SVG file
///
/// # Arguments
///
/// * `curve`       - Evaluated curve
/// * `output_path` - Output file path (`.svg` → vector, otherwise bitmap)
/// * `config`      - Optional plot configuration; `None` uses the light default
///
/// # Errors
///
/// - `EmptyCurve` if the curve has no samples
/// - `RenderFailure` if an axis range is not finite, or if the backend cannot
///   draw or write `output_path`
///
/// # Example
///
/// ```rust,ignore
/// use thermal_decay::output::visualization::plot_cooling_curve;
///
/// let curve = evaluator.evaluate_scenario("hot-coffee", None)?;
/// plot_cooling_curve(&curve, "coffee.png", None)?;
/// ```
pub fn plot_cooling_curve(
    curve: &CoolingCurve,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if curve.is_empty() {
        return Err(CoolingError::EmptyCurve);
    }

    let (x_range, y_range) = axis_ranges(curve);
    if !ranges_are_finite(&x_range, &y_range) {
        return Err(CoolingError::RenderFailure {
            path: output_path.to_path_buf(),
            reason: format!("axis range is not finite: x {x_range:?}, y {y_range:?}"),
        });
    }

    let default_config = PlotConfig::cooling_curve(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let outcome = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_curve_impl(backend, curve, (x_range, y_range), config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curve_impl(backend, curve, (x_range, y_range), config)
        }
    };

    outcome.map_err(|e| CoolingError::RenderFailure {
        path: output_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::info!(
        "Rendered {} samples to {}",
        curve.len(),
        output_path.display()
    );
    Ok(())
}

// =================================================================================================
// Internal Rendering Implementation
// =================================================================================================

fn plot_curve_impl<DB: DrawingBackend>(
    backend: DB,
    curve: &CoolingCurve,
    (x_range, y_range): (Range<f64>, Range<f64>),
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let t_max = x_range.end;
    let ambient = curve.parameters().ambient_temperature();
    let points: Vec<(f64, f64)> = curve.iter().map(|s| (s.time, s.temperature)).collect();

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &config.title,
            ("sans-serif", 32).into_font().color(&config.text_color),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let x_formatter = |x: &f64| format!("{:.0}", x);
    let y_formatter = |y: &f64| format!("{:.1}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .axis_style(config.text_color)
        .label_style(("sans-serif", 14).into_font().color(&config.text_color))
        .axis_desc_style(("sans-serif", 16).into_font().color(&config.text_color))
        .bold_line_style(config.grid_color.mix(0.3))
        .light_line_style(TRANSPARENT);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    if config.shade_area {
        chart.draw_series(AreaSeries::new(
            points.iter().copied(),
            ambient,
            config.fill_color.mix(config.fill_opacity),
        ))?;
    }

    if config.show_ambient {
        let ambient_color = config.ambient_color();
        let ambient_style = ShapeStyle::from(&ambient_color).stroke_width(1);
        chart
            .draw_series(
                dash_segments(t_max, ambient, AMBIENT_DASHES)
                    .into_iter()
                    .map(|segment| PathElement::new(segment.to_vec(), ambient_style)),
            )?
            .label(format!("T_env = {}", ambient))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ambient_color));
    }

    let line_color = config.line_color;
    chart
        .draw_series(LineSeries::new(
            points,
            ShapeStyle::from(&line_color).stroke_width(config.line_width),
        ))?
        .label(curve.formula())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(config.background.mix(0.8))
        .border_style(config.text_color)
        .label_font(("sans-serif", 14).into_font().color(&config.text_color))
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::evaluate_raw;
    use tempfile::tempdir;

    #[test]
    fn test_axis_ranges_cooling() {
        let curve = evaluate_raw(90.0, 20.0, 0.05, 60.0, 4).unwrap();
        let (x, y) = axis_ranges(&curve);
        assert_eq!(x, 0.0..60.0);
        // Span [20, 90] widened by 7 on both sides
        assert!((y.start - 13.0).abs() < 1e-9);
        assert!((y.end - 97.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_ranges_warming_includes_ambient() {
        let curve = evaluate_raw(4.0, 30.0, 0.05, 120.0, 50).unwrap();
        let (_, y) = axis_ranges(&curve);
        assert!(y.start < 4.0);
        assert!(y.end > 30.0);
    }

    #[test]
    fn test_axis_ranges_flat_curve() {
        let curve = evaluate_raw(25.0, 25.0, 0.1, 10.0, 5).unwrap();
        let (_, y) = axis_ranges(&curve);
        assert_eq!(y, 24.0..26.0);
    }

    #[test]
    fn test_temperature_axis_overflows_on_huge_span() {
        let y = temperature_axis(20.0, 1.7e308);
        assert!(y.end.is_infinite());
        assert!(!ranges_are_finite(&(0.0..60.0), &y));

        let y = temperature_axis(20.0, 90.0);
        assert!(ranges_are_finite(&(0.0..60.0), &y));
    }

    #[test]
    fn test_ranges_are_finite() {
        assert!(ranges_are_finite(&(0.0..1.0), &(-1.0..1.0)));
        assert!(!ranges_are_finite(&(0.0..f64::INFINITY), &(-1.0..1.0)));
        assert!(!ranges_are_finite(&(0.0..1.0), &(f64::NAN..1.0)));
    }

    #[test]
    fn test_dash_segments() {
        let dashes = dash_segments(100.0, 20.0, 10);
        assert_eq!(dashes.len(), 10);
        assert_eq!(dashes[0], [(0.0, 20.0), (6.0, 20.0)]);
        assert!(dashes.iter().all(|d| d[0].1 == 20.0 && d[1].1 == 20.0));
        assert!(dashes.last().unwrap()[1].0 < 100.0);
    }

    #[test]
    fn test_plot_cooling_curve_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("coffee.png");
        let curve = evaluate_raw(90.0, 25.0, 0.07, 60.0, 100).unwrap();

        plot_cooling_curve(&curve, &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_cooling_curve_svg_dark() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("metal.svg");
        let curve = evaluate_raw(800.0, 20.0, 0.2, 30.0, 200).unwrap();

        plot_cooling_curve(&curve, &path, Some(&PlotConfig::dark())).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_plot_without_grid_or_shading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.png");
        let curve = evaluate_raw(37.0, 15.0, 0.03, 180.0, 20).unwrap();

        let mut config = PlotConfig::cooling_curve("Body").without_shading();
        config.show_grid = false;
        config.show_ambient = false;
        plot_cooling_curve(&curve, &path, Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        let curve = evaluate_raw(90.0, 25.0, 0.07, 60.0, 10).unwrap();

        let error = plot_cooling_curve(&curve, &path, None).unwrap_err();
        assert!(matches!(error, CoolingError::RenderFailure { .. }));
    }
}
