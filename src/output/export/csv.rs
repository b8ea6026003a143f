//! CSV export and re-import of cooling curves
//!
//! The file layout is deliberately plain so that spreadsheets, pandas or a
//! second run of this crate can read it back:
//!
//! ```csv
//! time,temperature
//! 0.0000,90.0000
//! 20.0000,45.7516
//! 40.0000,29.4735
//! 60.0000,23.4851
//! ```
//!
//! # Features
//!
//! - **Fixed precision**: every number has `precision` decimal places (default 4)
//! - **Metadata**: optional `#` comment block with timestamp, formula and parameters
//! - **Downsampling**: optional `max_rows`, always keeping the first and last sample
//! - **Round trip**: [`read_samples_csv`] reproduces the exported pairs within
//!   [`CsvConfig::tolerance`]
//!
//! # Example
//!
//! ```rust,ignore
//! use thermal_decay::output::export::{export_samples_csv, import_samples_csv, CsvConfig};
//!
//! let config = CsvConfig::default().with_metadata();
//! export_samples_csv(&curve, "coffee.csv", Some(&config))?;
//!
//! let samples = import_samples_csv("coffee.csv", ',')?;
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{CoolingError, Result};
use crate::solver::{CoolingCurve, Sample};

/// Header of the time column
pub const TIME_HEADER: &str = "time";

/// Header of the temperature column
pub const TEMPERATURE_HEADER: &str = "temperature";

/// Decimal places written by default
pub const DEFAULT_PRECISION: usize = 4;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use thermal_decay::output::export::CsvConfig;
///
/// let config = CsvConfig::default()
///     .delimiter(';')
///     .precision(6)
///     .with_metadata();
/// assert_eq!(config.tolerance(), 0.5e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places (default: 4)
    pub precision: usize,

    /// Write a `#` comment block before the header (default: false)
    pub include_metadata: bool,

    /// Uniformly downsample to at most this many rows (default: all rows)
    pub max_rows: Option<usize>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: DEFAULT_PRECISION,
            include_metadata: false,
            max_rows: None,
        }
    }
}

impl CsvConfig {
    /// Semicolon-separated variant for spreadsheet locales that use ',' as decimal mark
    pub fn semicolon() -> Self {
        Self {
            delimiter: ';',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }

    /// Builder pattern: cap the number of rows (at least 2, first and last)
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows.max(2));
        self
    }

    /// Largest difference between a value and its exported text: half a unit
    /// in the last written decimal place
    pub fn tolerance(&self) -> f64 {
        0.5 / 10f64.powi(self.precision as i32)
    }

    fn header(&self) -> String {
        format!("{}{}{}", TIME_HEADER, self.delimiter, TEMPERATURE_HEADER)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Indices kept when downsampling `len` rows to `max_rows`
///
/// Spread uniformly; index `0` and `len - 1` are always included.
pub fn downsample_indices(len: usize, max_rows: usize) -> Vec<usize> {
    let max_rows = max_rows.max(2);
    if len <= max_rows {
        return (0..len).collect();
    }

    let last = len - 1;
    let intervals = max_rows - 1;
    (0..max_rows)
        .map(|i| (i * last + intervals / 2) / intervals)
        .collect()
}

fn format_number(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    writer: &mut W,
    curve: &CoolingCurve,
    rows: usize,
) -> io::Result<()> {
    let parameters = curve.parameters();

    writeln!(writer, "# Newton's Law of Cooling")?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(writer, "# Formula: {}", curve.formula())?;
    writeln!(writer, "# T0: {}", parameters.initial_temperature())?;
    writeln!(writer, "# T_env: {}", parameters.ambient_temperature())?;
    writeln!(writer, "# k: {}", parameters.cooling_constant())?;
    writeln!(writer, "# t_max: {}", parameters.time_horizon())?;
    writeln!(writer, "# n_points: {}", parameters.points())?;
    if rows != curve.len() {
        writeln!(writer, "# Rows: {} (downsampled)", rows)?;
    }
    writeln!(writer, "#")?;

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write a curve as CSV to any writer
///
/// This is the core of [`export_samples_csv`]; it is exposed for in-memory
/// buffers and sockets.
pub fn write_samples_csv<W: Write>(
    curve: &CoolingCurve,
    mut writer: W,
    config: &CsvConfig,
) -> io::Result<()> {
    let indices = match config.max_rows {
        Some(max_rows) => downsample_indices(curve.len(), max_rows),
        None => (0..curve.len()).collect(),
    };

    if indices.len() < curve.len() {
        log::warn!(
            "Downsampling export from {} to {} rows",
            curve.len(),
            indices.len()
        );
    }

    if config.include_metadata {
        write_metadata_header(&mut writer, curve, indices.len())?;
    }

    writeln!(writer, "{}", config.header())?;

    let samples = curve.samples();
    for index in indices {
        let sample = samples[index];
        writeln!(
            writer,
            "{}{}{}",
            format_number(sample.time, config.precision),
            config.delimiter,
            format_number(sample.temperature, config.precision)
        )?;
    }

    writer.flush()
}

/// Export a curve to a CSV file
///
/// # Arguments
///
/// * `curve` - Evaluated curve
/// * `output_path` - Output file path (created or truncated)
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - `EmptyCurve` if the curve has no samples
/// - `ExportFailure` if the file cannot be created or written; the
///   underlying I/O error is kept as the source
pub fn export_samples_csv(
    curve: &CoolingCurve,
    output_path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let output_path = output_path.as_ref();

    if curve.is_empty() {
        return Err(CoolingError::EmptyCurve);
    }

    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    let to_export_failure = |source| CoolingError::ExportFailure {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(to_export_failure)?;
    write_samples_csv(curve, BufWriter::new(file), config).map_err(to_export_failure)?;

    log::info!(
        "Exported {} samples to {}",
        curve.len(),
        output_path.display()
    );
    Ok(())
}

// =============================================================================
// Import Functions
// =============================================================================

/// Read samples back from CSV text
///
/// Lines starting with `#` and blank lines are skipped. The first remaining
/// line must be the `time<delimiter>temperature` header.
///
/// # Errors
///
/// `MalformedExport` with the 1-based line number of the first bad line.
pub fn read_samples_csv<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<Sample>> {
    let expected_header = format!("{}{}{}", TIME_HEADER, delimiter, TEMPERATURE_HEADER);
    let mut header_seen = false;
    let mut samples = Vec::new();
    let mut line_number = 0;

    for line in reader.lines() {
        line_number += 1;
        let line = line.map_err(|e| malformed(line_number, format!("read error: {e}")))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !header_seen {
            if trimmed != expected_header {
                return Err(malformed(
                    line_number,
                    format!("expected header {expected_header:?}, found {trimmed:?}"),
                ));
            }
            header_seen = true;
            continue;
        }

        samples.push(parse_row(trimmed, delimiter, line_number)?);
    }

    if !header_seen {
        return Err(malformed(
            line_number + 1,
            format!("missing header {expected_header:?}"),
        ));
    }

    Ok(samples)
}

/// Read samples back from a CSV file
///
/// # Errors
///
/// - `ImportFailure` if the file cannot be opened
/// - `MalformedExport` as for [`read_samples_csv`]
pub fn import_samples_csv(input_path: impl AsRef<Path>, delimiter: char) -> Result<Vec<Sample>> {
    let input_path = input_path.as_ref();
    let file = File::open(input_path).map_err(|source| CoolingError::ImportFailure {
        path: input_path.to_path_buf(),
        source,
    })?;
    read_samples_csv(BufReader::new(file), delimiter)
}

fn parse_row(line: &str, delimiter: char, line_number: usize) -> Result<Sample> {
    let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    if fields.len() != 2 {
        return Err(malformed(
            line_number,
            format!("expected 2 fields, found {}", fields.len()),
        ));
    }

    let parse = |text: &str, column: &str| {
        text.parse::<f64>()
            .map_err(|_| malformed(line_number, format!("{column} {text:?} is not a number")))
    };

    Ok(Sample::new(
        parse(fields[0], TIME_HEADER)?,
        parse(fields[1], TEMPERATURE_HEADER)?,
    ))
}

fn malformed(line: usize, reason: String) -> CoolingError {
    CoolingError::MalformedExport { line, reason }
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// CSV implementation of [`Exporter`](super::Exporter)
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with a given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }
}

impl super::Exporter for CsvExporter {
    type Error = CoolingError;

    fn export(&self, curve: &CoolingCurve, path: &Path) -> Result<()> {
        export_samples_csv(curve, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::export::Exporter;
    use crate::solver::evaluate_raw;
    use std::fs;
    use tempfile::{NamedTempFile, tempdir};

    fn concrete_curve() -> CoolingCurve {
        evaluate_raw(90.0, 20.0, 0.05, 60.0, 4).unwrap()
    }

    fn to_string(curve: &CoolingCurve, config: &CsvConfig) -> String {
        let mut buffer = Vec::new();
        write_samples_csv(curve, &mut buffer, config).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = CsvConfig::default();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.precision, 4);
        assert!(!config.include_metadata);
        assert_eq!(config.max_rows, None);
        assert_eq!(config.tolerance(), 0.5e-4);
    }

    #[test]
    fn test_config_builders() {
        let config = CsvConfig::semicolon().precision(2).max_rows(1);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.precision, 2);
        assert_eq!(config.max_rows, Some(2));
        assert_eq!(CsvConfig::high_precision().precision, 12);
    }

    #[test]
    fn test_write_concrete_curve() {
        let text = to_string(&concrete_curve(), &CsvConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "time,temperature",
                "0.0000,90.0000",
                "20.0000,45.7516",
                "40.0000,29.4735",
                "60.0000,23.4851",
            ]
        );
    }

    #[test]
    fn test_write_with_metadata() {
        let text = to_string(&concrete_curve(), &CsvConfig::default().with_metadata());
        assert!(text.starts_with("# Newton's Law of Cooling\n"));
        assert!(text.contains("# Generated: "));
        assert!(text.contains("# Formula: T(t) = 20 + (70.00)e^(-0.05t)\n"));
        assert!(text.contains("# k: 0.05\n"));
        assert!(text.contains("# n_points: 4\n"));
        assert!(!text.contains("# Rows:"));

        // The header still comes before any data row.
        let first_data = text.lines().find(|l| !l.starts_with('#')).unwrap();
        assert_eq!(first_data, "time,temperature");
    }

    #[test]
    fn test_write_custom_delimiter() {
        let text = to_string(&concrete_curve(), &CsvConfig::semicolon());
        assert!(text.starts_with("time;temperature\n0.0000;90.0000\n"));
    }

    #[test]
    fn test_downsample_indices() {
        assert_eq!(downsample_indices(5, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(11, 3), vec![0, 5, 10]);
        assert_eq!(downsample_indices(100, 2), vec![0, 99]);
        assert_eq!(downsample_indices(100, 0), vec![0, 99]);

        let indices = downsample_indices(1000, 7);
        assert_eq!(indices.len(), 7);
        assert_eq!(indices[0], 0);
        assert_eq!(indices[6], 999);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_write_downsampled_keeps_endpoints() {
        let curve = evaluate_raw(800.0, 20.0, 0.2, 30.0, 200).unwrap();
        let config = CsvConfig::default().max_rows(10).with_metadata();
        let text = to_string(&curve, &config);

        assert!(text.contains("# Rows: 10 (downsampled)"));
        let samples = read_samples_csv(text.as_bytes(), ',').unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].time, 0.0);
        assert_eq!(samples[9].time, 30.0);
    }

    #[test]
    fn test_read_round_trip() {
        let curve = concrete_curve();
        let config = CsvConfig::default();
        let text = to_string(&curve, &config);

        let samples = read_samples_csv(text.as_bytes(), ',').unwrap();
        assert_eq!(samples.len(), curve.len());
        for (read, original) in samples.iter().zip(curve.iter()) {
            assert!((read.time - original.time).abs() <= config.tolerance());
            assert!((read.temperature - original.temperature).abs() <= config.tolerance());
        }
    }

    #[test]
    fn test_read_skips_comments_and_blank_lines() {
        let text = "# comment\n\n#\ntime,temperature\n0.0,50.0\n\n1.0,40.0\n";
        let samples = read_samples_csv(text.as_bytes(), ',').unwrap();
        assert_eq!(samples, vec![Sample::new(0.0, 50.0), Sample::new(1.0, 40.0)]);
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let error = read_samples_csv("t,T(t)\n0,1\n".as_bytes(), ',').unwrap_err();
        assert!(matches!(error, CoolingError::MalformedExport { line: 1, .. }));
    }

    #[test]
    fn test_read_rejects_missing_header() {
        let error = read_samples_csv("# only comments\n".as_bytes(), ',').unwrap_err();
        assert!(matches!(error, CoolingError::MalformedExport { line: 2, .. }));
    }

    #[test]
    fn test_read_reports_bad_row_line() {
        let text = "time,temperature\n0.0,50.0\n1.0,hot\n";
        let error = read_samples_csv(text.as_bytes(), ',').unwrap_err();
        match error {
            CoolingError::MalformedExport { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("\"hot\""));
            }
            other => panic!("unexpected error: {other}"),
        }

        let text = "time,temperature\n0.0,50.0,1\n";
        let error = read_samples_csv(text.as_bytes(), ',').unwrap_err();
        assert!(matches!(error, CoolingError::MalformedExport { line: 2, .. }));
    }

    #[test]
    fn test_export_and_import_file() {
        let temp = NamedTempFile::new().unwrap();
        let curve = concrete_curve();

        export_samples_csv(&curve, temp.path(), None).unwrap();
        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.starts_with("time,temperature\n"));

        let samples = import_samples_csv(temp.path(), ',').unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[3].time, 60.0);
    }

    #[test]
    fn test_export_failure_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let error = export_samples_csv(&concrete_curve(), &path, None).unwrap_err();
        match error {
            CoolingError::ExportFailure { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_import_failure_for_missing_file() {
        let dir = tempdir().unwrap();
        let error = import_samples_csv(dir.path().join("absent.csv"), ',').unwrap_err();
        assert!(matches!(error, CoolingError::ImportFailure { .. }));
    }

    #[test]
    fn test_csv_exporter_trait() {
        let temp = NamedTempFile::new().unwrap();
        let exporter = CsvExporter::new(CsvConfig::default().precision(2));
        assert_eq!(exporter.config().precision, 2);

        exporter.export(&concrete_curve(), temp.path()).unwrap();
        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("60.00,23.49"));
    }
}
