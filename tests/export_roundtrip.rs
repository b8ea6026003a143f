//! Integration tests: evaluator + CSV export
//!
//! These tests write real files and read them back, checking the layout
//! and that the values survive within the declared precision.

use std::fs;

use tempfile::tempdir;
use thermal_decay::error::CoolingError;
use thermal_decay::output::export::{
    CsvConfig, CsvExporter, Exporter, export_samples_csv, import_samples_csv,
};
use thermal_decay::solver::{ScenarioTable, evaluate, evaluate_raw};

mod common;
use common::{assert_curves_close, concrete_parameters};

// =================================================================================================
// Round trip
// =================================================================================================

#[test]
fn test_round_trip_every_scenario() {
    let dir = tempdir().unwrap();
    let config = CsvConfig::default();

    for scenario in ScenarioTable::builtin().iter() {
        let curve = evaluate(&scenario.default_parameters().unwrap());
        let path = dir.path().join(format!("{}.csv", scenario.name));

        export_samples_csv(&curve, &path, Some(&config)).unwrap();
        let samples = import_samples_csv(&path, ',').unwrap();

        assert_curves_close(&samples, &curve, config.tolerance(), scenario.name);
    }
}

#[test]
fn test_round_trip_across_precisions() {
    let dir = tempdir().unwrap();
    let curve = evaluate_raw(37.0, 15.0, 0.03, 180.0, 37).unwrap();

    for precision in [0, 2, 6, 8] {
        let config = CsvConfig::default().precision(precision);
        let path = dir.path().join(format!("p{}.csv", precision));

        export_samples_csv(&curve, &path, Some(&config)).unwrap();
        let samples = import_samples_csv(&path, ',').unwrap();

        assert_curves_close(&samples, &curve, config.tolerance(), "precision sweep");
    }
}

#[test]
fn test_round_trip_with_metadata_and_semicolons() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tea.csv");
    let curve = evaluate_raw(4.0, 30.0, 0.05, 120.0, 100).unwrap();
    let config = CsvConfig::semicolon().with_metadata();

    export_samples_csv(&curve, &path, Some(&config)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.lines().any(|l| l == "time;temperature"));
    assert!(content.contains("# Formula: T(t) = 30 + (-26.00)e^(-0.05t)"));

    let samples = import_samples_csv(&path, ';').unwrap();
    assert_curves_close(&samples, &curve, config.tolerance(), "semicolon");

    // Reading with the wrong delimiter fails on the header.
    let error = import_samples_csv(&path, ',').unwrap_err();
    assert!(matches!(error, CoolingError::MalformedExport { .. }));
}

// =================================================================================================
// File layout
// =================================================================================================

#[test]
fn test_concrete_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("concrete.csv");
    let curve = evaluate(&concrete_parameters());

    export_samples_csv(&curve, &path, None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "time,temperature\n\
         0.0000,90.0000\n\
         20.0000,45.7516\n\
         40.0000,29.4735\n\
         60.0000,23.4851\n"
    );
}

#[test]
fn test_downsampled_file_keeps_first_and_last() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metal.csv");
    let curve = evaluate_raw(800.0, 20.0, 0.2, 30.0, 2000).unwrap();

    let exporter = CsvExporter::new(CsvConfig::default().max_rows(25));
    exporter.export(&curve, &path).unwrap();

    let samples = import_samples_csv(&path, ',').unwrap();
    assert_eq!(samples.len(), 25);
    assert_eq!(samples.first().unwrap().time, 0.0);
    assert_eq!(samples.first().unwrap().temperature, 800.0);
    assert_eq!(samples.last().unwrap().time, 30.0);
    assert!(samples.windows(2).all(|w| w[0].time < w[1].time));
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("twice.csv");

    let long = evaluate_raw(90.0, 25.0, 0.07, 60.0, 100).unwrap();
    let short = evaluate_raw(90.0, 25.0, 0.07, 60.0, 3).unwrap();

    export_samples_csv(&long, &path, None).unwrap();
    export_samples_csv(&short, &path, None).unwrap();

    assert_eq!(import_samples_csv(&path, ',').unwrap().len(), 3);
}

// =================================================================================================
// Failures
// =================================================================================================

#[test]
fn test_export_failure_surfaces_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.csv");
    let curve = evaluate(&concrete_parameters());

    let error = export_samples_csv(&curve, &path, None).unwrap_err();
    match error {
        CoolingError::ExportFailure { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_reports_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edited.csv");
    fs::write(
        &path,
        "# edited by hand\ntime,temperature\n0.0,90.0\n20.0,45.75\n40.0;29.47\n",
    )
    .unwrap();

    let error = import_samples_csv(&path, ',').unwrap_err();
    assert!(matches!(error, CoolingError::MalformedExport { line: 5, .. }));
    assert!(error.to_string().starts_with("Malformed export at line 5"));
}
