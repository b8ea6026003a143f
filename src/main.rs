//! # thermal-decay
//!
//! Command-line front end: load a preset scenario, override any of its five
//! parameters, evaluate the cooling curve, then print, export or plot it.
//!
//! ## Usage
//!
//! ```text
//! thermal-decay --scenario metal-quenching --plot metal.png
//! thermal-decay --t0 95 --t-env 21 -k 0.04 --t-max 90 -n 10 --print
//! thermal-decay --scenario forensic-body --csv body.csv --metadata --max-rows 50
//! thermal-decay --list-scenarios
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use thermal_decay::error::Result;
use thermal_decay::output::export::{CsvConfig, DEFAULT_PRECISION, export_samples_csv};
use thermal_decay::output::visualization::{PlotConfig, plot_cooling_curve};
use thermal_decay::physics::{ParameterField, ParameterInput};
use thermal_decay::solver::{CoolingCurve, Evaluator, Scenario, ScenarioTable};

/// Palette used for `--plot`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Theme {
    /// Violet curve on a dark panel.
    Dark,

    /// Red curve on white.
    Light,
}

/// Command line arguments.
///
/// Parameter values are taken as free text so that a bad value is reported
/// against the field it was typed into.
#[derive(Parser, Debug)]
#[command(name = "thermal-decay")]
#[command(version)]
#[command(
    about = "Evaluate Newton's law of cooling and export or plot the curve",
    long_about = None
)]
struct Args {
    /// Preset scenario that pre-fills the parameters.
    #[arg(short, long, default_value = "hot-coffee")]
    scenario: String,

    /// Initial temperature T0, overrides the scenario.
    #[arg(long = "t0", allow_hyphen_values = true)]
    t0: Option<String>,

    /// Ambient temperature T_env, overrides the scenario.
    #[arg(long = "t-env", allow_hyphen_values = true)]
    t_env: Option<String>,

    /// Cooling constant k (> 0), overrides the scenario.
    #[arg(short = 'k', long = "cooling-constant", allow_hyphen_values = true)]
    cooling_constant: Option<String>,

    /// Time horizon t_max (> 0), overrides the scenario.
    #[arg(long = "t-max", allow_hyphen_values = true)]
    t_max: Option<String>,

    /// Number of samples (2 to 100000), overrides the scenario.
    #[arg(short = 'n', long = "points", allow_hyphen_values = true)]
    points: Option<String>,

    /// Write the samples to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Decimal places for CSV and printed values.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Prefix the CSV with a `#` metadata block.
    #[arg(long)]
    metadata: bool,

    /// Downsample the CSV to at most this many rows.
    #[arg(long)]
    max_rows: Option<usize>,

    /// Render the curve to this PNG or SVG file.
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Plot palette.
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Print every sample to stdout.
    #[arg(long)]
    print: bool,

    /// List the preset scenarios and exit.
    #[arg(long)]
    list_scenarios: bool,
}

impl Args {
    /// Overrides given on the command line, by field
    fn overrides(&self) -> [(ParameterField, Option<&String>); 5] {
        [
            (ParameterField::InitialTemperature, self.t0.as_ref()),
            (ParameterField::AmbientTemperature, self.t_env.as_ref()),
            (ParameterField::CoolingConstant, self.cooling_constant.as_ref()),
            (ParameterField::TimeHorizon, self.t_max.as_ref()),
            (ParameterField::Points, self.points.as_ref()),
        ]
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let table = ScenarioTable::builtin();

    if args.list_scenarios {
        print_scenarios(table);
        return Ok(());
    }

    let scenario = table.lookup(&args.scenario)?;
    let (input, customised) = merge_overrides(scenario, &args.overrides());

    let parameters = input.parse()?;
    let curve = Evaluator::new(table).evaluate(&parameters);

    print_summary(scenario, customised, &curve);

    if args.print {
        print_samples(&curve, args.precision);
    }

    if let Some(path) = &args.csv {
        let mut config = CsvConfig::default().precision(args.precision);
        if args.metadata {
            config = config.with_metadata();
        }
        if let Some(max_rows) = args.max_rows {
            config = config.max_rows(max_rows);
        }
        export_samples_csv(&curve, path, Some(&config))?;
        println!("Saved {}", path.display());
    }

    if let Some(path) = &args.plot {
        let config = match args.theme {
            Theme::Dark => PlotConfig::dark(),
            Theme::Light => PlotConfig::default(),
        };
        let title = if customised { None } else { Some(scenario.title) };
        let config = config.with_title(title);
        plot_cooling_curve(&curve, path, Some(&config))?;
        println!("Saved {}", path.display());
    }

    Ok(())
}

/// Scenario values with the command-line overrides applied on top
///
/// The flag is `true` when at least one field was overridden.
fn merge_overrides(
    scenario: &Scenario,
    overrides: &[(ParameterField, Option<&String>)],
) -> (ParameterInput, bool) {
    let mut input = scenario.to_input();
    let mut customised = false;
    for (field, value) in overrides {
        if let Some(value) = value {
            input.set(*field, value.as_str());
            customised = true;
        }
    }
    (input, customised)
}

fn print_scenarios(table: &ScenarioTable) {
    println!(
        "{:<16} {:>8} {:>8} {:>6} {:>7} {:>7}  {}",
        "NAME", "T0", "T_env", "k", "t_max", "points", "DESCRIPTION"
    );
    for scenario in table.iter() {
        println!(
            "{:<16} {:>8} {:>8} {:>6} {:>7} {:>7}  {}",
            scenario.name,
            scenario.initial_temperature,
            scenario.ambient_temperature,
            scenario.cooling_constant,
            scenario.time_horizon,
            scenario.suggested_points,
            scenario.description
        );
    }
}

fn print_summary(scenario: &Scenario, customised: bool, curve: &CoolingCurve) {
    let law = curve.law();

    if customised {
        println!("{} (modified)", scenario.title);
    } else {
        println!("{}", scenario.title);
    }
    println!("  {}", law.formula());
    if let Some(last) = curve.last() {
        println!("  T({}) = {:.2}", last.time, last.temperature);
    }
    println!("  half-life of the gap: {:.2}", law.half_life());
    println!("  samples: {}", curve.len());
}

fn print_samples(curve: &CoolingCurve, precision: usize) {
    println!("{:>14} {:>14}", "time", "temperature");
    for sample in curve {
        println!(
            "{:>14.prec$} {:>14.prec$}",
            sample.time,
            sample.temperature,
            prec = precision
        );
    }
}
