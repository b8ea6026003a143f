//! Example: Scenario Tour
//!
//! Steps through the four preset scenarios the way a "next scenario" button
//! would, evaluates each one and writes a CSV file plus a dark-themed SVG
//! plot per scenario.
//!
//! **Scenarios**:
//! - Hot coffee cooling in a room
//! - Iced tea warming up on a hot day
//! - Forensic body cooling
//! - Metal quenching in water
//!
//! Output goes to `<temp dir>/thermal-decay-tour/`.

use thermal_decay::{
    output::{CsvConfig, PlotConfig, export_samples_csv, plot_cooling_curve},
    physics::CoolingLaw,
    solver::{Evaluator, ScenarioTable},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Newton's Law of Cooling - Scenario Tour");
    println!("═══════════════════════════════════════════════════════\n");

    let output_dir = std::env::temp_dir().join("thermal-decay-tour");
    std::fs::create_dir_all(&output_dir)?;

    let table = ScenarioTable::builtin();
    let evaluator = Evaluator::new(table);
    let csv_config = CsvConfig::default().with_metadata();

    // One full lap, then one more step to show the wrap-around.
    for (step, scenario) in table.rotation().take(table.len() + 1).enumerate() {
        if step == table.len() {
            println!("↺ Back to the start: {}\n", scenario.title);
            break;
        }

        let start = Instant::now();
        let curve = evaluator.evaluate_scenario(scenario.name, None)?;
        let elapsed = start.elapsed();
        let law = curve.law();

        println!("▶ {} ({})", scenario.title, law.name());
        println!("  {}", scenario.description);
        println!("  {}", law.formula());
        println!("  samples        : {} in {:?}", curve.len(), elapsed);
        if let Some(last) = curve.last() {
            println!("  T({:>5})       : {:.2}", last.time, last.temperature);
        }
        println!("  gap half-life  : {:.2}", law.half_life());

        let midpoint = (law.initial_temperature() + law.ambient_temperature()) / 2.0;
        if let Some(t) = law.time_to_reach(midpoint) {
            println!("  reaches {:.1} at t = {:.2}", midpoint, t);
        }

        let csv_path = output_dir.join(format!("{}.csv", scenario.name));
        export_samples_csv(&curve, &csv_path, Some(&csv_config))?;

        let svg_path = output_dir.join(format!("{}.svg", scenario.name));
        let plot_config = PlotConfig::dark().with_title(scenario.title);
        plot_cooling_curve(&curve, &svg_path, Some(&plot_config))?;

        println!("  → {}", csv_path.display());
        println!("  → {}\n", svg_path.display());
    }

    Ok(())
}
