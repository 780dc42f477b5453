use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use cmip_precip_viewer::data::model::Month;

#[derive(Parser, Debug)]
#[command(about = "Write a synthetic CMIP precipitation dataset")]
struct Args {
    /// Output JSON file.
    #[arg(default_value = "cmip_california_precip.json")]
    out: PathBuf,

    #[arg(long, default_value_t = 2015)]
    first_year: i32,

    #[arg(long, default_value_t = 2100)]
    last_year: i32,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// One output row, in the same shape the viewer reads.
#[derive(Debug, PartialEq, Serialize)]
struct SampleRecord {
    model: &'static str,
    year: i32,
    mean_pr: BTreeMap<&'static str, f64>,
}

/// Scenario name, wet-season peak (mm/day) and change of that peak per decade.
const SCENARIOS: [(&str, f64, f64); 3] = [
    ("ssp1-26", 4.2, 0.02),
    ("ssp2-45", 4.0, 0.08),
    ("ssp5-85", 3.8, 0.15),
];

/// Monthly mean precipitation: a January peak falling to near zero in July.
fn monthly_mean(month: Month, peak: f64) -> f64 {
    let phase = month.index() as f64 / 12.0 * 2.0 * std::f64::consts::PI;
    let dry_floor = 0.05;
    dry_floor + (peak - dry_floor) * (0.5 + 0.5 * phase.cos()).powf(1.5)
}

/// Synthetic records for every scenario and year; the same seed gives the
/// same output.
fn generate(first_year: i32, last_year: i32, seed: u64) -> Result<Vec<SampleRecord>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut records = Vec::new();
    for (model, peak, trend) in SCENARIOS {
        for year in first_year..=last_year {
            let decades = f64::from(year - first_year) / 10.0;
            let peak = peak + trend * decades;

            let mut mean_pr = BTreeMap::new();
            for m in Month::ALL {
                let mean = monthly_mean(m, peak);
                // Noise scales with the month's mean; rates never go negative.
                let noise = Normal::new(mean, 0.25 * mean)
                    .map_err(|e| anyhow!("{model} {year} {}: {e}", m.key()))?;
                let value = noise.sample(&mut rng).max(0.0);
                mean_pr.insert(m.key(), (value * 1e4).round() / 1e4);
            }

            records.push(SampleRecord {
                model,
                year,
                mean_pr,
            });
        }
    }
    Ok(records)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let records = generate(args.first_year, args.last_year, args.seed)?;

    let file = std::fs::File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &records)
        .context("writing JSON")?;

    println!(
        "Wrote {} records ({} scenarios, {}–{}) to {}",
        records.len(),
        SCENARIOS.len(),
        args.first_year,
        args.last_year,
        args.out.display()
    );
    Ok(())
}
