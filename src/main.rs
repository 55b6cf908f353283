//! mixlab - Concrete Mix Design Lab
//!
//! Terminal front-end for the mix design core: renders proportion tables,
//! strength verdicts, and compression test runs. Charting/animation
//! front-ends consume the same data through `--json`.
//!
//! # Usage
//!
//! ```bash
//! # Show the default mix and its strength verdict
//! mixlab show
//!
//! # Move the cement slider to 30% and rebalance the rest
//! mixlab set cement 30
//!
//! # Generate a reproducible ACI-style mix
//! mixlab --seed 42 generate
//!
//! # Run the simulated cube compression test
//! mixlab compress
//! ```
//!
//! # Environment Variables
//!
//! - `MIXLAB_CONFIG`: Path to a TOML lab config (default: ./mixlab.toml)
//! - `RUST_LOG`: Logging level (default: warn)

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use mixlab::types::SUM_TOLERANCE;
use mixlab::{LabConfig, Material, MixSession, ProportionSet, TestReport};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "mixlab")]
#[command(about = "Concrete mix design and simulated compression testing")]
#[command(version)]
struct CliArgs {
    /// Starting proportions as "cement,water,sand,coarse,additives"
    /// (five percentages totalling 100)
    #[arg(long, global = true, value_name = "C,W,S,CA,A")]
    mix: Option<String>,

    /// Random seed for reproducible mix generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Emit JSON for external renderers instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current mix and its strength verdict
    Show,
    /// Move one material's slider and rebalance the others
    Set {
        /// Material name (cement, water, sand, coarse, additives)
        material: String,
        /// New percentage in 0..=100
        value: f64,
    },
    /// Generate a random mix within ACI-style ranges
    Generate,
    /// Run the simulated compression test on the standard cube
    Compress,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = LabConfig::load();

    let mut session = match args.seed {
        Some(seed) => MixSession::with_seed(&config, seed),
        None => MixSession::new(&config),
    }
    .context("failed to start mix session")?;

    if let Some(spec) = &args.mix {
        session.set_proportions(parse_mix(spec)?);
    }

    match args.command {
        Command::Show => {
            render_mix(&session, args.json)?;
        }
        Command::Set { material, value } => {
            let Some(material) = Material::parse(&material) else {
                bail!(
                    "unknown material '{material}' — expected one of: cement, water, sand, coarse, additives"
                );
            };
            session
                .set_proportion(material, value)
                .with_context(|| format!("cannot set {material} to {value}%"))?;
            render_mix(&session, args.json)?;
        }
        Command::Generate => {
            session.generate_mix().context("mix generation failed")?;
            render_mix(&session, args.json)?;
        }
        Command::Compress => {
            let report = session.run_compression_test();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render_compression(&config, &report);
            }
        }
    }

    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

/// Parse "c,w,s,ca,a" into a ProportionSet, enforcing the 100% total.
fn parse_mix(spec: &str) -> Result<ProportionSet> {
    let values: Vec<f64> = spec
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number", part.trim()))
        })
        .collect::<Result<_>>()?;

    let values: [f64; Material::COUNT] = values
        .try_into()
        .map_err(|v: Vec<f64>| anyhow::anyhow!("expected 5 proportions, got {}", v.len()))?;

    ProportionSet::from_values(values).with_context(|| {
        format!(
            "proportions must be non-negative and total 100 (got {})",
            values.iter().sum::<f64>()
        )
    })
}

fn render_mix(session: &MixSession, json: bool) -> Result<()> {
    let verdict = session.verdict();
    if json {
        let payload = serde_json::json!({
            "proportions": session
                .proportions()
                .entries()
                .map(|(m, v)| (m.display_name().to_string(), v))
                .collect::<Vec<_>>(),
            "verdict": verdict,
            "feedback": verdict.feedback(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Material Proportions");
    for (material, value) in session.proportions().entries() {
        println!("  {:<18} {:>7.2} %", material.display_name(), value);
    }
    println!("  {:<18} {:>7.2} %", "Total", session.proportions().total());
    debug_assert!((session.proportions().total() - 100.0).abs() < SUM_TOLERANCE);

    println!();
    if verdict.water_cement_ratio.is_finite() {
        println!("Water-Cement Ratio: {:.3}", verdict.water_cement_ratio);
    }
    println!("Strength Feedback: {}", verdict.feedback());
    Ok(())
}

fn render_compression(config: &LabConfig, report: &TestReport) {
    let rig = &config.test_rig;
    let edge_cm = rig.cube_edge_m * 100.0;
    println!("Starting Compression Test...");
    println!("Cube Size: {edge_cm} cm x {edge_cm} cm x {edge_cm} cm");
    println!("Cross-Sectional Area: {:.4} m2", rig.cross_sectional_area_m2());
    println!("Incremental Load: {} N", rig.load_increment_n);

    for sample in &report.samples {
        println!("Load: {:.2} N, Stress: {:.2} Pa", sample.load_n, sample.stress_pa);
    }

    match &report.failure {
        Some(failure) => {
            println!();
            println!("Failure Condition Reached!");
            println!("Ultimate Load: {:.2} N", failure.ultimate_load_n);
            println!(
                "Compressive Strength: {:.2} MPa",
                failure.compressive_strength_mpa()
            );
        }
        None => {
            println!();
            println!(
                "Max load reached without failure (peak stress {:.2} MPa)",
                report.peak_stress_pa() / 1e6
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mix_accepts_valid_spec() {
        let mix = parse_mix("15,10,25,50,0").unwrap();
        assert_eq!(mix.get(Material::Sand), 25.0);
    }

    #[test]
    fn parse_mix_rejects_wrong_arity_and_bad_totals() {
        assert!(parse_mix("15,10,25").is_err());
        assert!(parse_mix("15,10,25,50,5").is_err());
        assert!(parse_mix("15,ten,25,50,0").is_err());
    }
}
