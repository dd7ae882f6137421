//! Slidekit CLI
//!
//! Run carousel engine scenarios against a virtual clock and print the
//! resulting track styles.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scenario;
mod simulate;

use scenario::{EngineSpec, Scenario};
use slidekit_widgets::track;

#[derive(Parser)]
#[command(name = "slidekit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Slidekit carousel engine CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print the engine state after every step
    Run {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a scenario without running it
    Check {
        /// Scenario file (TOML)
        scenario: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per step
    Text,
    /// One JSON object per step
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run { scenario, format } => cmd_run(&scenario, format),
        Commands::Check { scenario } => cmd_check(&scenario),
    }
}

fn cmd_run(path: &Path, format: OutputFormat) -> Result<()> {
    let scenario = Scenario::load(path)?;
    info!("Running {}", scenario.display_name());

    let snapshots = simulate::run(&scenario)?;
    for snapshot in &snapshots {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
            OutputFormat::Text => {
                let navigation = snapshot
                    .navigation
                    .map(|nav| {
                        format!(
                            " [prev:{} next:{}]",
                            if nav.prev { "on" } else { "off" },
                            if nav.next { "on" } else { "off" }
                        )
                    })
                    .unwrap_or_default();
                println!(
                    "{:>3} {:>6}ms  {:<24} {} -> {}{}  {}",
                    snapshot.step,
                    snapshot.time_ms,
                    snapshot.action,
                    snapshot.current,
                    snapshot.target,
                    navigation,
                    snapshot.css
                );
            }
        }
    }

    info!("{} steps completed", snapshots.len().saturating_sub(1));
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let scenario = Scenario::load(path)?;

    match scenario.engine()? {
        EngineSpec::Paged(spec) => info!(
            "{}: paged scroll, {} children in a {}px viewport, {} steps",
            scenario.display_name(),
            spec.child_widths.len(),
            spec.container_width,
            scenario.steps.len()
        ),
        EngineSpec::Swipe(config) => info!(
            "{}: swipe slide, {} slides (track order {:?}), {} steps",
            scenario.display_name(),
            config.length,
            track::track_order(config.length),
            scenario.steps.len()
        ),
    }

    println!("OK");
    Ok(())
}
