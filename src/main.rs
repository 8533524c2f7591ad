//! @ai:module:intent CLI for SDT metrics and ROC analysis
//! @ai:module:layer presentation
//! @ai:module:depends_on config, report, detection

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sdt_roc::{
    report::{ChartGeneratorTrait, SummaryReporterTrait},
    AnalysisReport, ChartGenerator, ExperimentConfig, MetricUnit, SummaryReporter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdt-roc")]
#[command(about = "Signal detection theory metrics and ROC curve analysis")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every condition of an experiment definition
    Analyze {
        /// Path to experiment definition (TOML)
        #[arg(short, long, default_value = "experiment.toml")]
        config: PathBuf,

        /// Render the ROC curve to this file (.png or .svg)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Compute metrics for a single condition
    Rates {
        #[arg(long)]
        hits: u64,

        #[arg(long)]
        misses: u64,

        #[arg(long)]
        false_alarms: u64,

        #[arg(long)]
        correct_rejections: u64,
    },

    /// Write a sample experiment definition
    Init {
        /// Output path for the experiment file
        #[arg(short, long, default_value = "experiment.toml")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sdt_roc=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            chart,
            format,
        } => analyze(config, chart, format),
        Commands::Rates {
            hits,
            misses,
            false_alarms,
            correct_rejections,
        } => {
            print_rates(&MetricUnit::new(hits, misses, false_alarms, correct_rejections));
            Ok(())
        }
        Commands::Init { output } => init_config(output),
    }
}

/// @ai:intent Load an experiment, print its analysis and optionally chart it
/// @ai:effects fs:read, fs:write, io
fn analyze(config_path: PathBuf, chart: Option<PathBuf>, format: Format) -> Result<()> {
    let config = ExperimentConfig::load(&config_path)?;
    tracing::info!(
        "Loaded {} conditions from {}",
        config.conditions.len(),
        config_path.display()
    );

    if config.conditions.is_empty() {
        tracing::warn!("Experiment defines no conditions");
    }

    let aggregator = config.to_aggregator();
    let report = AnalysisReport::from_aggregator(&aggregator);

    match format {
        Format::Text => print!("{}", SummaryReporter::new().render(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = chart {
        ChartGenerator::new().generate(&aggregator, &path, &config.chart)?;
    }

    Ok(())
}

/// @ai:intent Print the four metrics of one condition
/// @ai:effects io
fn print_rates(unit: &MetricUnit) {
    println!("{:<20} {:>10.4}", "Hit rate:", unit.hit_rate());
    println!("{:<20} {:>10.4}", "False alarm rate:", unit.false_alarm_rate());
    println!("{:<20} {:>10.4}", "d':", unit.d_prime());
    println!("{:<20} {:>10.4}", "Criterion (c):", unit.criterion());
}

/// @ai:intent Write the sample experiment definition
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    ExperimentConfig::sample().save(&output)?;
    println!("Experiment definition saved to {}", output.display());
    Ok(())
}
