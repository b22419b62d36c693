//! Vibrosweep - Main Entry Point

use clap::Parser;
use recording_io::save_series;
use signal_cleaner::OutlierConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use vibrosweep::{init_logging, run_pipeline, PipelineConfig, PipelineError};

/// Clean a raw accelerometer recording and report condition metrics
#[derive(Parser)]
#[command(name = "vibrosweep", version, about)]
struct Cli {
    /// Raw accelerometer recording (CSV, with or without an X/Y/Z header)
    #[arg(long)]
    input: PathBuf,

    /// Destination for the cleaned series (CSV with X,Y,Z header)
    #[arg(long)]
    output: PathBuf,

    /// Sampling frequency in Hz
    #[arg(long, default_value_t = 1091.0)]
    fs: f64,

    /// Shaft speed in revolutions per minute
    #[arg(long, default_value_t = 3000.0)]
    rpm: f64,

    /// Z-score magnitude above which a sample is treated as a spike
    #[arg(long, default_value_t = 3.0)]
    z_threshold: f64,

    /// Also write the run report as JSON
    #[arg(long)]
    metrics_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let config = PipelineConfig {
        sample_rate_hz: cli.fs,
        shaft_rpm: cli.rpm,
        outlier: OutlierConfig {
            z_threshold: cli.z_threshold,
        },
        ..PipelineConfig::default()
    };

    let outcome = run_pipeline(&cli.input, &config)?;

    save_series(&cli.output, &outcome.series)?;
    if let Some(path) = &cli.metrics_json {
        outcome.report.save_json(path)?;
    }
    info!("cleaned series saved to {}", cli.output.display());

    println!("{}", outcome.report);
    Ok(())
}
