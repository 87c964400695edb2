use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};

use markscan::{run_scan, FixedSkew, ScanConfig, ScanError};

/// Optical mark recognition for scanned checkbox forms.
#[derive(Parser, Debug)]
#[command(name = "markscan", version, about)]
struct Args {
    /// JSON scan configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source image; overrides `in_file` from the config.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Annotated output image; overrides `out_file` from the config.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Known skew angle in degrees, counter-clockwise positive.
    #[arg(long)]
    skew: Option<f64>,

    /// Dump the binarized intermediate image to this path.
    #[arg(long)]
    binarized: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log level: error, warn, info, debug, or trace.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _ = markscan::init_with_level(args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ScanError> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load_json(path)?,
        None => ScanConfig::default(),
    };
    if let Some(input) = &args.input {
        config.in_file = input.display().to_string();
    }
    if let Some(output) = &args.output {
        config.out_file = output.display().to_string();
    }
    if let Some(skew) = args.skew {
        config.skew_deg = skew;
    }
    if let Some(binarized) = &args.binarized {
        config.binarized_path = Some(binarized.display().to_string());
    }
    if let Some(report) = &args.report {
        config.report_path = Some(report.display().to_string());
    }

    let report = run_scan(&config, &FixedSkew(config.skew_deg))?;

    match &config.report_path {
        Some(path) => report.write_json(path)?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
