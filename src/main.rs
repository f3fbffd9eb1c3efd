//! ramstk-predict: MIL-HDBK-217F hazard rate prediction for parts lists
//!
//! Reads one or more parts lists (JSON or CSV), calculates the active and
//! dormant hazard rate of every part by the parts count or part stress
//! method, and writes a JSON report with the system roll-up.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use ramstk_predict::batch::{self, BatchOptions};
use ramstk_predict::config;

/// MIL-HDBK-217F hazard rate prediction.
///
/// Calculates parts count or part stress hazard rates for every component
/// in the given parts lists and writes a JSON report.
#[derive(Parser, Debug)]
#[command(name = "ramstk-predict")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Parts list files or glob patterns (.json or .csv)
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Force a hazard rate method on every part (count or stress)
    #[arg(short, long, value_name = "METHOD")]
    method: Option<String>,

    /// Fill unset stress inputs with default values
    #[arg(long)]
    defaults: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "REPORT_FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Merges command line overrides into the configured batch options.
fn batch_options(args: &Args, cfg: &config::Config) -> Result<BatchOptions, String> {
    let mut options = BatchOptions::from_config(cfg);
    if let Some(ref method) = args.method {
        let method_id =
            config::method_id(method).ok_or_else(|| format!("invalid method '{method}': must be count or stress"))?;
        options.method = Some(method.clone());
        options.method_id = Some(method_id);
    }
    options.apply_default_values |= args.defaults;
    Ok(options)
}

/// Entry point for ramstk-predict.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let options = match batch_options(&args, &cfg) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        inputs = ?args.inputs,
        method = ?options.method,
        defaults = options.apply_default_values,
        "Starting prediction"
    );

    let report = match batch::run(&args.inputs, &options) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Prediction failed");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.output {
        Some(ref path) => report.write(path, cfg.output.pretty).map(|()| {
            info!(path = %path.display(), "Report written");
        }),
        None => report.to_json(cfg.output.pretty).map(|json| println!("{json}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Report error");
            ExitCode::FAILURE
        }
    }
}
