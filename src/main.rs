//! Startup Trace CLI
//!
//! Prints startup phase timings from an Instruments Time Profiler trace
//! as `key=value` lines for shell scripts.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::path::PathBuf;

use startup_trace::commands::{execute_measure, validate_args, MeasureArgs};
use startup_trace::utils::config::{DEFAULT_EXPORT_PROGRAM, DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};

/// Startup Trace - .NET iOS startup phases from Time Profiler traces
#[derive(Parser, Debug)]
#[command(name = "startup-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace bundle recorded with the Time Profiler template
    trace: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a JSON report instead of key=value lines
    #[arg(long)]
    json: bool,

    /// Program used to run `xctrace export`
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_EXPORT_PROGRAM)]
    exporter: String,

    /// Read an already exported time-profile table instead of running the exporter
    #[arg(long, value_name = "FILE")]
    export_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { VERBOSE_LOG_LEVEL } else { DEFAULT_LOG_LEVEL };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = MeasureArgs {
        trace_path: cli.trace.unwrap_or_default(),
        json: cli.json,
        exporter_program: cli.exporter,
        export_file: cli.export_file,
    };

    // A missing path is a usage error: usage on stdout, exit 1
    if let Err(e) = validate_args(&args) {
        log::debug!("Invalid arguments: {}", e);
        println!("{}", Cli::command().render_usage());
        std::process::exit(1);
    }

    execute_measure(&args, std::io::stdout().lock())?;

    Ok(())
}
