//! acemask
//!
//! Loads ACE definitions from configuration, validates them and prints the
//! resulting masks.

use acemask::{
    Ace, AceRecord,
    config::{AclConfig, LogFormat, load_config},
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Validate access control entries and print their masks
#[derive(Parser, Debug)]
#[command(name = "acemask")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "ACEMASK_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error); overrides logging.level
    #[arg(long, env = "ACEMASK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Print entries as a JSON array of records
    #[arg(long)]
    json: bool,
}

fn init_logging(args: &Args, config: &AclConfig) {
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }
}

fn print_entries(entries: &[Ace], json: bool) -> anyhow::Result<()> {
    if json {
        let records: Vec<AceRecord> = entries.iter().map(AceRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (index, ace) in entries.iter().enumerate() {
            println!("[{}] {}", index, ace);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Logging settings live in the config, so load it first
    let config = load_config(args.config.as_deref()).inspect_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
    })?;

    init_logging(&args, &config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        entries = config.entries.len(),
        "Validating access control entries"
    );

    let entries = config
        .build_entries()
        .inspect_err(|e| error!(error = %e, "Invalid access control entry"))?;

    print_entries(&entries, args.json)?;

    info!(entries = entries.len(), "All entries valid");
    Ok(())
}
