//! ndrand CLI - Standard-Normal Tensor Sampling
//!
//! Command-line front end for `ndrand_core`.
//!
//! # Commands
//!
//! - `ndrand sample [DIMS...]` - Print a scalar (no dims) or an array of standard-normal values
//! - `ndrand stats --samples <N>` - Report empirical moments of the generator
//!
//! # Configuration
//!
//! Settings come from, in increasing priority: defaults, `--config` TOML file,
//! `NDRAND_*` environment variables, command-line flags. `RUST_LOG` overrides
//! the resolved log filter.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Standard-normal tensor sampling CLI
#[derive(Parser)]
#[command(name = "ndrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print standard-normal values in the given shape
    Sample {
        /// Dimension sizes, outermost first; none prints a single value
        #[arg(allow_negative_numbers = true)]
        dims: Vec<String>,

        /// Decimal places (overrides configuration)
        #[arg(short, long)]
        precision: Option<usize>,

        /// Print the whole array on one line
        #[arg(long)]
        compact: bool,
    },

    /// Draw samples and report mean, variance, min and max
    Stats {
        /// Number of samples to draw
        #[arg(short, long, default_value = "10000")]
        samples: usize,

        /// Decimal places (overrides configuration)
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        precision = config.precision,
        pretty = config.pretty,
        "Configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Sample {
            dims,
            precision,
            compact,
        } => {
            let precision = resolve_precision(precision, config.precision)?;
            commands::sample::run(&mut stdout, &dims, precision, config.pretty && !compact)
        }
        Commands::Stats { samples, precision } => {
            let precision = resolve_precision(precision, config.precision)?;
            commands::stats::run(&mut stdout, samples, precision).map(|_| ())
        }
    }
}

fn resolve_precision(flag: Option<usize>, configured: usize) -> Result<usize> {
    match flag {
        Some(p) if p > config::MAX_PRECISION => Err(CliError::InvalidArgument(format!(
            "precision {} exceeds {}",
            p,
            config::MAX_PRECISION
        ))),
        Some(p) => Ok(p),
        None => Ok(configured),
    }
}
