//! Globebox CLI - replay click-drags on a globe
//!
//! Feeds pointer positions through a drag session and prints the resulting
//! bounding boxes, including ones that wrap across the date line.

mod commands;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::rect::RectArgs;
use commands::replay::ReplayArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "globebox", version, about, long_about = None)]
struct Cli {
    /// INI file with a [bbox] section (epsilon, precision)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the box spanned by dragging from one point to another
    Rect(RectArgs),

    /// Replay a recorded JSON pointer trace
    Replay(ReplayArgs),
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = commands::load_config(cli.config.as_deref())?;
    tracing::debug!(
        epsilon = config.epsilon,
        precision = config.precision,
        "Configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Rect(args) => commands::rect::run(&args, config, &mut stdout),
        Commands::Replay(args) => commands::replay::run(&args, config, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
