use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod input;

use input::Input;

/// Splits a set of stones into two heaps with the smallest possible
/// weight difference and prints that difference.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (stone count on the first line, weights on the second);
    /// reads stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let Input { stones } = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            input::gather_input(BufReader::new(file))?
        }
        None => input::gather_input(io::stdin().lock())?,
    };

    debug!(count = stones.len(), "input parsed");

    println!("{}", partition_algorithm::min_difference(&stones));

    Ok(())
}
