use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod compare;
mod demo;

use compare::CompareConfig;

/// Environment variable holding the log filter, e.g. `DYNARRAY_LOG=dynarray=debug`.
const LOG_ENV: &str = "DYNARRAY_LOG";

#[derive(Parser)]
#[clap(
    name = "dynarray-bench",
    about = "Walkthrough and timings for the dynamic array",
    version
)]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[clap(about = "Step through every array operation and print the result")]
    Demo {},
    #[clap(about = "Time the dynamic array against Vec on the same workload")]
    Compare {
        /// Number of elements pushed before the other phases
        #[clap(long, env = "DYNARRAY_BENCH_SIZE", default_value_t = 50_000, value_parser = parse_size)]
        size: usize,
        /// Number of strided reads (every 10th index)
        #[clap(long, env = "DYNARRAY_BENCH_ACCESSES", default_value_t = 1_000)]
        accesses: usize,
        #[clap(long)]
        /// Print the report as JSON
        json: bool,
    },
}

fn parse_size(size: &str) -> Result<usize, String> {
    match size.parse::<usize>() {
        Ok(0) => Err("size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn entry(opts: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match opts.command {
        Commands::Demo {} => demo::run(&mut out),
        Commands::Compare {
            size,
            accesses,
            json,
        } => {
            let report = compare::run(&CompareConfig { size, accesses })?;
            if json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                write!(out, "{report}")?;
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    entry(Cli::parse())
}
