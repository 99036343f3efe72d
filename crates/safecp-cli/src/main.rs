//! safecp CLI
//!
//! Merges a source directory tree into a target directory tree. Missing
//! directories are created and missing files copied; files present in both
//! trees must already have identical content or nothing is changed at all.

mod cli;
mod commands;
mod error;

use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run_merge(&cli.source_dir, &cli.target_dir, cli.execute_options(), &mut out)?;
    out.flush()?;
    Ok(())
}
