//! # cardlist CLI
//!
//! Loads one card list document, confirms it decoded, and prints it back
//! as JSON.
//!
//! Usage:
//!   cardlist [OPTIONS] <PATH>
//!
//! Examples:
//!   cardlist data/2024-topps-series-1.json
//!   cardlist --compact data/2024-topps-series-1.json
//!   cardlist --check-attributes data/2024-topps-series-1.json

use cardlist_model::{check_attributes, encode, load, CardList};
use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIRMATION: &str = "JSON file loaded and validated successfully!";

#[derive(Parser)]
#[command(name = "cardlist")]
#[command(version, about = "Load a card list JSON document and print it back")]
struct Cli {
    /// Path to the card list JSON file
    path: PathBuf,

    /// Print single-line JSON instead of indented
    #[arg(short, long)]
    compact: bool,

    /// Report card attributes missing from, or unused by, the root attribute list
    #[arg(long)]
    check_attributes: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Skip the confirmation line, print only the document
    #[arg(short, long)]
    quiet: bool,
}

/// How a loaded document is written to stdout
#[derive(Debug, Clone, Copy)]
struct DisplayOptions {
    pretty: bool,
    confirm: bool,
}

impl From<&Cli> for DisplayOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            pretty: !cli.compact,
            confirm: !cli.quiet,
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_list(list: &CardList, options: DisplayOptions) -> Result<(), cardlist_model::Error> {
    let text = encode(list, options.pretty)?;
    let write_failed = |e: std::io::Error| cardlist_model::Error::from(e).with_operation("cli::print");

    // a closed stdout (`cardlist big.json | head -1`) is an error, not a panic
    let mut out = std::io::stdout().lock();
    if options.confirm {
        writeln!(out, "{}", CONFIRMATION).map_err(write_failed)?;
    }
    writeln!(out, "{}", text).map_err(write_failed)?;
    out.flush().map_err(write_failed)?;
    Ok(())
}

fn run(cli: &Cli) -> ExitCode {
    let options = DisplayOptions::from(cli);
    debug!(path = %cli.path.display(), ?options, "loading card list");

    let list = match load(&cli.path) {
        Ok(list) => list,
        Err(e) => {
            debug!(error = %e, "load failed");
            eprintln!("Error: {}: {}", e.kind(), e.message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_list(&list, options) {
        eprintln!("Error: {}: {}", e.kind(), e.message());
        return ExitCode::FAILURE;
    }

    if cli.check_attributes {
        let report = check_attributes(&list);
        debug!(findings = report.findings.len(), "attribute check done");
        for finding in &report.findings {
            eprintln!("warning: {}", finding);
        }
        if !report.is_clean() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", Cli::command().render_usage());
                return ExitCode::from(2);
            }
        },
    };

    init_tracing(cli.verbose);
    run(&cli)
}
