//! # lws-validate CLI entry point
//!
//! Reads one JSON document from stdin, checks it, prints the report to
//! stdout and exits 0 on success or 1 on the first failure. Logging goes to
//! stderr so stdout carries only report lines.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validate light-wallet-server outputs or transactions read from stdin.
///
/// A document with an `outputs` array has every `tx_pub_key` checked for
/// 64 hex characters. A document with a `transactions` array has every record
/// checked for a `spent_outputs` collection.
#[derive(Parser, Debug, Default)]
#[command(name = "lws-validate", version, about, long_about = None)]
struct Cli {
    /// Log to stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Anything else on the command line. The document always comes from stdin.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    let (cli, rejected) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            kind => (Cli::default(), Some(kind)),
        },
    };
    init_tracing(cli.verbose);

    if let Some(kind) = rejected {
        tracing::warn!(?kind, "could not parse arguments; validating stdin anyway");
    }
    if !cli.ignored.is_empty() {
        tracing::warn!(args = ?cli.ignored, "ignoring arguments");
    }

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            // stdout may be the thing that failed; nothing more to do then.
            let _ = writeln!(io::stdout(), "Validation Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<u8> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("failed to read standard input")?;
    tracing::debug!(bytes = input.len(), "read document");

    let report = lws_validate_core::validate_bytes(&input);

    let mut out = io::stdout().lock();
    for line in report.lines() {
        writeln!(out, "{line}").context("failed to write report")?;
    }
    out.flush().context("failed to write report")?;

    Ok(report.exit_code())
}
