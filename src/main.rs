//! Chatlens - chat transcript analytics CLI
//!
//! Reads an exported two-person chat, recognizes its messages, and reports
//! activity, timing, content and heuristic relationship metrics.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use chatlens_core::error::{ChatlensError, ExitCode as ChatlensExitCode};
use chatlens_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if argv_format_json => return json_usage_failure(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(ChatlensExitCode::Success as u8),
        Err(e) => report_failure(&cli, &e),
    }
}

/// Print a command error in the requested format and map its exit code
fn report_failure(cli: &Cli, e: &ChatlensError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

/// Report an argument error as a JSON envelope on stderr.
///
/// Help and version requests still print clap's text and exit normally.
fn json_usage_failure(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => ChatlensError::UsageError(err.to_string()),
        _ => ChatlensError::Other(err.to_string()),
    };

    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Whether `--format json` appears on the raw command line.
///
/// Checked before clap runs so that argument errors can honour it.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
