//! CLI argument parsing for chatlens
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod input;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use chatlens_core::format::OutputFormat;
use parse::format_parser;

/// Chatlens - statistics and heuristics for exported two-person chats
#[derive(Parser, Debug)]
#[command(name = "chatlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = format_parser(), default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "chatlens_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (lexicons and thresholds)
    #[arg(long, global = true, env = "CHATLENS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an exported chat transcript
    Analyze {
        /// Transcript file, or "-" for stdin
        input: PathBuf,

        /// Fail unless the transcript has exactly two participants
        #[arg(long)]
        strict: bool,
    },

    /// Show the messages recognized in a transcript
    Parse {
        /// Transcript file, or "-" for stdin
        input: PathBuf,
    },

    /// Print the active lexicon and thresholds
    Lexicon,
}
