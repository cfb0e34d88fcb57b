//! Command dispatch logic for chatlens

use std::time::Instant;

use chatlens_core::config::Config;
use chatlens_core::error::Result;
use chatlens_core::trace_time;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    trace_time!(start, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => no_command(),
        Some(Commands::Analyze { input, strict }) => {
            commands::analyze::execute(&ctx, input, *strict)
        }
        Some(Commands::Parse { input }) => commands::parse::execute(&ctx, input),
        Some(Commands::Lexicon) => commands::lexicon::execute(&ctx),
    }?;

    debug!(elapsed = ?start.elapsed(), "command_complete");
    Ok(())
}

fn no_command() -> Result<()> {
    println!("chatlens {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Statistics and heuristics for exported two-person chats.");
    println!();
    println!("Run `chatlens --help` for usage information.");
    Ok(())
}
