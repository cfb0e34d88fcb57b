//! `chatlens lexicon` command - print the active lexicon and thresholds

use chatlens_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the lexicon command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        }
        OutputFormat::Human | OutputFormat::Records => {
            print!("{}", ctx.config.to_toml()?);
        }
    }
    Ok(())
}
