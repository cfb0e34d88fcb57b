//! `chatlens parse` command - show recognized messages

use std::path::Path;

use chatlens_core::error::Result;
use chatlens_core::records::{escape_quotes, single_line};
use chatlens_core::trace_time;
use chatlens_core::transcript::{ParsedTranscript, TranscriptParser};

use crate::cli::input::read_transcript;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Execute the parse command
pub fn execute(ctx: &CommandContext, input: &Path) -> Result<()> {
    let text = read_transcript(input)?;
    let parsed = TranscriptParser::new(ctx.config.parser.clone()).parse_report(&text)?;
    trace_time!(ctx.start, "parse", messages = parsed.messages.len());

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        OutputFormat::Human => output_human(&parsed, ctx.cli.quiet),
        OutputFormat::Records => output_records(&parsed),
    }

    Ok(())
}

fn output_human(parsed: &ParsedTranscript, quiet: bool) {
    for m in &parsed.messages {
        println!(
            "{}  {}: {}",
            m.timestamp.format(TIMESTAMP_FORMAT),
            m.contact,
            m.text
        );
    }
    if !quiet {
        println!();
        println!(
            "{} messages, {} lines skipped",
            parsed.messages.len(),
            parsed.skipped_lines
        );
    }
}

fn output_records(parsed: &ParsedTranscript) {
    println!(
        "H chatlens=1 records=1 mode=parse messages={} contacts={} skipped={}",
        parsed.messages.len(),
        parsed.messages.contacts().len(),
        parsed.skipped_lines
    );
    for m in &parsed.messages {
        println!(
            "M {} \"{}\" \"{}\"",
            m.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            escape_quotes(&m.contact),
            single_line(&m.text)
        );
    }
}
