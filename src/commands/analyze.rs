//! `chatlens analyze` command - full parse and analysis of a transcript

use std::path::Path;

use chatlens_core::analytics::{AnalyticsResult, Analyzer, ContactMetrics};
use chatlens_core::error::{ChatlensError, Result};
use chatlens_core::records::escape_quotes;
use chatlens_core::text::Frequency;
use chatlens_core::trace_time;
use chatlens_core::transcript::TranscriptParser;

use crate::cli::input::read_transcript;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Execute the analyze command
pub fn execute(ctx: &CommandContext, input: &Path, strict: bool) -> Result<()> {
    let text = read_transcript(input)?;

    let parsed = TranscriptParser::new(ctx.config.parser.clone()).parse_report(&text)?;
    trace_time!(ctx.start, "parse", messages = parsed.messages.len());

    let analyzer = Analyzer::from_config(&ctx.config);
    let result = if strict {
        analyzer.analyze_strict(&parsed.messages)?
    } else {
        analyzer
            .analyze(&parsed.messages)
            .ok_or(ChatlensError::NoMessagesFound)?
    };
    trace_time!(ctx.start, "analyze");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            output_human(&result, parsed.skipped_lines, ctx.cli.quiet);
        }
        OutputFormat::Records => {
            output_records(&result, parsed.skipped_lines);
        }
    }

    Ok(())
}

fn join_frequencies(items: &[Frequency]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|f| format!("{} ({})", f.item, f.count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn output_human(result: &AnalyticsResult, skipped_lines: usize, quiet: bool) {
    let names: Vec<&str> = result.participants.names().collect();
    let summary = &result.summary;

    println!("Conversation: {}", names.join(" & "));
    println!(
        "Messages: {} on {} days ({} to {})",
        summary.total_messages,
        result.conversation_days,
        summary.first_message.format(TIMESTAMP_FORMAT),
        summary.last_message.format(TIMESTAMP_FORMAT)
    );
    println!(
        "Compatibility: {}/100  Consistency: {}/100",
        result.compatibility_score, result.consistency_score
    );
    println!(
        "Busiest: {:02}:00, {}",
        result.peak_hour, result.peak_day
    );

    let gaps = &result.conversation_gaps;
    if gaps.count > 0 {
        println!(
            "Long silences: {} (longest {} days, average {} days)",
            gaps.count, gaps.longest_days, gaps.average_days
        );
    }

    for contact in &result.contacts {
        println!();
        output_human_contact(contact);
    }

    if !result.red_flags.is_empty() {
        println!();
        println!("Red flags:");
        for flag in &result.red_flags {
            println!(
                "  [{}] {}: \"{}\" x{}",
                flag.severity, flag.category, flag.keyword, flag.count
            );
        }
    }

    if quiet {
        return;
    }
    if !result.participants.ignored.is_empty() {
        println!();
        println!(
            "Not analyzed (more than two participants): {}",
            result.participants.ignored.join(", ")
        );
    }
    if skipped_lines > 0 {
        println!();
        println!("{} lines were not recognized as messages", skipped_lines);
    }
}

fn output_human_contact(c: &ContactMetrics) {
    let style = &c.communication_style;
    println!("{}", c.contact);
    println!(
        "  messages: {} (interest {}%), average {} chars",
        c.message_count, c.interest_level, c.average_message_length
    );
    println!(
        "  average reply: {} min, started {} conversations, {} double texts",
        c.average_response_minutes, c.conversation_starters, c.double_texts
    );
    println!(
        "  late night: {}, early morning: {}, weekend: {}, weekday: {}",
        c.late_night_messages, c.early_morning_messages, c.weekend_messages, c.weekday_messages
    );
    println!(
        "  sentiment: {}/100, energy: {}",
        c.sentiment_score, c.energy_level
    );
    println!(
        "  style: {}% questions, {}% exclamations, {}% all caps",
        style.questions, style.exclamations, style.all_caps
    );
    println!("  top words: {}", join_frequencies(&c.top_words));
    println!("  top emojis: {}", join_frequencies(&c.top_emojis));
}

fn output_records(result: &AnalyticsResult, skipped_lines: usize) {
    let summary = &result.summary;
    let gaps = &result.conversation_gaps;

    println!(
        "H chatlens=1 records=1 mode=analyze messages={} contacts={} skipped={}",
        summary.total_messages,
        result.contacts.len(),
        skipped_lines
    );
    println!(
        "P compatibility={} consistency={} days={} span_days={} peak_hour={} peak_day={} gaps={} longest_gap_days={} average_gap_days={}",
        result.compatibility_score,
        result.consistency_score,
        result.conversation_days,
        summary.span_days,
        result.peak_hour,
        result.peak_day,
        gaps.count,
        gaps.longest_days,
        gaps.average_days
    );

    for c in &result.contacts {
        let name = escape_quotes(&c.contact);
        let style = &c.communication_style;
        println!(
            "C \"{}\" messages={} interest={} avg_length={} response_min={} starters={} double_texts={} late_night={} early_morning={} weekend={} weekday={} sentiment={} energy={} questions={} exclamations={} caps={}",
            name,
            c.message_count,
            c.interest_level,
            c.average_message_length,
            c.average_response_minutes,
            c.conversation_starters,
            c.double_texts,
            c.late_night_messages,
            c.early_morning_messages,
            c.weekend_messages,
            c.weekday_messages,
            c.sentiment_score,
            c.energy_level,
            style.questions,
            style.exclamations,
            style.all_caps
        );
        for word in &c.top_words {
            println!("W \"{}\" \"{}\" {}", name, escape_quotes(&word.item), word.count);
        }
        for emoji in &c.top_emojis {
            println!("E \"{}\" \"{}\" {}", name, emoji.item, emoji.count);
        }
    }

    for flag in &result.red_flags {
        println!(
            "F {} \"{}\" {} {}",
            flag.category,
            escape_quotes(&flag.keyword),
            flag.count,
            flag.severity
        );
    }

    for ignored in &result.participants.ignored {
        println!("I \"{}\"", escape_quotes(ignored));
    }
}
