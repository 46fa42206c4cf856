//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::token::AnnotatedToken;
use crate::cli::args::{ConcordArgs, OutputFormat};
use crate::error::Result;
use crate::search::{OutputMode, SearchMode, SearchResult};

/// Result structure for search operations.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub term: String,
    pub mode: SearchMode,
    pub output: OutputMode,
    pub window: usize,
    pub total: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResult>,
}

/// One recognized entity, with its surface text.
#[derive(Debug, Serialize)]
pub struct EntityEntry {
    pub text: String,
    pub label: String,
    pub start_token: usize,
    pub end_token: usize,
}

/// Print a search report in the requested format.
pub fn print_search_report(report: &SearchReport, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(report, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "{} result(s) for \"{}\" ({} mode, {} output, window {}) in {} ms",
                    report.total, report.term, report.mode, report.output, report.window,
                    report.duration_ms
                );
            }
            for (index, result) in report.results.iter().enumerate() {
                print_result_line(index, result);
            }
            Ok(())
        }
    }
}

fn print_result_line(index: usize, result: &SearchResult) {
    match result.count {
        // Frequency mode: one line per collocate with its count.
        Some(count) => println!(
            "{:>4}. {:>6}x {}",
            index + 1,
            count,
            result.next_word.as_deref().unwrap_or("")
        ),
        None => {
            let badge = result
                .entity_label
                .as_deref()
                .map(|label| format!("  <{label}>"))
                .unwrap_or_default();
            println!(
                "{:>4}. {:>35} [{}] {}{}",
                index + 1,
                result.left.join(" "),
                result.keyword,
                result.right.join(" "),
                badge
            );
        }
    }
}

/// Print the annotated token sequence.
pub fn print_tokens(tokens: &[AnnotatedToken], args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(&tokens, args),
        OutputFormat::Human => {
            for token in tokens {
                println!(
                    "{:>5}  {:<20} {:<6} {:>5}..{:<5} {}",
                    token.position,
                    token.text,
                    token.pos,
                    token.start_offset,
                    token.end_offset,
                    token.entity_label.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
    }
}

/// Print the recognized entity spans.
pub fn print_entities(entities: &[EntityEntry], args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(&entities, args),
        OutputFormat::Human => {
            for entity in entities {
                println!(
                    "{:<14} {:<30} tokens {}..{}",
                    entity.label, entity.text, entity.start_token, entity.end_token
                );
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, args: &ConcordArgs) -> Result<()> {
    let rendered = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
