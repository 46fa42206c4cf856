//! Command implementations for the concord CLI.

use std::fs;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::search::{ConcordanceEngine, SearchRequest};

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Tokens(tokens_args) => dump_tokens(tokens_args.clone(), &args),
        Command::Entities(entities_args) => dump_entities(entities_args.clone(), &args),
    }
}

/// Run a concordance search over a text file.
fn run_search(args: SearchArgs, cli_args: &ConcordArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading text from: {}", args.text_file.display());
    }

    let source = fs::read_to_string(&args.text_file)?;
    let engine = ConcordanceEngine::new()?;

    let start = Instant::now();
    let document = engine.load(&source)?;
    let request = SearchRequest::new(&args.term, args.mode)
        .output_mode(args.output)
        .window(args.window as usize);
    let results = engine.search(&document, &request)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let report = SearchReport {
        term: args.term,
        mode: args.mode,
        output: args.output,
        window: args.window as usize,
        total: results.len(),
        duration_ms,
        results,
    };
    print_search_report(&report, cli_args)
}

/// Annotate a text file and dump its token sequence.
fn dump_tokens(args: TokensArgs, cli_args: &ConcordArgs) -> Result<()> {
    let source = fs::read_to_string(&args.text_file)?;
    let engine = ConcordanceEngine::new()?;
    let document = engine.load(&source)?;

    print_tokens(document.tokens(), cli_args)
}

/// Annotate a text file and dump its entity spans.
fn dump_entities(args: EntitiesArgs, cli_args: &ConcordArgs) -> Result<()> {
    let source = fs::read_to_string(&args.text_file)?;
    let engine = ConcordanceEngine::new()?;
    let document = engine.load(&source)?;

    let tokens = document.tokens();
    let entities: Vec<EntityEntry> = document
        .entities()
        .iter()
        .map(|span| EntityEntry {
            text: document.slice(
                tokens[span.start].start_offset,
                tokens[span.end - 1].end_offset,
            ),
            label: span.label.clone(),
            start_token: span.start,
            end_token: span.end,
        })
        .collect();

    print_entities(&entities, cli_args)
}
