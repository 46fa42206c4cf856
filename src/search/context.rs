//! Context-window extraction around matches.
//!
//! Given a match span and a window size, this produces the raw concordance
//! record: up to `window` tokens of left and right context, the matched
//! keyword with its character span, and the collocate (the token immediately
//! following the match span). Clipping at document boundaries is silent.

use crate::document::Document;
use crate::search::{MatchSpan, SearchMode, SearchResult};

/// Extract the concordance record for one match.
///
/// `window` must be at least 1; the engine validates this before matching.
/// The returned record has `count: None` — only the frequency formatter
/// fills it in.
pub fn extract(document: &Document, span: &MatchSpan, window: usize) -> SearchResult {
    let tokens = document.tokens();

    let left_start = span.start_token.saturating_sub(window);
    let left: Vec<String> = tokens[left_start..span.start_token]
        .iter()
        .map(|t| t.text.clone())
        .collect();

    let right_end = (span.end_token + window).min(tokens.len());
    let right: Vec<String> = tokens[span.end_token..right_end]
        .iter()
        .map(|t| t.text.clone())
        .collect();

    let first = &tokens[span.start_token];
    let last = &tokens[span.end_token - 1];
    let keyword = if span.end_token - span.start_token == 1 {
        first.text.clone()
    } else {
        // Multi-token span: recover the exact surface form, separators included.
        document.slice(first.start_offset, last.end_offset)
    };

    let pos_tags: Vec<String> = tokens[span.start_token..span.end_token]
        .iter()
        .map(|t| t.pos.clone())
        .collect();

    let next = tokens.get(span.end_token);
    let entity_label = match span.attribute {
        SearchMode::Ner => document
            .entity_at(span.start_token)
            .map(|s| s.label.clone()),
        _ => first.entity_label.clone(),
    };

    SearchResult {
        left,
        keyword,
        right,
        start: first.start_offset,
        end: last.end_offset,
        pos_tags,
        next_word: next.map(|t| t.text.clone()),
        next_pos: next.map(|t| t.pos.clone()),
        entity_label,
        count: None,
    }
}
