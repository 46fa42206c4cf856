//! Invariant tests for the tokenize/annotate/search pipeline.

use concord::document::Document;
use concord::error::Result;
use concord::search::{ConcordanceEngine, OutputMode, SearchMode, SearchRequest};

const SAMPLE: &str = "Dr. Watson walked quickly to London. He said: \"the cat sat, \
the cat ran\". Mary gave Watson 2 cats; the cats slept. The cat ran.";

fn load(text: &str) -> Result<Document> {
    ConcordanceEngine::new()?.load(text)
}

/// Rebuild the source from token spans plus the separators between them.
fn reconstruct(source: &str, document: &Document) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::new();
    let mut cursor = 0;

    for token in document.tokens() {
        out.extend(&chars[cursor..token.start_offset]);
        out.push_str(&token.text);
        cursor = token.end_offset;
    }
    out.extend(&chars[cursor..]);
    out
}

#[test]
fn test_round_trip_reconstruction() -> Result<()> {
    for text in [SAMPLE, "", "   ", "one", "café au lait, naïve", "a.b.c"] {
        let doc = load(text)?;
        assert_eq!(reconstruct(text, &doc), text, "failed for {text:?}");
    }
    Ok(())
}

#[test]
fn test_token_spans_match_source_text() -> Result<()> {
    let doc = load(SAMPLE)?;
    let chars: Vec<char> = SAMPLE.chars().collect();

    for token in doc.tokens() {
        let slice: String = chars[token.start_offset..token.end_offset].iter().collect();
        assert_eq!(slice, token.text);
    }
    Ok(())
}

#[test]
fn test_spans_are_monotonic_and_disjoint() -> Result<()> {
    let doc = load(SAMPLE)?;

    for pair in doc.tokens().windows(2) {
        assert!(pair[0].start_offset < pair[0].end_offset);
        assert!(pair[0].end_offset <= pair[1].start_offset);
    }
    Ok(())
}

#[test]
fn test_annotation_is_total() -> Result<()> {
    let doc = load(SAMPLE)?;

    for token in doc.tokens() {
        assert!(!token.pos.is_empty());
    }
    Ok(())
}

#[test]
fn test_search_is_deterministic() -> Result<()> {
    for output_mode in [
        OutputMode::Kwic,
        OutputMode::Frequency,
        OutputMode::RightSort,
        OutputMode::LeftSort,
        OutputMode::Position,
    ] {
        let request = SearchRequest::new("cat", SearchMode::Word)
            .output_mode(output_mode)
            .window(3);

        let first = ConcordanceEngine::new()?.search_text(SAMPLE, &request)?;
        let second = ConcordanceEngine::new()?.search_text(SAMPLE, &request)?;

        assert_eq!(
            serde_json::to_string(&first)?,
            serde_json::to_string(&second)?,
            "nondeterministic output in {output_mode} mode"
        );
    }
    Ok(())
}

#[test]
fn test_window_bound_holds() -> Result<()> {
    let engine = ConcordanceEngine::new()?;

    for window in 1..=4 {
        let request = SearchRequest::new("cat", SearchMode::Word).window(window);
        for result in engine.search_text(SAMPLE, &request)? {
            assert!(result.left.len() <= window);
            assert!(result.right.len() <= window);
        }
    }
    Ok(())
}

#[test]
fn test_kwic_equals_position() -> Result<()> {
    let engine = ConcordanceEngine::new()?;

    let kwic = engine.search_text(
        SAMPLE,
        &SearchRequest::new("cat", SearchMode::Word).output_mode(OutputMode::Kwic),
    )?;
    let position = engine.search_text(
        SAMPLE,
        &SearchRequest::new("cat", SearchMode::Word).output_mode(OutputMode::Position),
    )?;

    assert_eq!(kwic, position);
    Ok(())
}

#[test]
fn test_frequency_conserves_match_count() -> Result<()> {
    let engine = ConcordanceEngine::new()?;
    let doc = engine.load(SAMPLE)?;

    let raw = engine.search(&doc, &SearchRequest::new("cat", SearchMode::Word).window(2))?;
    let with_collocate = raw.iter().filter(|r| r.next_word.is_some()).count() as u64;

    let aggregated = engine.search(
        &doc,
        &SearchRequest::new("cat", SearchMode::Word)
            .output_mode(OutputMode::Frequency)
            .window(2),
    )?;
    let total: u64 = aggregated.iter().filter_map(|r| r.count).sum();

    assert_eq!(total, with_collocate);
    Ok(())
}

#[test]
fn test_concurrent_searches_share_a_document() -> Result<()> {
    let engine = std::sync::Arc::new(ConcordanceEngine::new()?);
    let doc = std::sync::Arc::new(engine.load(SAMPLE)?);

    let handles: Vec<_> = ["cat", "the", "watson", "DT"]
        .into_iter()
        .map(|term| {
            let engine = engine.clone();
            let doc = doc.clone();
            let mode = if term == "DT" {
                SearchMode::Pos
            } else {
                SearchMode::Word
            };
            std::thread::spawn(move || engine.search(&doc, &SearchRequest::new(term, mode)))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    Ok(())
}
