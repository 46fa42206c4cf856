//! Keyword matching over document token attributes.
//!
//! A match is a half-open token range. Word and POS matches cover exactly the
//! tokens the term sequence matched; entity matches cover the whole entity
//! span and are reported once per span, anchored at its first token.

use crate::analysis::tokenizer::Tokenizer;
use crate::document::Document;
use crate::error::Result;
use crate::search::SearchMode;

/// A single keyword occurrence: a half-open token range plus the attribute
/// the match came from. Ephemeral, consumed by the context extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    /// Position of the first matched token.
    pub start_token: usize,
    /// Position one past the last matched token.
    pub end_token: usize,
    /// The attribute the match was found on.
    pub attribute: SearchMode,
}

/// Find all occurrences of `term` in the document, ascending by start token.
///
/// - `word`: case-insensitive match against surface forms. A multi-word term
///   is tokenized with the same policy as the document and matched as a
///   contiguous token sequence.
/// - `pos`: case-insensitive match against POS tags; a whitespace-separated
///   term matches a contiguous tag sequence.
/// - `ner`: case-insensitive match against entity-span labels; tokens without
///   an entity label never match.
///
/// No matches is success with an empty list. Term validation (non-empty)
/// happens in the engine before any tokenization.
pub fn match_document(
    document: &Document,
    mode: SearchMode,
    term: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<MatchSpan>> {
    match mode {
        SearchMode::Word => {
            let sequence: Vec<String> = tokenizer
                .tokenize(term)?
                .into_iter()
                .map(|t| t.text.to_lowercase())
                .collect();
            Ok(match_word_sequence(document, &sequence))
        }
        SearchMode::Pos => {
            let sequence: Vec<String> = term
                .split_whitespace()
                .map(|tag| tag.to_uppercase())
                .collect();
            Ok(match_tag_sequence(document, &sequence))
        }
        SearchMode::Ner => Ok(document
            .entities()
            .iter()
            .filter(|span| span.label.eq_ignore_ascii_case(term))
            .map(|span| MatchSpan {
                start_token: span.start,
                end_token: span.end,
                attribute: SearchMode::Ner,
            })
            .collect()),
    }
}

fn match_word_sequence(document: &Document, sequence: &[String]) -> Vec<MatchSpan> {
    let tokens = document.tokens();
    if sequence.is_empty() || tokens.len() < sequence.len() {
        return Vec::new();
    }

    (0..=tokens.len() - sequence.len())
        .filter(|&i| {
            sequence
                .iter()
                .enumerate()
                .all(|(j, expected)| tokens[i + j].text.to_lowercase() == *expected)
        })
        .map(|i| MatchSpan {
            start_token: i,
            end_token: i + sequence.len(),
            attribute: SearchMode::Word,
        })
        .collect()
}

fn match_tag_sequence(document: &Document, sequence: &[String]) -> Vec<MatchSpan> {
    let tokens = document.tokens();
    if sequence.is_empty() || tokens.len() < sequence.len() {
        return Vec::new();
    }

    (0..=tokens.len() - sequence.len())
        .filter(|&i| {
            sequence
                .iter()
                .enumerate()
                .all(|(j, expected)| tokens[i + j].pos.eq_ignore_ascii_case(expected))
        })
        .map(|i| MatchSpan {
            start_token: i,
            end_token: i + sequence.len(),
            attribute: SearchMode::Pos,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::annotator::RuleAnnotator;
    use crate::analysis::tokenizer::word::WordTokenizer;

    fn build(text: &str) -> (Document, WordTokenizer) {
        let tokenizer = WordTokenizer::new();
        let doc = Document::build(text, &tokenizer, &RuleAnnotator::new()).unwrap();
        (doc, tokenizer)
    }

    #[test]
    fn test_word_match_is_case_insensitive() {
        let (doc, tokenizer) = build("The cat sat. The CAT ran.");
        let spans = match_document(&doc, SearchMode::Word, "cat", &tokenizer).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start_token, 1);
        assert_eq!(spans[1].start_token, 5);
        assert!(spans[0].start_token < spans[1].start_token);
    }

    #[test]
    fn test_multi_word_term() {
        let (doc, tokenizer) = build("The black cat and the black dog.");
        let spans = match_document(&doc, SearchMode::Word, "the black", &tokenizer).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].end_token - spans[0].start_token, 2);
    }

    #[test]
    fn test_pos_match() {
        let (doc, tokenizer) = build("The cat sat on the mat.");
        let spans = match_document(&doc, SearchMode::Pos, "dt", &tokenizer).unwrap();

        // "The" and "the"
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_pos_tag_sequence() {
        let (doc, tokenizer) = build("The cat sat on the mat.");
        let spans = match_document(&doc, SearchMode::Pos, "DT NN", &tokenizer).unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start_token, 0);
        assert_eq!(spans[0].end_token, 2);
    }

    #[test]
    fn test_ner_match_anchored_at_span() {
        let (doc, tokenizer) = build("I saw Sherlock Holmes in London.");
        let spans = match_document(&doc, SearchMode::Ner, "person", &tokenizer).unwrap();

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_token, 2);
        assert_eq!(spans[0].end_token, 4);
    }

    #[test]
    fn test_no_match_is_empty() {
        let (doc, tokenizer) = build("The cat sat.");
        let spans = match_document(&doc, SearchMode::Word, "dog", &tokenizer).unwrap();
        assert!(spans.is_empty());
    }
}
