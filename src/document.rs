//! Immutable annotated documents.
//!
//! A [`Document`] is the result of running the tokenizer and annotator over
//! one source text: the text itself, the ordered annotated token sequence,
//! and the recognized entity spans. It is built once per loaded text and is
//! read-only afterwards, so any number of searches can run against it
//! concurrently.

use crate::analysis::annotator::Annotator;
use crate::analysis::token::{AnnotatedToken, EntitySpan};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// An immutable, fully annotated source text.
#[derive(Clone, Debug)]
pub struct Document {
    /// The original source text.
    source: String,
    /// Annotated tokens, ascending by position.
    tokens: Vec<AnnotatedToken>,
    /// Entity spans, ascending by start position, non-overlapping.
    entities: Vec<EntitySpan>,
}

impl Document {
    /// Build a document by tokenizing and annotating the source text.
    ///
    /// Empty input produces an empty document, not an error.
    pub fn build(
        source: &str,
        tokenizer: &dyn Tokenizer,
        annotator: &dyn Annotator,
    ) -> Result<Document> {
        let tokens = tokenizer.tokenize(source)?;
        let annotation = annotator.annotate(tokens)?;

        Ok(Document {
            source: source.to_string(),
            tokens: annotation.tokens,
            entities: annotation.entities,
        })
    }

    /// Get the original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the annotated token sequence.
    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Get the recognized entity spans.
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Number of tokens in the document.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the document contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get the entity span covering the given token position, if any.
    pub fn entity_at(&self, position: usize) -> Option<&EntitySpan> {
        // Spans are sorted and non-overlapping.
        let idx = self
            .entities
            .partition_point(|span| span.end <= position);
        self.entities
            .get(idx)
            .filter(|span| span.contains(position))
    }

    /// Slice the source text by character offsets.
    ///
    /// Used to recover the exact surface form of a multi-token span,
    /// including its original separators.
    pub fn slice(&self, start_char: usize, end_char: usize) -> String {
        self.source
            .chars()
            .skip(start_char)
            .take(end_char.saturating_sub(start_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::annotator::RuleAnnotator;
    use crate::analysis::tokenizer::word::WordTokenizer;

    fn build(text: &str) -> Document {
        Document::build(text, &WordTokenizer::new(), &RuleAnnotator::new()).unwrap()
    }

    #[test]
    fn test_build_document() {
        let doc = build("The cat sat.");

        assert_eq!(doc.len(), 4);
        assert_eq!(doc.source(), "The cat sat.");
        assert_eq!(doc.tokens()[0].text, "The");
        assert_eq!(doc.tokens()[0].pos, "DT");
    }

    #[test]
    fn test_empty_document() {
        let doc = build("");
        assert!(doc.is_empty());
        assert!(doc.entities().is_empty());
    }

    #[test]
    fn test_entity_at() {
        let doc = build("I saw Sherlock Holmes in London.");

        let span = doc.entity_at(2).expect("Sherlock should be in a span");
        assert_eq!(span.label, "PERSON");
        assert!(doc.entity_at(0).is_none());
    }

    #[test]
    fn test_slice_by_char_offsets() {
        let doc = build("café au lait");
        assert_eq!(doc.slice(5, 7), "au");
        assert_eq!(doc.slice(0, 4), "café");
    }
}
