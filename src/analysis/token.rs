//! Token types for text analysis.
//!
//! This module defines the core data structures that flow through the
//! analysis pipeline:
//!
//! - [`Token`] - A single tokenized unit with text and character offsets
//! - [`AnnotatedToken`] - A token enriched with a POS tag and an optional
//!   entity label
//! - [`EntitySpan`] - A contiguous run of tokens forming one named entity
//!
//! Offsets are **character** offsets into the source text, half-open, and
//! monotonically non-decreasing across a token sequence. Concatenating the
//! source slices of all tokens together with the original separators
//! reconstructs the source exactly.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::token::Token;
//!
//! let token = Token::new("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single word-like unit after tokenization.
///
/// # Fields
///
/// - `text` - The token's surface form (never empty)
/// - `position` - Position in the token sequence (0-based)
/// - `start_offset` / `end_offset` - Half-open character offsets in the
///   original text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of the token
    pub text: String,

    /// The position of the token in the token sequence (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text, position, and character offsets.
    pub fn new<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in characters.
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token enriched by the annotator.
///
/// Once annotation completes, `pos` is never empty: unrecognized tokens carry
/// the fallback tag rather than a missing one. `entity_label` is present iff
/// the token lies inside a recognized entity span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// The surface form of the token
    pub text: String,

    /// The position of the token in the token sequence (0-based)
    pub position: usize,

    /// The character offset where this token starts in the original text
    pub start_offset: usize,

    /// The character offset where this token ends in the original text
    pub end_offset: usize,

    /// The part-of-speech tag assigned by the annotator
    pub pos: String,

    /// The named-entity label, if the token participates in an entity span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_label: Option<String>,
}

impl AnnotatedToken {
    /// Enrich a token with a POS tag and an optional entity label.
    pub fn from_token<S: Into<String>>(token: Token, pos: S, entity_label: Option<String>) -> Self {
        AnnotatedToken {
            text: token.text,
            position: token.position,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            pos: pos.into(),
            entity_label,
        }
    }
}

impl fmt::Display for AnnotatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.text, self.pos)
    }
}

/// A contiguous run of tokens recognized as a single named entity.
///
/// The range is half-open over token positions. Spans never overlap, and a
/// token belongs to at most one span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Position of the first token in the span
    pub start: usize,

    /// Position one past the last token in the span
    pub end: usize,

    /// The entity type (e.g. PERSON, LOCATION, ORGANIZATION)
    pub label: String,
}

impl EntitySpan {
    /// Create a new entity span.
    pub fn new<S: Into<String>>(start: usize, end: usize, label: S) -> Self {
        EntitySpan {
            start,
            end,
            label: label.into(),
        }
    }

    /// Number of tokens covered by this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether the span covers the given token position.
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }
}
