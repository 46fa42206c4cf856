//! Concordance search: matching, context extraction, and result formatting.
//!
//! The entry point is [`ConcordanceEngine`], which wires the pipeline
//! together: match → extract → format. Requests are described by
//! [`SearchRequest`]; results come back as plain [`SearchResult`] records
//! that can cross a process or runtime boundary as data.

pub mod context;
pub mod engine;
pub mod formatter;
pub mod matcher;

pub use self::context::extract;
pub use self::engine::ConcordanceEngine;
pub use self::formatter::format;
pub use self::matcher::{MatchSpan, match_document};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConcordError;

/// The token attribute a search runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match against token surface forms.
    Word,
    /// Match against part-of-speech tags.
    Pos,
    /// Match against named-entity labels.
    Ner,
}

impl SearchMode {
    /// The canonical string literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Word => "word",
            SearchMode::Pos => "pos",
            SearchMode::Ner => "ner",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ConcordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(SearchMode::Word),
            "pos" => Ok(SearchMode::Pos),
            "ner" => Ok(SearchMode::Ner),
            other => Err(ConcordError::invalid_argument(format!(
                "unknown input mode: {other} (expected word, pos, or ner)"
            ))),
        }
    }
}

/// The ordering/aggregation applied to raw matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Canonical concordance listing in document order.
    Kwic,
    /// Aggregate matches by collocate with occurrence counts.
    Frequency,
    /// Sort by right context, nearest token first.
    RightSort,
    /// Sort by left context, nearest token first.
    LeftSort,
    /// Explicit alias of [`OutputMode::Kwic`].
    Position,
}

impl OutputMode {
    /// The canonical string literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Kwic => "kwic",
            OutputMode::Frequency => "frequency",
            OutputMode::RightSort => "right_sort",
            OutputMode::LeftSort => "left_sort",
            OutputMode::Position => "position",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ConcordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kwic" => Ok(OutputMode::Kwic),
            "frequency" => Ok(OutputMode::Frequency),
            "right_sort" => Ok(OutputMode::RightSort),
            "left_sort" => Ok(OutputMode::LeftSort),
            "position" => Ok(OutputMode::Position),
            other => Err(ConcordError::invalid_argument(format!(
                "unknown output mode: {other} (expected kwic, frequency, right_sort, left_sort, or position)"
            ))),
        }
    }
}

/// A concordance search request.
///
/// # Examples
///
/// ```
/// use concord::search::{OutputMode, SearchMode, SearchRequest};
///
/// let request = SearchRequest::new("cat", SearchMode::Word)
///     .output_mode(OutputMode::Frequency)
///     .window(3);
///
/// assert_eq!(request.window, 3);
/// ```
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// The search term: a surface form, POS tag, or entity label. Multi-word
    /// terms (or tag sequences) match contiguous token runs.
    pub term: String,
    /// Which token attribute to search over.
    pub mode: SearchMode,
    /// How to order/aggregate the results.
    pub output_mode: OutputMode,
    /// Number of context tokens on each side of a match.
    pub window: usize,
}

impl SearchRequest {
    /// Default context window size.
    pub const DEFAULT_WINDOW: usize = 5;

    /// Create a new request with the default output mode and window.
    pub fn new<S: Into<String>>(term: S, mode: SearchMode) -> Self {
        SearchRequest {
            term: term.into(),
            mode,
            output_mode: OutputMode::Kwic,
            window: Self::DEFAULT_WINDOW,
        }
    }

    /// Set the output mode.
    pub fn output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Set the context window size.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }
}

/// A single concordance result.
///
/// In `frequency` mode each result is an aggregate over one collocate and
/// `count` is present; in every other mode `count` is absent and each result
/// is one match occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Up to `window` tokens before the match, in original order.
    pub left: Vec<String>,
    /// The matched text. For multi-token matches this is the source slice
    /// covering the whole span.
    pub keyword: String,
    /// Up to `window` tokens after the match, in original order.
    pub right: Vec<String>,
    /// Character offset where the matched text starts in the source.
    pub start: usize,
    /// Character offset where the matched text ends in the source.
    pub end: usize,
    /// POS tags of every token in the match span, in order.
    pub pos_tags: Vec<String>,
    /// The collocate: first token of `right`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_word: Option<String>,
    /// POS tag of the collocate, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_pos: Option<String>,
    /// Entity label of the matched span, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_label: Option<String>,
    /// Occurrence count; present only in `frequency` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [SearchMode::Word, SearchMode::Pos, SearchMode::Ner] {
            assert_eq!(mode.as_str().parse::<SearchMode>().unwrap(), mode);
        }
        for mode in [
            OutputMode::Kwic,
            OutputMode::Frequency,
            OutputMode::RightSort,
            OutputMode::LeftSort,
            OutputMode::Position,
        ] {
            assert_eq!(mode.as_str().parse::<OutputMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_invalid_argument() {
        let err = "regex".parse::<SearchMode>().unwrap_err();
        assert!(matches!(err, ConcordError::InvalidArgument(_)));

        let err = "shuffled".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, ConcordError::InvalidArgument(_)));
    }

    #[test]
    fn test_request_defaults() {
        let request = SearchRequest::new("cat", SearchMode::Word);
        assert_eq!(request.output_mode, OutputMode::Kwic);
        assert_eq!(request.window, SearchRequest::DEFAULT_WINDOW);
    }
}
