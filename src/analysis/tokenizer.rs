//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline, responsible for splitting
//! input text into word-like units while preserving exact character offsets.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries, punctuation kept as
//!   separate tokens
//!
//! # Examples
//!
//! ```
//! use concord::analysis::tokenizer::Tokenizer;
//! use concord::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello world").unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod word;

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Implementations must be `Send + Sync` so a single tokenizer instance can
/// serve concurrent searches, and must uphold the offset invariants of
/// [`Token`]: half-open character offsets, non-overlapping, monotonically
/// non-decreasing across the sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered token sequence.
    ///
    /// Empty input produces an empty sequence, not an error.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}
