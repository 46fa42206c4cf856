//! Word tokenizer implementation.
//!
//! Segmentation follows Unicode word boundary rules (UAX #29) via the
//! `unicode-segmentation` crate. Unlike an index-oriented tokenizer, nothing
//! is filtered: every non-whitespace segment becomes a token, so punctuation
//! marks are tokens of their own. Abbreviation periods are therefore split
//! from the word they follow (`"Dr."` yields `Dr` and `.`), which is the one
//! punctuation policy applied everywhere in the crate.
//!
//! Offsets are character offsets, accumulated segment by segment, so token
//! spans map back onto the source text exactly and the full segment sequence
//! reconstructs the source.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::tokenizer::Tokenizer;
//! use concord::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("The mat. The cat.").unwrap();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["The", "mat", ".", "The", "cat", "."]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries, keeping
/// punctuation as separate tokens.
///
/// Contractions ("don't") and decimal numbers ("3.14") stay single tokens,
/// because UAX #29 does not break inside them.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut char_offset = 0usize;
        let mut position = 0usize;

        for segment in text.split_word_bounds() {
            let segment_chars = segment.chars().count();
            if !segment.chars().all(char::is_whitespace) {
                tokens.push(Token::new(
                    segment,
                    position,
                    char_offset,
                    char_offset + segment_chars,
                ));
                position += 1;
            }
            char_offset += segment_chars;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
