//! Annotator implementations for linguistic enrichment.
//!
//! An annotator turns the tokenizer's output into annotated tokens: every
//! token receives a part-of-speech tag, and contiguous runs of tokens may be
//! grouped into named-entity spans. Annotation is total — it never fails for
//! valid token input; unrecognized tokens get the fallback tag and no entity
//! label.
//!
//! The concrete implementation is [`RuleAnnotator`], a deterministic
//! rule-based tagger and chunker. It is caller-owned: construct one per
//! process and pass it by reference into every search, there is no implicit
//! global instance.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::annotator::{Annotator, RuleAnnotator};
//! use concord::analysis::tokenizer::Tokenizer;
//! use concord::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let annotator = RuleAnnotator::new();
//!
//! let tokens = tokenizer.tokenize("The cat sat.").unwrap();
//! let annotation = annotator.annotate(tokens).unwrap();
//!
//! assert_eq!(annotation.tokens[0].pos, "DT");
//! ```

pub mod ner;
pub mod pos;

use crate::analysis::annotator::ner::EntityChunker;
use crate::analysis::annotator::pos::PosTagger;
use crate::analysis::token::{AnnotatedToken, EntitySpan, Token};
use crate::error::Result;

/// The result of annotating a token sequence: the enriched tokens plus the
/// entity-span table. Entity spans are ascending and non-overlapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    /// The annotated tokens, in original order.
    pub tokens: Vec<AnnotatedToken>,
    /// Recognized entity spans, ascending by start position.
    pub entities: Vec<EntitySpan>,
}

/// Trait for annotators that enrich tokens with linguistic labels.
///
/// Implementations must be deterministic: identical token input always yields
/// identical annotation output.
pub trait Annotator: Send + Sync {
    /// Annotate the given token sequence.
    fn annotate(&self, tokens: Vec<Token>) -> Result<Annotation>;

    /// Get the name of this annotator.
    fn name(&self) -> &'static str;
}

/// A deterministic rule-based annotator.
///
/// POS tagging uses a fixed rule cascade over a short window of surrounding
/// surface forms (see [`pos::PosTagger`]); entity recognition groups runs of
/// proper-noun tokens and labels them from small gazetteers (see
/// [`ner::EntityChunker`]).
#[derive(Clone, Debug, Default)]
pub struct RuleAnnotator {
    tagger: PosTagger,
    chunker: EntityChunker,
}

impl RuleAnnotator {
    /// Create a new rule-based annotator.
    pub fn new() -> Self {
        RuleAnnotator {
            tagger: PosTagger::new(),
            chunker: EntityChunker::new(),
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, tokens: Vec<Token>) -> Result<Annotation> {
        let tags = self.tagger.tag(&tokens);
        let entities = self.chunker.chunk(&tokens, &tags);

        let mut next_span = 0usize;
        let annotated = tokens
            .into_iter()
            .zip(tags)
            .map(|(token, pos)| {
                while next_span < entities.len() && entities[next_span].end <= token.position {
                    next_span += 1;
                }
                let label = entities
                    .get(next_span)
                    .filter(|span| span.contains(token.position))
                    .map(|span| span.label.clone());
                AnnotatedToken::from_token(token, pos, label)
            })
            .collect();

        Ok(Annotation {
            tokens: annotated,
            entities,
        })
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}
