//! # Concord
//!
//! A KWIC (Keyword-In-Context) concordance search engine for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Offset-preserving word tokenization (UAX #29 word boundaries)
//! - Deterministic rule-based part-of-speech tagging
//! - Named-entity recognition over contiguous token spans
//! - Keyword search by surface form, POS tag, or entity label
//! - Configurable left/right context windows
//! - Concordance orderings: document order, left/right context sort,
//!   collocation frequency
//!
//! ## Example
//!
//! ```
//! use concord::search::{ConcordanceEngine, SearchMode, SearchRequest};
//!
//! let engine = ConcordanceEngine::new().unwrap();
//! let doc = engine.load("The cat sat on the mat.").unwrap();
//! let request = SearchRequest::new("cat", SearchMode::Word).window(2);
//! let results = engine.search(&doc, &request).unwrap();
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].keyword, "cat");
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
