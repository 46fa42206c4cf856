//! High-level concordance engine combining the whole pipeline.

use std::sync::Arc;

use crate::analysis::annotator::{Annotator, RuleAnnotator};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::document::Document;
use crate::error::{ConcordError, Result};
use crate::search::{SearchRequest, SearchResult, context, formatter, matcher};

/// The engine owns a tokenizer and an annotator and exposes the single
/// search entry point.
///
/// The pipeline is pure and synchronous: tokenize → annotate → match →
/// extract → format. A built [`Document`] is immutable, so one engine can
/// serve any number of concurrent searches against it. There is no internal
/// cancellation point; a host embedding the engine cancels by discarding the
/// result.
///
/// # Examples
///
/// ```
/// use concord::search::{ConcordanceEngine, SearchMode, SearchRequest};
///
/// let engine = ConcordanceEngine::new().unwrap();
/// let doc = engine.load("The cat sat on the mat. The cat ran.").unwrap();
///
/// let results = engine
///     .search(&doc, &SearchRequest::new("cat", SearchMode::Word).window(2))
///     .unwrap();
/// assert_eq!(results.len(), 2);
/// ```
pub struct ConcordanceEngine {
    tokenizer: Arc<dyn Tokenizer>,
    annotator: Arc<dyn Annotator>,
}

impl ConcordanceEngine {
    /// Create an engine with the default word tokenizer and rule annotator.
    pub fn new() -> Result<Self> {
        Ok(ConcordanceEngine {
            tokenizer: Arc::new(WordTokenizer::new()),
            annotator: Arc::new(RuleAnnotator::new()),
        })
    }

    /// Create an engine from caller-supplied components.
    pub fn with_components(tokenizer: Arc<dyn Tokenizer>, annotator: Arc<dyn Annotator>) -> Self {
        ConcordanceEngine {
            tokenizer,
            annotator,
        }
    }

    /// Build an immutable document from the source text. One document per
    /// loaded text; reuse it across searches.
    pub fn load(&self, source: &str) -> Result<Document> {
        Document::build(source, self.tokenizer.as_ref(), self.annotator.as_ref())
    }

    /// Run a search against a loaded document.
    ///
    /// Returns the formatted result list; no matches is `Ok` with an empty
    /// list. `InvalidArgument` aborts before any matching work.
    pub fn search(&self, document: &Document, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        validate(request)?;

        let spans = matcher::match_document(
            document,
            request.mode,
            &request.term,
            self.tokenizer.as_ref(),
        )?;
        let records: Vec<SearchResult> = spans
            .iter()
            .map(|span| context::extract(document, span, request.window))
            .collect();

        Ok(formatter::format(records, request.output_mode))
    }

    /// Load the source text and search it in one call.
    pub fn search_text(&self, source: &str, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        // Reject bad arguments before any tokenization work.
        validate(request)?;
        let document = self.load(source)?;
        self.search(&document, request)
    }
}

impl Default for ConcordanceEngine {
    fn default() -> Self {
        Self::new().expect("default engine components should be creatable")
    }
}

impl std::fmt::Debug for ConcordanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcordanceEngine")
            .field("tokenizer", &self.tokenizer.name())
            .field("annotator", &self.annotator.name())
            .finish()
    }
}

fn validate(request: &SearchRequest) -> Result<()> {
    if request.term.trim().is_empty() {
        return Err(ConcordError::invalid_argument(
            "search term must not be empty",
        ));
    }
    if request.window == 0 {
        return Err(ConcordError::invalid_argument(
            "context window must be at least 1",
        ));
    }
    Ok(())
}
