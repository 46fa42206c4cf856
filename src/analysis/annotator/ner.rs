//! Rule-based named-entity chunker.
//!
//! Candidate spans are maximal runs of contiguous proper-noun (`NNP`) tokens.
//! A single period token inside a run is absorbed when it follows an
//! abbreviated title, so "Dr. Watson" forms one span. Each candidate is
//! labeled by the first matching rule:
//!
//! 1. Last word in the organization-suffix set → `ORGANIZATION`
//! 2. Every word in the location gazetteer → `LOCATION`
//! 3. First word an honorific or a known given name, or the run is preceded
//!    by an honorific → `PERSON`
//! 4. Two or more words → `PERSON`
//! 5. Otherwise the candidate is left unlabeled
//!
//! Spans never overlap and every token belongs to at most one span.

use ahash::AHashSet;
use lazy_static::lazy_static;

use crate::analysis::annotator::pos::HONORIFICS;
use crate::analysis::token::{EntitySpan, Token};

/// Entity label for people.
pub const PERSON: &str = "PERSON";

/// Entity label for places.
pub const LOCATION: &str = "LOCATION";

/// Entity label for organizations.
pub const ORGANIZATION: &str = "ORGANIZATION";

lazy_static! {
    static ref ORG_SUFFIXES: AHashSet<&'static str> = [
        "inc", "corp", "co", "ltd", "llc", "plc", "company", "corporation", "university",
        "institute", "college", "bank", "group", "association", "agency", "committee",
        "ministry", "department",
    ]
    .into_iter()
    .collect();

    static ref LOCATIONS: AHashSet<&'static str> = [
        // cities
        "london", "paris", "tokyo", "berlin", "rome", "madrid", "moscow", "beijing", "vienna",
        "dublin", "oslo", "cairo", "sydney", "boston", "chicago", "seattle", "denver", "austin",
        "amsterdam", "stockholm", "helsinki", "lisbon", "athens", "geneva", "zurich", "york",
        "angeles", "francisco", "orleans", "delhi", "mumbai", "shanghai", "toronto", "montreal",
        // countries and regions
        "england", "scotland", "wales", "ireland", "france", "germany", "japan", "china",
        "russia", "italy", "spain", "egypt", "australia", "india", "canada", "mexico", "brazil",
        "america", "europe", "asia", "africa", "antarctica", "britain", "kingdom", "states",
        "new", "los", "san", "united", "great", "south", "north", "east", "west",
    ]
    .into_iter()
    .collect();

    static ref GIVEN_NAMES: AHashSet<&'static str> = [
        "john", "mary", "james", "alice", "robert", "david", "sarah", "michael", "emma",
        "peter", "anna", "thomas", "jane", "william", "george", "elizabeth", "henry",
        "charles", "margaret", "richard", "paul", "mark", "laura", "susan", "karen", "linda",
        "nancy", "arthur", "alfred", "edward", "lucy", "oliver", "harry", "jack", "sophia",
        "olivia", "daniel", "samuel", "benjamin", "joseph", "frank", "martin", "helen",
        "catherine", "anne", "victoria", "sherlock",
    ]
    .into_iter()
    .collect();
}

/// A deterministic gazetteer-based entity chunker.
#[derive(Clone, Debug, Default)]
pub struct EntityChunker;

impl EntityChunker {
    /// Create a new entity chunker.
    pub fn new() -> Self {
        EntityChunker
    }

    /// Group proper-noun runs into labeled entity spans.
    ///
    /// `tags` must be the POS tags of `tokens`, index for index. The returned
    /// spans are ascending by start position and non-overlapping.
    pub fn chunk(&self, tokens: &[Token], tags: &[String]) -> Vec<EntitySpan> {
        debug_assert_eq!(tokens.len(), tags.len());

        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if tags[i] != "NNP" {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            loop {
                if end < tokens.len() && tags[end] == "NNP" {
                    end += 1;
                } else if end + 1 < tokens.len()
                    && tokens[end].text == "."
                    && tags[end + 1] == "NNP"
                    && is_honorific(&tokens[end - 1])
                {
                    // abbreviation period inside a title, e.g. "Dr. Watson"
                    end += 2;
                } else {
                    break;
                }
            }

            if let Some(label) = classify(tokens, start, end) {
                spans.push(EntitySpan::new(start, end, label));
            }
            i = end;
        }

        spans
    }
}

fn is_honorific(token: &Token) -> bool {
    HONORIFICS.contains(token.text.to_lowercase().as_str())
}

fn classify(tokens: &[Token], start: usize, end: usize) -> Option<&'static str> {
    let words: Vec<String> = tokens[start..end]
        .iter()
        .filter(|t| t.text != ".")
        .map(|t| t.text.to_lowercase())
        .collect();
    if words.is_empty() {
        return None;
    }

    if ORG_SUFFIXES.contains(words.last().map(String::as_str)?) {
        return Some(ORGANIZATION);
    }

    if words.iter().all(|w| LOCATIONS.contains(w.as_str())) {
        return Some(LOCATION);
    }

    let preceded_by_honorific = (start >= 1 && is_honorific(&tokens[start - 1]))
        || (start >= 2 && tokens[start - 1].text == "." && is_honorific(&tokens[start - 2]));
    if HONORIFICS.contains(words[0].as_str())
        || GIVEN_NAMES.contains(words[0].as_str())
        || preceded_by_honorific
    {
        return Some(PERSON);
    }

    if words.len() >= 2 {
        return Some(PERSON);
    }

    None
}
