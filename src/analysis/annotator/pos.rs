//! Rule-based part-of-speech tagger.
//!
//! Tags are assigned by a fixed rule cascade evaluated in order; the first
//! matching rule wins, which makes tagging fully deterministic:
//!
//! 1. Punctuation classes (sentence terminators, commas, brackets, quotes)
//! 2. Numeric patterns (cardinal and ordinal numbers)
//! 3. Closed-class lexicon (determiners, pronouns, prepositions, ...)
//! 4. Capitalization: a capitalized token that is not sentence-initial is a
//!    proper noun
//! 5. Morphological suffix rules (`-ly`, `-ing`, `-ed`, ...)
//! 6. Fallback: [`FALLBACK_TAG`] for word-like tokens, [`SYMBOL_TAG`] for
//!    everything else
//!
//! The tag vocabulary is the Penn Treebank subset: `CD JJ JJR JJS DT VB VBD
//! VBG VBP VBZ MD PRP PRP$ CC IN RB NN NNS NNP SYM . , -LRB- -RRB- `` ''`.

use ahash::{AHashMap, AHashSet};
use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::token::Token;

/// Fallback tag for unrecognized word-like tokens (common noun).
pub const FALLBACK_TAG: &str = "NN";

/// Tag for tokens that match no rule at all.
pub const SYMBOL_TAG: &str = "SYM";

lazy_static! {
    static ref CARDINAL: Regex = Regex::new(r"^\d+$").unwrap();
    static ref ORDINAL: Regex = Regex::new(r"^\d+(st|nd|rd|th)$").unwrap();

    /// Closed-class lexicon. One tag per surface form; words that could take
    /// several tags keep the one their most frequent reading has.
    static ref LEXICON: AHashMap<&'static str, &'static str> = {
        let mut m = AHashMap::new();
        for word in ["the", "a", "an", "this", "that", "these", "those"] {
            m.insert(word, "DT");
        }
        m.insert("is", "VBZ");
        m.insert("are", "VBP");
        m.insert("was", "VBD");
        m.insert("were", "VBD");
        for word in ["be", "being", "been"] {
            m.insert(word, "VB");
        }
        m.insert("have", "VBP");
        m.insert("has", "VBZ");
        m.insert("had", "VBD");
        m.insert("do", "VBP");
        m.insert("does", "VBZ");
        m.insert("did", "VBD");
        for word in [
            "will", "would", "can", "could", "may", "might", "shall", "should", "must",
        ] {
            m.insert(word, "MD");
        }
        for word in [
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        ] {
            m.insert(word, "PRP");
        }
        for word in ["my", "your", "his", "its", "our", "their"] {
            m.insert(word, "PRP$");
        }
        for word in ["and", "or", "but", "yet", "so", "for", "nor"] {
            m.insert(word, "CC");
        }
        for word in [
            "in", "on", "at", "by", "with", "to", "from", "of", "about", "into", "through",
            "during", "before", "after", "above", "below", "up", "down", "out", "off", "over",
            "under", "again", "further", "then", "once",
        ] {
            m.insert(word, "IN");
        }
        for word in [
            "not", "never", "no", "none", "nobody", "nothing", "nowhere", "neither", "very",
            "quite", "rather", "really", "too", "more", "most", "less", "least",
        ] {
            m.insert(word, "RB");
        }
        m
    };

    /// Abbreviated titles whose trailing period does not end a sentence.
    pub(crate) static ref HONORIFICS: AHashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sir", "st", "mt", "capt", "col",
        "gen", "lt", "sgt", "jr", "sr",
    ]
    .into_iter()
    .collect();

    /// Determiners and quantifiers that signal a following plural noun.
    static ref PLURAL_CUES: AHashSet<&'static str> =
        ["the", "these", "those", "many", "few", "several"].into_iter().collect();
}

/// A deterministic rule-based POS tagger.
///
/// Tagging each token looks at most two tokens back (for sentence-boundary
/// and abbreviation handling) and never ahead, so the result is a pure
/// function of the token sequence.
#[derive(Clone, Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new POS tagger.
    pub fn new() -> Self {
        PosTagger
    }

    /// Tag every token in the sequence. Total: every token gets a tag.
    pub fn tag(&self, tokens: &[Token]) -> Vec<String> {
        (0..tokens.len())
            .map(|i| self.tag_one(tokens, i).to_string())
            .collect()
    }

    fn tag_one(&self, tokens: &[Token], i: usize) -> &'static str {
        let text = tokens[i].text.as_str();
        let lower = text.to_lowercase();

        if let Some(tag) = punctuation_tag(tokens, i) {
            return tag;
        }

        if CARDINAL.is_match(text) {
            return "CD";
        }
        if ORDINAL.is_match(&lower) {
            return "JJ";
        }

        if let Some(tag) = LEXICON.get(lower.as_str()).copied() {
            return tag;
        }

        if starts_uppercase(text) && !sentence_initial(tokens, i) {
            return "NNP";
        }

        if let Some(tag) = suffix_tag(tokens, i, &lower) {
            return tag;
        }

        if text.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-') {
            FALLBACK_TAG
        } else {
            SYMBOL_TAG
        }
    }
}

/// Tag single punctuation tokens, or `None` for non-punctuation.
fn punctuation_tag(tokens: &[Token], i: usize) -> Option<&'static str> {
    match tokens[i].text.as_str() {
        "." | "!" | "?" => Some("."),
        "," | ";" | ":" => Some(","),
        "(" | "[" | "{" => Some("-LRB-"),
        ")" | "]" | "}" => Some("-RRB-"),
        "\u{201C}" | "\u{2018}" => Some("``"),
        "\u{201D}" | "\u{2019}" => Some("''"),
        // Straight quotes: closing when attached to the previous token.
        "\"" | "'" | "`" => {
            if i > 0 && tokens[i - 1].end_offset == tokens[i].start_offset {
                Some("''")
            } else {
                Some("``")
            }
        }
        _ => None,
    }
}

fn suffix_tag(tokens: &[Token], i: usize, lower: &str) -> Option<&'static str> {
    let length = lower.chars().count();

    if lower.ends_with("ly") {
        return Some("RB");
    }
    if lower.ends_with("ing") {
        return Some("VBG");
    }
    if lower.ends_with("ed") {
        return Some("VBD");
    }
    if lower.ends_with("er") && length > 3 {
        return Some("JJR");
    }
    if lower.ends_with("est") && length > 4 {
        return Some("JJS");
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && length > 2 {
        let plural = i > 0 && PLURAL_CUES.contains(tokens[i - 1].text.to_lowercase().as_str());
        return Some(if plural { "NNS" } else { "VBZ" });
    }
    if ["tion", "sion", "ment", "ness"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return Some("NN");
    }

    None
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// A token is sentence-initial when it is the first token or follows a
/// sentence terminator. A period after an abbreviated title does not count
/// as a terminator, so "Dr. Watson" keeps its proper noun.
fn sentence_initial(tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    match tokens[i - 1].text.as_str() {
        "!" | "?" => true,
        "." => !(i >= 2 && HONORIFICS.contains(tokens[i - 2].text.to_lowercase().as_str())),
        _ => false,
    }
}
