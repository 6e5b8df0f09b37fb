//! Abstract type tags for cell values.
//!
//! `classify` is total and deterministic: every string maps to exactly one
//! tag. Predicates run in a fixed priority order (most specific first) and
//! the first match wins, since the shapes overlap — `42` is also a perfectly
//! good alphanumeric word.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strum_macros::{Display, EnumIter};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum TypeTag {
    Empty,
    Url,
    DateTime,
    Integer,
    Float,
    /// The hypothesis quote character leaked into the cell content — a
    /// strong hint the quoting hypothesis is wrong.
    QuoteArtifact,
    Word,
    Text,
}

impl TypeTag {
    /// Tags that matched a concrete value shape, as opposed to the two
    /// catch-all buckets. The scorer rewards dominant patterns made of
    /// informative tags.
    pub fn is_informative(&self) -> bool {
        !matches!(self, TypeTag::QuoteArtifact | TypeTag::Text)
    }
}

/// Per-candidate classification context. Only the quote character matters:
/// the QuoteArtifact check is relative to the hypothesis under test. With no
/// quote hypothesis, both common quote characters count as artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyCtx {
    pub quote: Option<char>,
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.-]*://|www\.)[^\s]+$").unwrap()
    })
}

// Calendar dates with - or / separators (dotted forms collide with floats),
// optional time part, or a bare clock time.
fn datetime_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:\d{1,4}[-/]\d{1,2}(?:[-/]\d{1,4})?(?:[ T]\d{1,2}:\d{2}(?::\d{2})?)?|\d{1,2}:\d{2}(?::\d{2})?)$",
        )
        .unwrap()
    })
}

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+$").unwrap())
}

fn float_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.\d*|\.\d+|\d+(?:\.\d+)?[eE][+-]?\d+)$").unwrap()
    })
}

// The "elementary" character set of plain word-like cells.
fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9._&@+%()/ -]+$").unwrap())
}

/// Map one cell's logical content to its type tag.
pub fn classify(content: &str, ctx: ClassifyCtx) -> TypeTag {
    if content.is_empty() {
        return TypeTag::Empty;
    }
    if url_re().is_match(content) {
        return TypeTag::Url;
    }
    if datetime_re().is_match(content) {
        return TypeTag::DateTime;
    }
    if integer_re().is_match(content) {
        return TypeTag::Integer;
    }
    if float_re().is_match(content) {
        return TypeTag::Float;
    }
    let leaked = match ctx.quote {
        Some(q) => content.contains(q),
        None => content.contains('"') || content.contains('\''),
    };
    if leaked {
        return TypeTag::QuoteArtifact;
    }
    if word_re().is_match(content) {
        return TypeTag::Word;
    }
    TypeTag::Text
}
