//! Public detection surface consumed by harnesses: `detect` and `parse`,
//! plus the ranked variant used for diagnostics.

use crate::config::DetectorConfig;
use crate::dialect::Dialect;
use crate::scorer::ScoredDialect;
use crate::selector;
use crate::tokenizer::{self, Row};
use serde::{Deserialize, Serialize};

/// Outcome of one detection run over one file's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub dialect: Dialect,
    pub score: f64,
    pub row_count: usize,
    pub modal_column_count: usize,
    /// True when no hypothesis scored above zero. The dialect is then the
    /// first candidate in generation order, not an informed choice; callers
    /// must check this rather than expecting an error path.
    pub low_confidence: bool,
}

/// Detect the dialect of already-decoded text with default configuration.
/// Deterministic: the same text always yields the same result. Empty text
/// yields `row_count = 0`, `score = 0`, low confidence.
pub fn detect(text: &str) -> DetectionResult {
    detect_with_config(text, &DetectorConfig::default())
}

pub fn detect_with_config(text: &str, config: &DetectorConfig) -> DetectionResult {
    let ranked = selector::rank(text, config);
    match selector::select(&ranked) {
        Some(sel) => DetectionResult {
            dialect: sel.winner.dialect,
            score: sel.winner.score,
            row_count: sel.winner.stats.row_count,
            modal_column_count: sel.winner.stats.modal_length(),
            low_confidence: sel.low_confidence,
        },
        // only reachable with an empty floor set and no observed punctuation
        None => DetectionResult {
            dialect: Dialect::new(',', None, None),
            score: 0.0,
            row_count: 0,
            modal_column_count: 0,
            low_confidence: true,
        },
    }
}

/// Every scored hypothesis in generation order, for diagnostics.
pub fn detect_ranked(text: &str, config: &DetectorConfig) -> Vec<ScoredDialect> {
    selector::rank(text, config)
}

/// Re-tokenize under a caller-supplied (e.g. previously detected) dialect.
pub fn parse(text: &str, dialect: &Dialect) -> Vec<Row> {
    tokenizer::tokenize(text, dialect)
}
