pub mod engine;

use crate::config::ScoreWeights;
use crate::dialect::Dialect;
use crate::pattern::PatternStats;

/// One dialect hypothesis with its consistency score and the statistics
/// behind it. Lives only for the duration of one detection call.
#[derive(Debug, Clone)]
pub struct ScoredDialect {
    pub dialect: Dialect,
    pub score: f64,
    pub stats: PatternStats,
}

pub struct Scorer {
    pub weights: ScoreWeights,
}

impl Scorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Tokenize the whole file under one hypothesis and score how
    /// consistently it yields regular, well-typed rows.
    pub fn score(&self, text: &str, dialect: &Dialect) -> ScoredDialect {
        engine::score(text, dialect, &self.weights)
    }
}
