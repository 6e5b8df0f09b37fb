//! Candidate ranking and winner selection.

use crate::candidates;
use crate::config::DetectorConfig;
use crate::scorer::{ScoredDialect, Scorer};
use rayon::prelude::*;

/// Score every candidate, returned in generation order.
///
/// Candidates share no mutable state, so the scan runs on the rayon pool;
/// `collect` restores generation order, so parallelism cannot change which
/// candidate wins a tie.
pub fn rank(text: &str, config: &DetectorConfig) -> Vec<ScoredDialect> {
    let cands = candidates::generate(text, &config.generator);
    let scorer = Scorer::new(config.weights.clone());
    cands.par_iter().map(|d| scorer.score(text, d)).collect()
}

pub struct Selection {
    pub winner: ScoredDialect,
    /// True when every candidate scored zero (empty or hopeless input); the
    /// winner is then just the first candidate in generation order.
    pub low_confidence: bool,
}

/// Pick the maximizer. Tie-breaks, in order: fewer distinct dialect
/// characters, then earlier generation order. `None` only when the ranked
/// list is empty.
pub fn select(ranked: &[ScoredDialect]) -> Option<Selection> {
    let mut best: Option<&ScoredDialect> = None;
    for cand in ranked {
        let better = match best {
            None => true,
            Some(b) => {
                cand.score > b.score
                    || (cand.score == b.score
                        && cand.dialect.char_count() < b.dialect.char_count())
            }
        };
        if better {
            best = Some(cand);
        }
    }
    let winner = best?.clone();
    let low_confidence = ranked.iter().all(|c| c.score == 0.0);
    Some(Selection {
        winner,
        low_confidence,
    })
}
