use super::ScoredDialect;
use crate::config::ScoreWeights;
use crate::dialect::Dialect;
use crate::pattern::{abstract_row, PatternStats};
use crate::tokenizer::tokenize;
use tracing::debug;

/// Score one dialect hypothesis against one file.
///
/// `score = clamp(w_len * len_consistency
///              + w_pat * pattern_purity * typed_share
///              - w_mal * malformed_fraction, 0, 1)`
///
/// where `len_consistency` is the fraction of rows with the modal column
/// count, `pattern_purity` the fraction of all rows carrying the single most
/// frequent pattern among modal-length rows, and `typed_share` the fraction
/// of informative tags inside that dominant pattern. The typed factor keeps
/// an unsplit reading (every row one generic-text blob, trivially "pure")
/// from outscoring a real multi-column reading. `malformed_fraction` counts
/// leaked quote characters plus unsplit rows in an otherwise multi-column
/// file.
pub fn score(text: &str, dialect: &Dialect, weights: &ScoreWeights) -> ScoredDialect {
    let rows = tokenize(text, dialect);
    let mut stats = PatternStats::default();
    for row in &rows {
        stats.record(abstract_row(text, row, dialect));
    }

    let n = stats.row_count;
    if n == 0 {
        return ScoredDialect {
            dialect: *dialect,
            score: 0.0,
            stats,
        };
    }

    let n_f = n as f64;
    let len_consistency = stats.modal_length_count() as f64 / n_f;

    let (pattern_purity, typed_share) = match stats.dominant_pattern() {
        Some((pattern, count)) if !pattern.is_empty() => {
            let typed = pattern.iter().filter(|t| t.is_informative()).count() as f64
                / pattern.len() as f64;
            (count as f64 / n_f, typed)
        }
        _ => (0.0, 0.0),
    };

    let mut malformed = if stats.cell_count > 0 {
        stats.artifact_cells as f64 / stats.cell_count as f64
    } else {
        0.0
    };
    if stats.modal_length() > 1 {
        malformed += stats.single_column_rows() as f64 / n_f;
    }

    let raw = weights.weight_length * len_consistency
        + weights.weight_pattern * pattern_purity * typed_share
        - weights.weight_malformed * malformed;
    let score = raw.clamp(0.0, 1.0);

    debug!(
        dialect = %dialect,
        score,
        len_consistency,
        pattern_purity,
        typed_share,
        malformed,
        rows = n,
        "scored candidate"
    );

    ScoredDialect {
        dialect: *dialect,
        score,
        stats,
    }
}
