//! Row abstraction and per-file pattern statistics.

use crate::dialect::Dialect;
use crate::tokenizer::Row;
use crate::typing::{classify, ClassifyCtx, TypeTag};
use std::collections::HashMap;

/// Ordered type tags for one row; length equals the row's column count.
pub type TypePattern = Vec<TypeTag>;

/// Apply the classifier cell by cell. Pure; output length equals input
/// length.
pub fn abstract_row(text: &str, row: &Row, dialect: &Dialect) -> TypePattern {
    let ctx = ClassifyCtx {
        quote: dialect.quote,
    };
    row.iter()
        .map(|cell| classify(cell.content(text, dialect).as_ref(), ctx))
        .collect()
}

/// Frequency tables over one candidate's tokenization of one file.
#[derive(Debug, Default, Clone)]
pub struct PatternStats {
    pub pattern_counts: HashMap<TypePattern, usize>,
    pub length_counts: HashMap<usize, usize>,
    pub row_count: usize,
    pub cell_count: usize,
    pub artifact_cells: usize,
}

impl PatternStats {
    pub fn record(&mut self, pattern: TypePattern) {
        self.row_count += 1;
        self.cell_count += pattern.len();
        self.artifact_cells += pattern
            .iter()
            .filter(|t| **t == TypeTag::QuoteArtifact)
            .count();
        *self.length_counts.entry(pattern.len()).or_insert(0) += 1;
        *self.pattern_counts.entry(pattern).or_insert(0) += 1;
    }

    /// Most frequent row length. Exact ties go to the larger length so a
    /// degenerate single-column reading never shadows a genuine table.
    pub fn modal_length(&self) -> usize {
        self.length_counts
            .iter()
            .max_by_key(|(len, count)| (**count, **len))
            .map(|(len, _)| *len)
            .unwrap_or(0)
    }

    /// How many rows have the modal length.
    pub fn modal_length_count(&self) -> usize {
        self.length_counts
            .get(&self.modal_length())
            .copied()
            .unwrap_or(0)
    }

    /// The single most frequent pattern among rows of the modal length, with
    /// its count. Ties break toward the pattern with more informative tags,
    /// then by tag order, so the result never depends on map iteration.
    pub fn dominant_pattern(&self) -> Option<(&TypePattern, usize)> {
        let modal = self.modal_length();
        self.pattern_counts
            .iter()
            .filter(|(p, _)| p.len() == modal)
            .max_by(|(pa, ca), (pb, cb)| {
                ca.cmp(cb)
                    .then_with(|| informative_tags(pa).cmp(&informative_tags(pb)))
                    .then_with(|| pa.cmp(pb))
            })
            .map(|(p, c)| (p, *c))
    }

    pub fn single_column_rows(&self) -> usize {
        self.length_counts.get(&1).copied().unwrap_or(0)
    }
}

fn informative_tags(pattern: &TypePattern) -> usize {
    pattern.iter().filter(|t| t.is_informative()).count()
}
