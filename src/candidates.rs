//! Dialect hypothesis enumeration.

use crate::config::GeneratorParams;
use crate::dialect::Dialect;
use std::collections::HashMap;
use tracing::trace;

const QUOTE_CHARS: [char; 2] = ['"', '\''];
const ESCAPE_CHAR: char = '\\';

/// Enumerate dialect hypotheses for one file.
///
/// Delimiters are the configured floor set (always, in its given order —
/// messy files may under-use the true delimiter) followed by observed
/// punctuation above the frequency threshold, ordered by descending
/// frequency with codepoint as the tiebreak. Quote characters are offered
/// only when they occur in the text; likewise the escape character. The
/// cross product is filtered through `Dialect::validate`, so colliding
/// combinations never appear. Output order is fully deterministic and puts
/// the bare common dialects first, which is what makes the selector's
/// tie-breaking reproducible.
pub fn generate(text: &str, params: &GeneratorParams) -> Vec<Dialect> {
    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        if is_delimiter_shaped(c) {
            *freq.entry(c).or_insert(0) += 1;
        }
    }

    let mut delimiters: Vec<char> = params.floor_delimiters.chars().collect();
    let mut extras: Vec<(char, usize)> = freq
        .iter()
        .filter(|(c, n)| !delimiters.contains(*c) && **n >= params.min_delim_frequency)
        .map(|(c, n)| (*c, *n))
        .collect();
    extras.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    delimiters.extend(extras.into_iter().map(|(c, _)| c));

    let mut quotes: Vec<Option<char>> = vec![None];
    for q in QUOTE_CHARS {
        if text.contains(q) {
            quotes.push(Some(q));
        }
    }
    let mut escapes: Vec<Option<char>> = vec![None];
    if text.contains(ESCAPE_CHAR) {
        escapes.push(Some(ESCAPE_CHAR));
    }

    let mut out = Vec::new();
    for &d in &delimiters {
        for &q in &quotes {
            for &e in &escapes {
                if out.len() >= params.max_candidates {
                    trace!(count = out.len(), "candidate cap reached");
                    return out;
                }
                let cand = Dialect::new(d, q, e);
                if cand.validate().is_ok() {
                    out.push(cand);
                }
            }
        }
    }
    trace!(count = out.len(), "generated candidates");
    out
}

// Delimiters come from punctuation and blank separators; quote, escape and
// terminator characters play a different structural role and are excluded.
fn is_delimiter_shaped(c: char) -> bool {
    if matches!(c, '\n' | '\r') || c == ESCAPE_CHAR || QUOTE_CHARS.contains(&c) {
        return false;
    }
    c == '\t' || c == ' ' || c.is_ascii_punctuation()
}
