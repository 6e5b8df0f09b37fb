use crate::error::{SniffError, SniffResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One dialect hypothesis: how a file's rows are delimited.
///
/// Candidates are unique by this triple. `quote` and `escape` may be absent;
/// when present, all three characters must be pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dialect {
    pub delimiter: char,
    pub quote: Option<char>,
    pub escape: Option<char>,
}

impl Dialect {
    pub const fn new(delimiter: char, quote: Option<char>, escape: Option<char>) -> Self {
        Self {
            delimiter,
            quote,
            escape,
        }
    }

    /// Number of distinct characters the dialect reserves. The selector
    /// prefers simpler dialects when scores tie.
    pub fn char_count(&self) -> usize {
        1 + self.quote.is_some() as usize + self.escape.is_some() as usize
    }

    /// Rejects dialects that can never tokenize sensibly: character
    /// collisions, line terminators as structure, alphanumeric quotes.
    pub fn validate(&self) -> SniffResult<()> {
        if matches!(self.delimiter, '\n' | '\r') {
            return Err(SniffError::Config(
                "delimiter must not be a line terminator".to_string(),
            ));
        }
        if Some(self.delimiter) == self.quote {
            return Err(SniffError::Config(format!(
                "delimiter and quote are both {:?}",
                self.delimiter
            )));
        }
        if Some(self.delimiter) == self.escape {
            return Err(SniffError::Config(format!(
                "delimiter and escape are both {:?}",
                self.delimiter
            )));
        }
        if self.quote.is_some() && self.quote == self.escape {
            return Err(SniffError::Config(format!(
                "quote and escape are both {:?}",
                self.quote.unwrap_or_default()
            )));
        }
        if let Some(q) = self.quote {
            if q.is_alphanumeric() {
                return Err(SniffError::Config(format!(
                    "quote character {q:?} is alphanumeric, probably a mistake"
                )));
            }
        }
        Ok(())
    }
}

/// Control characters rendered readably for tables and log lines.
pub fn printable_char(c: char) -> String {
    match c {
        '\t' => "\\t".to_string(),
        ' ' => "<space>".to_string(),
        other => other.to_string(),
    }
}

fn printable_opt(c: Option<char>) -> String {
    match c {
        Some(c) => printable_char(c),
        None => "none".to_string(),
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delim={} quote={} escape={}",
            printable_char(self.delimiter),
            printable_opt(self.quote),
            printable_opt(self.escape)
        )
    }
}
