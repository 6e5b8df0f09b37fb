//! Quote/escape aware row splitter.
//!
//! Tokenization never fails: malformed quoting degrades into a best-effort
//! split, because the detector must be able to score bad hypotheses too.
//! Cells are byte ranges into the input text, not owned copies; the text must
//! outlive every row derived from it.

use crate::dialect::Dialect;
use std::borrow::Cow;

/// One field of one row: a byte range into the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub start: usize,
    pub end: usize,
}

impl Cell {
    /// The raw substring, surrounding quotes and escape characters included.
    pub fn raw<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// The logical value: a surrounding quote pair is stripped and escape
    /// sequences are resolved. Borrows when no rewriting is needed.
    pub fn content<'a>(&self, text: &'a str, dialect: &Dialect) -> Cow<'a, str> {
        let mut raw = self.raw(text);
        if let Some(q) = dialect.quote {
            if raw.len() >= 2 * q.len_utf8() && raw.starts_with(q) && raw.ends_with(q) {
                raw = &raw[q.len_utf8()..raw.len() - q.len_utf8()];
            }
        }
        match dialect.escape {
            Some(esc) if raw.contains(esc) => {
                let mut out = String::with_capacity(raw.len());
                let mut chars = raw.chars();
                while let Some(c) = chars.next() {
                    if c == esc {
                        // a trailing escape with nothing after it is dropped
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                    } else {
                        out.push(c);
                    }
                }
                Cow::Owned(out)
            }
            _ => Cow::Borrowed(raw),
        }
    }
}

pub type Row = Vec<Cell>;

/// Split `text` into rows of cells under one dialect hypothesis.
///
/// State machine: outside a quoted region, the delimiter ends a cell and a
/// line terminator ends a row; the quote character (if any) opens a quoted
/// region in which delimiters and terminators are field content. The escape
/// character makes the following character literal in both states. An
/// unterminated quote closes implicitly at end of text, and a final row
/// without a trailing terminator is still emitted. Blank lines produce no
/// row.
pub fn tokenize(text: &str, dialect: &Dialect) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut cells: Row = Vec::new();
    let mut cell_start = 0usize;
    let mut in_quotes = false;

    let mut iter = text.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if in_quotes {
            if Some(c) == dialect.escape {
                iter.next();
            } else if Some(c) == dialect.quote {
                in_quotes = false;
            }
            continue;
        }
        if Some(c) == dialect.escape {
            iter.next();
        } else if Some(c) == dialect.quote {
            in_quotes = true;
        } else if c == dialect.delimiter {
            cells.push(Cell {
                start: cell_start,
                end: i,
            });
            cell_start = i + c.len_utf8();
        } else if c == '\n' || c == '\r' {
            // \r\n counts as a single terminator
            let mut after_term = i + 1;
            if c == '\r' {
                if let Some(&(j, '\n')) = iter.peek() {
                    iter.next();
                    after_term = j + 1;
                }
            }
            let blank_line = cells.is_empty() && cell_start == i;
            if !blank_line {
                cells.push(Cell {
                    start: cell_start,
                    end: i,
                });
                rows.push(std::mem::take(&mut cells));
            }
            cell_start = after_term;
        }
    }

    let trailing_blank = cells.is_empty() && cell_start == text.len();
    if !trailing_blank {
        cells.push(Cell {
            start: cell_start,
            end: text.len(),
        });
        rows.push(cells);
    }
    rows
}
