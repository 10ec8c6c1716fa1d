//! CSV extraction: pull-based row parser, bulk and streaming modes.
//!
//! The row parser is deliberately relaxed so malformed input degrades instead
//! of failing:
//!
//! - a double-quoted field may contain commas and newlines; an embedded
//!   double quote is written as two consecutive double quotes
//! - whitespace around unquoted fields is insignificant and trimmed at parse
//!   time; whitespace inside a quoted field is preserved
//! - a stray quote inside an unquoted field is kept literally
//! - rows with inconsistent column counts are kept as-is; missing cells are
//!   simply absent
//! - blank lines are skipped and a leading UTF-8 BOM is ignored
//!
//! Bulk extraction collects the streaming iterator, so the two modes agree on
//! every input by construction.
use crate::error::Result;
use crate::stream::CancellationToken;
use crate::types::ExtractionOptions;
use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

/// Pull-based CSV row iterator.
///
/// Yields one row per call as an ordered list of cells. Quoted cells keep
/// their interior whitespace; unquoted cells arrive trimmed.
pub struct CsvRows<'a> {
    chars: Peekable<Chars<'a>>,
    done: bool,
}

impl<'a> CsvRows<'a> {
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            chars: text.chars().peekable(),
            done: text.is_empty(),
        }
    }

    /// Read a single row, or `None` at end of input. Blank lines are not
    /// skipped here; `next()` filters them.
    fn read_row(&mut self) -> Option<Vec<String>> {
        self.chars.peek()?;

        let mut row = Vec::new();
        loop {
            let (cell, terminator) = self.read_cell();
            row.push(cell);
            match terminator {
                Terminator::Comma => continue,
                Terminator::Newline | Terminator::End => return Some(row),
            }
        }
    }

    fn read_cell(&mut self) -> (String, Terminator) {
        // Leading whitespace before a field is insignificant.
        while matches!(self.chars.peek(), Some(&' ') | Some(&'\t')) {
            self.chars.next();
        }

        if self.chars.peek() == Some(&'"') {
            self.chars.next();
            self.read_quoted_cell()
        } else {
            self.read_unquoted_cell()
        }
    }

    fn read_quoted_cell(&mut self) -> (String, Terminator) {
        let mut cell = String::new();
        loop {
            match self.chars.next() {
                Some('"') => {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        cell.push('"');
                        continue;
                    }
                    // Closing quote: consume up to the delimiter, tolerating
                    // trailing junk after the quote.
                    loop {
                        match self.chars.next() {
                            Some(',') => return (cell, Terminator::Comma),
                            Some('\n') => return (cell, Terminator::Newline),
                            Some('\r') => {
                                self.eat_lf();
                                return (cell, Terminator::Newline);
                            }
                            Some(' ') | Some('\t') => continue,
                            Some(other) => cell.push(other),
                            None => return (cell, Terminator::End),
                        }
                    }
                }
                Some(ch) => cell.push(ch),
                // Unterminated quote: keep what we have.
                None => return (cell, Terminator::End),
            }
        }
    }

    fn read_unquoted_cell(&mut self) -> (String, Terminator) {
        let mut cell = String::new();
        let terminator = loop {
            match self.chars.next() {
                Some(',') => break Terminator::Comma,
                Some('\n') => break Terminator::Newline,
                Some('\r') => {
                    self.eat_lf();
                    break Terminator::Newline;
                }
                Some(ch) => cell.push(ch),
                None => break Terminator::End,
            }
        };
        (cell.trim_end().to_string(), terminator)
    }

    fn eat_lf(&mut self) {
        if self.chars.peek() == Some(&'\n') {
            self.chars.next();
        }
    }
}

enum Terminator {
    Comma,
    Newline,
    End,
}

impl Iterator for CsvRows<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.read_row() {
                Some(row) => {
                    // A blank line parses as a single empty cell.
                    if row.len() == 1 && row[0].is_empty() {
                        continue;
                    }
                    return Some(row);
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

/// Split a single CSV line into trimmed cells with basic quote handling.
///
/// Used for column-count discovery and header listing; unlike [`CsvRows`]
/// it never crosses a line boundary.
pub fn split_csv_line(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

/// Streaming CSV extraction: a finite, lazily produced string sequence.
///
/// The first row is handled specially: when `csv_has_header` is set it is
/// discarded and never yielded from. With `csv_column_index` only that cell
/// of each row is considered (absent cells select nothing); otherwise every
/// cell is considered. Cells are trimmed and empty ones dropped.
///
/// A cancellation token, if attached, is polled between yielded values; once
/// cancelled the stream produces nothing further.
pub struct CsvStream<'a> {
    rows: CsvRows<'a>,
    has_header: bool,
    column: Option<usize>,
    first_row: bool,
    pending: VecDeque<String>,
    cancel: Option<CancellationToken>,
}

impl<'a> CsvStream<'a> {
    pub fn new(text: &'a str, options: &ExtractionOptions) -> Self {
        let trimmed_empty = text.trim().is_empty();
        let mut rows = CsvRows::new(text);
        if trimmed_empty {
            rows.done = true;
        }
        Self {
            rows,
            has_header: options.csv_has_header,
            column: options.csv_column_index,
            first_row: true,
            pending: VecDeque::new(),
            cancel: None,
        }
    }

    /// Attach a cooperative cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}

impl Iterator for CsvStream<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cancelled() {
                self.pending.clear();
                return None;
            }
            if let Some(value) = self.pending.pop_front() {
                return Some(value);
            }

            let row = self.rows.next()?;
            if self.first_row {
                self.first_row = false;
                if self.has_header {
                    continue;
                }
            }

            match self.column {
                Some(index) => {
                    let value = row.get(index).map(|cell| cell.trim()).unwrap_or("");
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
                None => {
                    self.pending.extend(
                        row.iter()
                            .map(|cell| cell.trim())
                            .filter(|cell| !cell.is_empty())
                            .map(str::to_string),
                    );
                }
            }
        }
    }
}

/// Create a streaming CSV extraction over `text`.
pub fn stream_csv<'a>(text: &'a str, options: &ExtractionOptions) -> CsvStream<'a> {
    CsvStream::new(text, options)
}

/// Bulk CSV extraction: materialize every selected value at once.
///
/// Identical semantics to [`stream_csv`]; this simply drains the stream.
pub fn extract_csv(text: &str, options: &ExtractionOptions) -> Result<Vec<String>> {
    Ok(stream_csv(text, options).collect())
}
