//! Read-only text buffer for the viewer
//!
//! Offsets are character offsets into the whole text, the same unit the jump
//! core uses. Positions are 0-based (line, column) pairs counted in characters.

use unicode_width::UnicodeWidthChar;

use crate::jump::{JumpHost, TextSpan};

/// Line/column location in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Terminal cells taken by `c`. Control characters are drawn as one blank cell.
pub fn cell_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

pub struct Document {
    text: String,
    chars: Vec<char>,
    /// Character offset where each line starts
    line_starts: Vec<usize>,
    /// Byte offset where each line starts
    line_byte_starts: Vec<usize>,
    /// Character and byte offsets coincide
    ascii: bool,
    max_line_width: usize,
}

impl Document {
    pub fn new(text: String) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        let mut line_byte_starts = vec![0];
        for (offset, (byte, c)) in text.char_indices().enumerate() {
            if c == '\n' {
                line_starts.push(offset + 1);
                line_byte_starts.push(byte + 1);
            }
        }

        let mut document = Self {
            ascii: text.is_ascii(),
            text,
            chars,
            line_starts,
            line_byte_starts,
            max_line_width: 0,
        };
        document.max_line_width = (0..document.line_count())
            .map(|line| {
                document
                    .line_chars(line)
                    .iter()
                    .copied()
                    .map(cell_width)
                    .sum::<usize>()
            })
            .max()
            .unwrap_or(0);
        document
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Character range of `line` without its line terminator
    pub fn line_range(&self, line: usize) -> Option<TextSpan> {
        let start = *self.line_starts.get(line)?;
        let mut end = self
            .line_starts
            .get(line + 1)
            .map_or(self.chars.len(), |next| next - 1);

        if end > start && self.chars[end - 1] == '\r' {
            end -= 1;
        }

        Some(TextSpan::new(start, end))
    }

    pub fn line_chars(&self, line: usize) -> &[char] {
        match self.line_range(line) {
            Some(range) => &self.chars[range.start..range.end],
            None => &[],
        }
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line_range(line).map_or(0, |range| range.len())
    }

    /// Widest line in terminal cells
    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    /// Position of `offset`, clamped to the end of the text
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.chars.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line, offset - self.line_starts[line])
    }

    /// Offset of `position`, clamped to the last line and to the line's length
    pub fn offset_at(&self, position: Position) -> usize {
        let line = position.line.min(self.line_count() - 1);
        let start = self.line_starts[line];
        start + position.column.min(self.line_len(line))
    }

    /// Display column of `position` in terminal cells
    pub fn display_column(&self, position: Position) -> usize {
        let chars = self.line_chars(position.line);
        chars[..position.column.min(chars.len())]
            .iter()
            .copied()
            .map(cell_width)
            .sum()
    }

    /// Characters of `line` that fit in `width` cells starting at cell `first_cell`.
    /// A wide character cut by either edge is left out.
    pub fn line_window(&self, line: usize, first_cell: usize, width: usize) -> Option<TextSpan> {
        let range = self.line_range(line)?;
        let last_cell = first_cell.saturating_add(width);
        let mut cell = 0;
        let mut start = None;
        let mut end = range.end;

        for offset in range.start..range.end {
            let char_width = cell_width(self.chars[offset]);
            if start.is_none() && cell >= first_cell {
                start = Some(offset);
            }
            if start.is_some() && cell + char_width > last_cell {
                end = offset;
                break;
            }
            cell += char_width;
        }

        let start = start.unwrap_or(range.end);
        Some(TextSpan::new(start, end.max(start)))
    }

    /// One span per line in the window, covering the characters that fit on screen.
    /// `first_column` and `width` are in terminal cells.
    pub fn visible_spans(
        &self,
        first_line: usize,
        height: usize,
        first_column: usize,
        width: usize,
    ) -> Vec<TextSpan> {
        let last_line = first_line.saturating_add(height).min(self.line_count());

        (first_line..last_line)
            .filter_map(|line| self.line_window(line, first_column, width))
            .filter(|span| !span.is_empty())
            .collect()
    }

    /// Text covered by `span`, clamped to the end of the text.
    /// Only the line holding the span start is walked.
    pub fn span_text(&self, span: TextSpan) -> Option<&str> {
        let end = span.end.min(self.chars.len());
        if span.start >= end {
            return None;
        }

        if self.ascii {
            return Some(&self.text[span.start..end]);
        }

        let line = self.line_starts.partition_point(|&start| start <= span.start) - 1;
        let rest = &self.text[self.line_byte_starts[line]..];
        let mut boundaries = rest
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()));
        let start_byte = boundaries.nth(span.start - self.line_starts[line])?;
        let end_byte = boundaries.nth(end - span.start - 1).unwrap_or(rest.len());

        Some(&rest[start_byte..end_byte])
    }

    /// Pair the document with the spans currently on screen
    pub fn view(&self, spans: Vec<TextSpan>) -> DocumentView<'_> {
        DocumentView {
            document: self,
            spans,
        }
    }
}

/// A document as seen through the viewport; this is what a jump session searches
pub struct DocumentView<'a> {
    document: &'a Document,
    spans: Vec<TextSpan>,
}

impl JumpHost for DocumentView<'_> {
    fn visible_spans(&self) -> Vec<TextSpan> {
        self.spans.clone()
    }

    fn text(&self) -> &str {
        self.document.text()
    }

    fn char_len(&self) -> usize {
        self.document.char_len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.document.char_at(offset)
    }

    fn span_text(&self, span: TextSpan) -> Option<&str> {
        self.document.span_text(span)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
