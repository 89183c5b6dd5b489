//! Immutable source text with a line index

use oxc_span::Span;

/// A 1-based line and 0-based byte column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Source text of one file plus the offsets where each line begins.
///
/// Built once per file check and never mutated. Offset to position
/// conversion is a binary search over the line starts.
#[derive(Debug, Clone)]
pub struct SourceBuffer<'a> {
    text: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> SourceBuffer<'a> {
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i as u32 + 1);
                }
                b'\n' => line_starts.push(i as u32 + 1),
                // U+2028 / U+2029 are encoded as E2 80 A8 / E2 80 A9
                0xE2 if bytes.get(i + 1) == Some(&0x80)
                    && matches!(bytes.get(i + 2), Some(0xA8 | 0xA9)) =>
                {
                    i += 2;
                    line_starts.push(i as u32 + 1);
                }
                _ => {}
            }
            i += 1;
        }

        Self { text, line_starts }
    }

    /// Get the full source text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get a slice of the source for a span
    pub fn slice(&self, span: Span) -> &'a str {
        &self.text[span.start as usize..span.end as usize]
    }

    /// Line number (1-based) containing `offset`
    pub fn line_of(&self, offset: u32) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }

    /// Convert a byte offset into a line/column position
    pub fn position(&self, offset: u32) -> Position {
        let line = self.line_of(offset);
        let column = offset - self.line_starts[line as usize - 1];
        Position::new(line, column)
    }

    /// Convert a line/column position back into a byte offset
    pub fn offset(&self, position: Position) -> u32 {
        self.line_start(position.line) + position.column
    }

    /// Byte offset of the first character of `line`
    pub fn line_start(&self, line: u32) -> u32 {
        self.line_starts[line as usize - 1]
    }

    /// Byte offset just past the content of `line`, before its terminator
    pub fn line_end(&self, line: u32) -> u32 {
        let start = self.line_start(line) as usize;
        let rest = &self.text[start..];
        let content = rest
            .find(['\n', '\r', '\u{2028}', '\u{2029}'])
            .unwrap_or(rest.len());
        (start + content) as u32
    }

    /// Text of `line` without its terminator
    pub fn line_text(&self, line: u32) -> &'a str {
        self.slice(Span::new(self.line_start(line), self.line_end(line)))
    }

    /// Leading whitespace of `line`
    pub fn line_indent(&self, line: u32) -> &'a str {
        let text = self.line_text(line);
        let width = text
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(text.len(), |(idx, _)| idx);
        &text[..width]
    }

    /// Span covering the leading whitespace of `line`
    pub fn line_indent_span(&self, line: u32) -> Span {
        let start = self.line_start(line);
        Span::new(start, start + self.line_indent(line).len() as u32)
    }
}
