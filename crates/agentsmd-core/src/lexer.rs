//! Line lexer for the section scanner.
//!
//! Splits input into numbered lines using `memchr` for newline detection.
//! Both `\n` and `\r\n` line endings are accepted; the line terminator is
//! never part of the yielded text.

use memchr::memchr;

/// A single line from the input with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// 1-based line number in the original input.
    pub number: usize,
}

/// Line-based lexer.
///
/// An input ending in a newline does not produce a trailing empty line.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    line_number: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            line_number: 0,
        }
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let bytes = self.input.as_bytes();
        if self.offset >= bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // CRLF
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };
        self.line_number += 1;

        // `start` and `text_end` sit next to ASCII `\n`/`\r` bytes or at the
        // ends of the input, so both are char boundaries.
        let text = self.input.get(start..text_end).unwrap_or_default();

        Some(Line {
            text,
            number: self.line_number,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
