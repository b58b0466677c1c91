//! Character cursor for traversing source code.
//!
//! The cursor tracks a byte position and the current/peek characters. The
//! language's identifier grammar is ASCII-only (see [`crate::lexer::is_letter`]),
//! so the cursor itself only needs to deal with UTF-8 boundaries, not
//! character classification.

pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    read_position: usize,
    ch: char,
}

const NUL: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: NUL,
        };
        cursor.advance();
        cursor
    }

    /// The character under the cursor, or `'\0'` at end of input.
    pub fn current(&self) -> char {
        self.ch
    }

    /// The character one position ahead, or `'\0'` at end of input.
    pub fn peek(&self) -> char {
        self.source[self.read_position..].chars().next().unwrap_or(NUL)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.ch == NUL && self.read_position >= self.source.len()
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) {
        self.ch = self
            .source
            .get(self.read_position..)
            .and_then(|s| s.chars().next())
            .unwrap_or(NUL);
        self.position = self.read_position;
        self.read_position += self.ch.len_utf8();
    }

    /// Returns the substring `[start, position)`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the remaining substring from `start` to end of input, used
    /// for unterminated string literals.
    pub fn slice_to_end(&self, start: usize) -> &'a str {
        &self.source[start..self.source.len()]
    }
}
