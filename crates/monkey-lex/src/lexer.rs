//! Lexer for the language: a single-pass, one-character-lookahead scanner
//! that turns source text into a stream of [`Token`]s.

use crate::cursor::Cursor;
use crate::token::{lookup_ident, Token, TokenKind};

/// Turns source text into tokens on demand via [`Lexer::next_token`].
///
/// The lexer never fails: unrecognized characters become `TokenKind::Illegal`
/// tokens and an unterminated string literal simply runs to end of input.
/// There is no error channel here — only the parser accumulates diagnostics.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Skips whitespace, then lexes and returns exactly one token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = self.cursor.current();
        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, "");
        }

        match ch {
            '=' => self.two_char_or('=', TokenKind::Eq, TokenKind::Assign),
            '!' => self.two_char_or('=', TokenKind::NotEq, TokenKind::Bang),
            '+' => self.single_char(TokenKind::Plus),
            '-' => self.single_char(TokenKind::Minus),
            '*' => self.single_char(TokenKind::Asterisk),
            '/' => self.single_char(TokenKind::Slash),
            '<' => self.single_char(TokenKind::Lt),
            '>' => self.single_char(TokenKind::Gt),
            ',' => self.single_char(TokenKind::Comma),
            ';' => self.single_char(TokenKind::Semicolon),
            ':' => self.single_char(TokenKind::Colon),
            '(' => self.single_char(TokenKind::LParen),
            ')' => self.single_char(TokenKind::RParen),
            '{' => self.single_char(TokenKind::LBrace),
            '}' => self.single_char(TokenKind::RBrace),
            '[' => self.single_char(TokenKind::LBracket),
            ']' => self.single_char(TokenKind::RBracket),
            '"' => self.read_string(),
            c if is_letter(c) => self.read_identifier(),
            c if c.is_ascii_digit() => self.read_number(),
            c => {
                self.cursor.advance();
                Token::new(TokenKind::Illegal, &c.to_string())
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current(), ' ' | '\t' | '\n' | '\r') {
            self.cursor.advance();
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let ch = self.cursor.current();
        self.cursor.advance();
        Token::new(kind, &ch.to_string())
    }

    /// Lexes `=`/`!` which may be followed by `=` to form `==`/`!=`.
    fn two_char_or(&mut self, second: char, two_char_kind: TokenKind, one_char_kind: TokenKind) -> Token {
        let first = self.cursor.current();
        if self.cursor.peek() == second {
            self.cursor.advance();
            self.cursor.advance();
            Token::new(two_char_kind, &format!("{first}{second}"))
        } else {
            self.cursor.advance();
            Token::new(one_char_kind, &first.to_string())
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while is_letter(self.cursor.current()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }

    fn read_number(&mut self) -> Token {
        let start = self.cursor.position();
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        Token::new(TokenKind::Int, text)
    }

    /// Consumes characters up to the closing `"`, or to end of input if the
    /// string is never closed. No escape processing is performed.
    fn read_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        let start = self.cursor.position();
        loop {
            if self.cursor.current() == '"' || self.cursor.is_at_end() {
                break;
            }
            self.cursor.advance();
        }
        let text = if self.cursor.current() == '"' {
            self.cursor.slice_from(start)
        } else {
            self.cursor.slice_to_end(start)
        };
        let token = Token::new(TokenKind::String, text);
        if self.cursor.current() == '"' {
            self.cursor.advance();
        }
        token
    }
}

/// Identifier characters: ASCII letters and underscore.
///
/// Deliberately excludes digits, even mid-identifier: `x1` lexes as
/// `IDENT("x")` followed by `INT("1")`.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
