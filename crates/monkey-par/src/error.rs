//! Parser diagnostics.
//!
//! The parser never panics on malformed input: every failure is recorded as
//! a [`ParseError`] and parsing resumes at the next statement, so a single
//! `parse_program` call can surface many errors at once (see
//! [`crate::Parser::errors`]).

use std::fmt;

use monkey_lex::TokenKind;

/// One diagnostic produced while parsing. The `Display` text is part of the
/// language's observable surface (spec'd message shapes) and must match
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `_expect_peek`-style mismatch: the grammar required one token kind
    /// but the lexer produced another.
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    /// No prefix parselet is registered for the current token kind.
    NoPrefixParser(TokenKind),
    /// An `INT` token's literal did not parse as a signed 64-bit integer.
    InvalidInteger(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Expected next token to be {expected}, got {found} instead")
            }
            ParseError::NoPrefixParser(kind) => {
                write!(f, "no prefix parser for {kind} function")
            }
            ParseError::InvalidInteger(literal) => {
                write!(f, "could not parse {literal} as integer")
            }
        }
    }
}

impl std::error::Error for ParseError {}
