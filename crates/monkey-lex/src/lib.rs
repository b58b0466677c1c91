//! monkey-lex - lexical analysis for the language.
//!
//! Turns a source string into a stream of [`Token`]s. The lexer is a
//! deterministic, single-pass scanner with one character of lookahead; it
//! never raises an error itself (see [`TokenKind::Illegal`]) so that the
//! parser is the single place that accumulates diagnostics.

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{lookup_ident, Token, TokenKind};
