//! monkey-par - syntactic analysis for the language.
//!
//! Builds an [`ast::Program`] from source text via [`Parser`], using a
//! Pratt (top-down operator-precedence) algorithm for expressions. Parse
//! failures are collected rather than raised; see [`Parser::errors`].

pub mod ast;
mod error;
mod parser;

pub use error::ParseError;
pub use parser::Parser;
