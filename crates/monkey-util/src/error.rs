//! Shared error types for the ambient (non-language) parts of the toolchain:
//! reading source files, driving the REPL, and so on. Lexer/parser diagnostics
//! and runtime errors are first-class *values* produced by those components
//! (see `monkey-par::ParseError` and `monkey_eval::Value::Error`), not
//! instances of this type.

use thiserror::Error;

/// Error surfaced by the CLI/REPL layer.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("could not read source file {path}: {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("program failed to parse:\n{}", .0.join("\n"))]
    Parse(Vec<String>),
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;
