//! monkey-repl - the thin driver binary: reads a source file or starts an
//! interactive prompt, evaluates it through `monkey-lex` → `monkey-par` →
//! `monkey-eval`, and prints the formatted result or error.
//!
//! This crate is the "external collaborator" around the language core: it
//! owns argument parsing, file I/O, the REPL loop, and diagnostic logging,
//! none of which are part of the lexer/parser/evaluator pipeline itself.

use std::fs;
use std::path::PathBuf;

use clap::Parser as ClapParser;
use monkey_eval::{eval_program, Environment};
use monkey_par::Parser;
use monkey_util::{ToolError, ToolResult};

/// The language's interactive prompt.
pub const PROMPT: &str = ">> ";

#[derive(Debug, ClapParser)]
#[command(name = "monkey", about = "Lexer, parser, and evaluator for the Monkey language")]
pub struct Cli {
    /// Source file to evaluate. Starts an interactive REPL if omitted.
    pub file: Option<PathBuf>,
}

pub fn run(cli: Cli) -> ToolResult<()> {
    match cli.file {
        Some(path) => run_file(&path),
        None => {
            run_repl();
            Ok(())
        }
    }
}

fn run_file(path: &PathBuf) -> ToolResult<()> {
    let source = fs::read_to_string(path).map_err(|source| ToolError::ReadSource {
        path: path.display().to_string(),
        source,
    })?;

    let span = tracing::debug_span!("evaluate_file", path = %path.display());
    let _enter = span.enter();

    match eval_source(&source) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(errors) => Err(ToolError::Parse(errors)),
    }
}

fn run_repl() {
    tracing::info!("starting interactive session");
    let mut editor = rustyline::DefaultEditor::new().expect("failed to initialize line editor");
    let env = Environment::new();

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(_) => break,
        };
        let _ = editor.add_history_entry(line.as_str());

        let mut parser = Parser::new(&line);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            tracing::warn!(count = parser.errors().len(), "parse errors");
            println!("Whoops! we ran into some monkey business here");
            println!("parser errors:");
            for error in parser.errors() {
                println!("\t{error}");
            }
            continue;
        }

        let result = eval_program(&program, &env);
        println!("{result}");
    }
}

/// Parses and evaluates one source string against a fresh environment,
/// returning either the resulting value or the parser's collected errors.
/// Runtime errors are *not* routed through this `Result` — they surface as
/// an `Ok(Value::Error(..))`, per the language's value-level error channel.
pub fn eval_source(source: &str) -> Result<monkey_eval::Value, Vec<String>> {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.errors().iter().map(ToString::to_string).collect());
    }

    let env = Environment::new();
    Ok(eval_program(&program, &env))
}
