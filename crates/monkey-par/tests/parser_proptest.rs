//! Property-based parser tests, mirroring `monkey-lex`'s proptest suite.
//!
//! Covers spec.md §8's round-trip property: for a generated expression
//! `s`, `str(parse(s))` is a fixed point — re-parsing the pretty-printed
//! form yields the same pretty-printed form again, because `Display`
//! fully parenthesizes every operator application.

use monkey_par::Parser;
use proptest::prelude::*;

const KEYWORDS: &[&str] = &["fn", "let", "true", "false", "if", "else", "return"];

fn identifier() -> impl Strategy<Value = String> {
    "[a-z]{1,4}".prop_filter("must not be a keyword", |s| !KEYWORDS.contains(&s.as_str()))
}

fn operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">"),
    ]
}

fn assert_round_trips(source: &str) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "source {source:?} did not parse: {:?}", parser.errors());
    let printed = program.to_string();

    let mut reparser = Parser::new(&printed);
    let reprogram = reparser.parse_program();
    assert!(
        reparser.errors().is_empty(),
        "pretty-printed form {printed:?} did not re-parse: {:?}",
        reparser.errors()
    );
    assert_eq!(reprogram.to_string(), printed, "source: {source:?}");
}

proptest! {
    /// A chain of identifiers joined by random binary operators, with no
    /// parentheses in the input, round-trips through the fully
    /// parenthesized pretty-print: printing twice yields the same string.
    #[test]
    fn random_operator_chain_round_trips(
        terms in prop::collection::vec(identifier(), 2..6),
        ops in prop::collection::vec(operator(), 5),
    ) {
        let mut source = terms[0].clone();
        for (term, op) in terms[1..].iter().zip(ops.iter().cycle()) {
            source.push(' ');
            source.push_str(op);
            source.push(' ');
            source.push_str(term);
        }
        assert_round_trips(&source);
    }

    /// Same property, but with randomly placed parenthesized groups, which
    /// the precedence climb must still reduce to a single canonical
    /// parenthesization on re-print.
    #[test]
    fn random_parenthesized_chain_round_trips(
        terms in prop::collection::vec(identifier(), 2..6),
        ops in prop::collection::vec(operator(), 5),
        group_at in 0usize..5,
    ) {
        let mut pieces: Vec<String> = terms.clone();
        if group_at + 1 < pieces.len() {
            pieces[group_at] = format!("({} {} {})", pieces[group_at], "+", pieces[group_at + 1]);
            pieces.remove(group_at + 1);
        }
        let mut source = pieces[0].clone();
        for (term, op) in pieces[1..].iter().zip(ops.iter().cycle()) {
            source.push(' ');
            source.push_str(op);
            source.push(' ');
            source.push_str(term);
        }
        assert_round_trips(&source);
    }
}

#[test]
fn known_precedence_example_round_trips() {
    assert_round_trips("-a * b");
    assert_round_trips("a + b * c + d / e - f");
}
