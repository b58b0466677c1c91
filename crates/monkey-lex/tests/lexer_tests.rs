use monkey_lex::{Lexer, TokenKind};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(source);
    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "literal was {:?}", token.literal_str());
        assert_eq!(token.literal_str(), *literal);
    }
}

#[test]
fn next_token_covers_the_full_token_set() {
    use TokenKind::*;

    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
	x + y;
}

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
	return true;
} else {
	return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1,2];
{"foo":"bar"}"#;

    let expected = [
        (Let, "let"),
        (Ident, "five"),
        (Assign, "="),
        (Int, "5"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "ten"),
        (Assign, "="),
        (Int, "10"),
        (Semicolon, ";"),
        (Let, "let"),
        (Ident, "add"),
        (Assign, "="),
        (Function, "fn"),
        (LParen, "("),
        (Ident, "x"),
        (Comma, ","),
        (Ident, "y"),
        (RParen, ")"),
        (LBrace, "{"),
        (Ident, "x"),
        (Plus, "+"),
        (Ident, "y"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Let, "let"),
        (Ident, "result"),
        (Assign, "="),
        (Ident, "add"),
        (LParen, "("),
        (Ident, "five"),
        (Comma, ","),
        (Ident, "ten"),
        (RParen, ")"),
        (Semicolon, ";"),
        (Bang, "!"),
        (Minus, "-"),
        (Slash, "/"),
        (Asterisk, "*"),
        (Int, "5"),
        (Semicolon, ";"),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (Gt, ">"),
        (Int, "5"),
        (Semicolon, ";"),
        (If, "if"),
        (LParen, "("),
        (Int, "5"),
        (Lt, "<"),
        (Int, "10"),
        (RParen, ")"),
        (LBrace, "{"),
        (Return, "return"),
        (True, "true"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Else, "else"),
        (LBrace, "{"),
        (Return, "return"),
        (False, "false"),
        (Semicolon, ";"),
        (RBrace, "}"),
        (Int, "10"),
        (Eq, "=="),
        (Int, "10"),
        (Semicolon, ";"),
        (Int, "10"),
        (NotEq, "!="),
        (Int, "9"),
        (Semicolon, ";"),
        (String, "foobar"),
        (String, "foo bar"),
        (LBracket, "["),
        (Int, "1"),
        (Comma, ","),
        (Int, "2"),
        (RBracket, "]"),
        (Semicolon, ";"),
        (LBrace, "{"),
        (String, "foo"),
        (Colon, ":"),
        (String, "bar"),
        (RBrace, "}"),
        (Eof, ""),
    ];

    assert_tokens(source, &expected);
}

#[test]
fn empty_input_yields_eof() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let mut lexer = Lexer::new(r#""hello"#);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.literal_str(), "hello");
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn illegal_character_is_reported_per_character() {
    let mut lexer = Lexer::new("@");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal_str(), "@");
}

#[test]
fn digits_do_not_continue_an_identifier() {
    // `x1` lexes as IDENT("x") INT("1"), per the language's identifier grammar.
    let mut lexer = Lexer::new("x1");
    let ident = lexer.next_token();
    assert_eq!(ident.kind, TokenKind::Ident);
    assert_eq!(ident.literal_str(), "x");
    let int = lexer.next_token();
    assert_eq!(int.kind, TokenKind::Int);
    assert_eq!(int.literal_str(), "1");
}

#[test]
fn iterator_impl_stops_before_eof() {
    let lexer = Lexer::new("let x = 5;");
    let tokens: Vec<_> = lexer.collect();
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Eof));
}
