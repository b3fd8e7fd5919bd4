//! Integration tests for end-to-end scanning.
//!
//! These scan whole RPAL programs through the public API and check the
//! rendered output and diagnostics a caller would see.

use rpal_lexer::{
    config::Config,
    display_error,
    errors::errors::ErrorImpl,
    lexer::{
        lexer::scan,
        tokens::{significant, TokenKind},
    },
};

const FACTORIAL: &str = include_str!("fixtures/factorial.rpal");
const UNTERMINATED: &str = include_str!("fixtures/unterminated.rpal");

#[test]
fn test_scan_program_covers_source() {
    let tokens = scan(FACTORIAL).unwrap();
    let rebuilt = tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<String>();

    assert_eq!(rebuilt, FACTORIAL);
}

#[test]
fn test_scan_program_significant_tokens() {
    let tokens = significant(scan(FACTORIAL).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "let");
    assert!(tokens[0].is_reserved());
    assert_eq!(tokens[0].span.start.line, 2);
    assert_eq!(tokens[0].span.start.column, 1);

    let arrow = tokens
        .iter()
        .position(|token| token.value == "-")
        .unwrap();
    assert_eq!(tokens[arrow + 1].kind, TokenKind::Operator);
    assert_eq!(tokens[arrow + 1].value, ">");

    let greeting = tokens
        .iter()
        .find(|token| token.kind == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(greeting.value, "\"Hello,\\tworld\\n\"");
    assert_eq!(greeting.literal_value().unwrap(), "Hello,\tworld\n");
    assert_eq!(greeting.span.start.line, 4);
    assert_eq!(greeting.span.start.column, 16);
}

#[test]
fn test_scan_program_comments_and_lines() {
    let tokens = scan(FACTORIAL).unwrap();
    let comments = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Comment)
        .collect::<Vec<_>>();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].value, "// Factorial and a couple of tuple helpers");
    assert_eq!(comments[0].span.start.line, 1);
    assert_eq!(comments[1].value, "// done");
    assert_eq!(comments[1].span.start.line, 7);

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Whitespace);
    assert_eq!(last.value, "\n");
    assert_eq!(last.span.end.line, 8);
    assert_eq!(last.span.end.column, 1);
}

#[test]
fn test_render_program_one_line_per_token() {
    let tokens = scan(FACTORIAL).unwrap();
    let count = tokens.len();
    let rendered = Config::default().render(tokens);

    assert_eq!(rendered.lines().count(), count);
    assert!(rendered.starts_with("Comment\t// Factorial"));
    assert!(rendered
        .lines()
        .all(|line| line.split('\t').count() >= 2));
}

#[test]
fn test_unterminated_string_diagnostic() {
    let error = scan(UNTERMINATED).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.to_string(), "unterminated string at line 1, column 12");

    let rendered = display_error(&error, UNTERMINATED, "unterminated.rpal");
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "Error: UnterminatedString (close the string with a matching `\"`)");
    assert_eq!(lines[1], "-> unterminated.rpal:1:12");
    assert_eq!(lines[3], "1 | let Name = \"Ada in");
    assert_eq!(lines[4], "  | -----------^");
}

#[test]
fn test_scans_are_independent() {
    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("let x{i} = {i} in x{i}");
                scan(&source).unwrap().len()
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11);
    }
}
