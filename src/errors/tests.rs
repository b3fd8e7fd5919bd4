//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

fn at(line: usize, column: usize) -> Position {
    Position {
        offset: 0,
        line,
        column,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedString, at(1, 1));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter { character: '\u{7}' },
        at(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_unterminated_string_display() {
    let error = Error::new(ErrorImpl::UnterminatedString, at(2, 5));

    assert_eq!(error.to_string(), "unterminated string at line 2, column 5");
}

#[test]
fn test_unexpected_character_display() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\'' }, at(1, 9));

    assert_eq!(
        error.to_string(),
        "unexpected character '\\'' at line 1, column 9"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\u{1}' }, at(1, 1));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("U+0001")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
