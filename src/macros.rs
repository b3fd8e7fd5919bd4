//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler that emits the whole regex match as one token
//!
//! These macros keep the pattern table in the lexer to one line per category.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for categories whose lexeme is exactly
/// the text matched by the category regex.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[0-9]+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Integer),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         regex: &::regex::Regex|
         -> Result<(), $crate::errors::errors::Error> {
            match regex.find(lexer.remainder()) {
                Some(matched) => {
                    lexer.emit($kind, matched.end());
                    Ok(())
                }
                None => Err(lexer.unexpected_character()),
            }
        }
    };
}
