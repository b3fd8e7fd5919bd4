use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried top to bottom; the first regex matching at the cursor picks the category.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^[ \t\n\r]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Whitespace) },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer) },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Identifier) },
        RegexPattern { regex: Regex::new(r#"^[+\-*/<>&.@:=~|$!#%^_\[\]{}"`?]"#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        RegexPattern { regex: Regex::new("^[();,]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation) },
    ];

    static ref STRING_LITERAL: Regex = Regex::new(r#"(?s)^"(?:\\.|[^"\\])*""#).unwrap();
}

/// Offset, line and column of the next unconsumed character.
#[derive(Debug, Clone, Copy)]
struct ScanCursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl ScanCursor {
    fn new() -> Self {
        let start = Position::start();
        ScanCursor {
            offset: start.offset,
            line: start.line,
            column: start.column,
        }
    }

    fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, consumed: &str) {
        for ch in consumed.chars() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    cursor: ScanCursor,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            cursor: ScanCursor::new(),
        }
    }

    /// Emits the next `len` bytes of input as one token and moves past them.
    pub fn emit(&mut self, kind: TokenKind, len: usize) {
        let value = &self.remainder()[..len];
        let start = self.cursor.position();
        self.cursor.advance(value);
        let end = self.cursor.position();

        trace!(
            target: "rpal::lexer",
            kind = %kind,
            value = ?value,
            line = start.line,
            column = start.column,
            "Produced token"
        );

        self.push(MK_TOKEN!(kind, String::from(value), Span { start, end }));
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.cursor.offset..]
    }

    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    pub fn unexpected_character(&self) -> Error {
        let character = self.at().unwrap_or(char::REPLACEMENT_CHARACTER);
        Error::new(ErrorImpl::UnexpectedCharacter { character }, self.position())
    }

    fn run(&mut self) -> Result<(), Error> {
        while !self.at_eof() {
            let remaining = self.remainder();

            match PATTERNS.iter().find(|pattern| pattern.regex.is_match(remaining)) {
                Some(pattern) => (pattern.handler)(self, &pattern.regex)?,
                None => return Err(self.unexpected_character()),
            }
        }

        Ok(())
    }
}

fn string_handler(lexer: &mut Lexer<'_>, _regex: &Regex) -> Result<(), Error> {
    match STRING_LITERAL.find(lexer.remainder()) {
        Some(literal) => {
            lexer.emit(TokenKind::StringLiteral, literal.end());
            Ok(())
        }
        None => Err(Error::new(ErrorImpl::UnterminatedString, lexer.position())),
    }
}

/// Splits `source` into tokens whose lexemes, concatenated in order, give
/// back `source` exactly.
///
/// Stops at the first malformed token. Positions are 1-based and columns
/// count characters.
pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    debug!(target: "rpal::lexer", bytes = source.len(), "Scanning source");

    let mut lex = Lexer::new(source);

    if let Err(error) = lex.run() {
        debug!(
            target: "rpal::lexer",
            error = %error,
            scanned = lex.tokens.len(),
            "Scan failed"
        );
        return Err(error);
    }

    debug!(target: "rpal::lexer", tokens = lex.tokens.len(), "Finished scanning");
    Ok(lex.tokens)
}
