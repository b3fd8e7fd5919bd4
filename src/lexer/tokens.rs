use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("let");
        set.insert("in");
        set.insert("within");
        set.insert("fn");
        set.insert("where");
        set.insert("aug");
        set.insert("or");
        set.insert("not");
        set.insert("gr");
        set.insert("ge");
        set.insert("ls");
        set.insert("le");
        set.insert("eq");
        set.insert("ne");
        set.insert("true");
        set.insert("false");
        set.insert("nil");
        set.insert("dummy");
        set.insert("rec");
        set.insert("and");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Identifier,
    Operator,
    StringLiteral,
    Comment,
    Punctuation,
    Whitespace,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.kind, escape_lexeme(&self.value))
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whitespace and comments, which a parser screens out.
    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Whitespace, TokenKind::Comment])
    }

    /// Identifiers spelled like an RPAL keyword. They keep the `Identifier` kind.
    pub fn is_reserved(&self) -> bool {
        self.kind == TokenKind::Identifier && RESERVED_LOOKUP.contains(self.value.as_str())
    }

    /// The decoded contents of a string literal, without the surrounding quotes.
    ///
    /// `\n`, `\t`, `\\`, `\"` and `\'` are decoded; any other escaped
    /// character is kept as written. Returns `None` for other token kinds.
    pub fn literal_value(&self) -> Option<String> {
        if self.kind != TokenKind::StringLiteral {
            return None;
        }

        let body = self.value.strip_prefix('"')?.strip_suffix('"')?;
        let mut result = String::with_capacity(body.len());
        let mut chars = body.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.peek() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some(other) => {
                    result.push('\\');
                    result.push(*other);
                }
                None => {
                    result.push('\\');
                    continue;
                }
            }
            chars.next();
        }

        Some(result)
    }

    /// One output line for this token: `<kind>\t<lexeme>`, optionally
    /// prefixed with `<line>:<column>\t`.
    pub fn render(&self, with_position: bool) -> String {
        if with_position {
            format!("{}:{}\t{}", self.span.start.line, self.span.start.column, self)
        } else {
            self.to_string()
        }
    }
}

/// Drops whitespace and comments, keeping source order.
pub fn significant(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|token| !token.is_trivia()).collect()
}

fn escape_lexeme(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c if c.is_control() => escaped.extend(c.escape_unicode()),
            c => escaped.push(c),
        }
    }

    escaped
}
