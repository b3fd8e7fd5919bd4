//! Lexical analysis for RPAL source.
//!
//! Converts source text into a stream of tokens for parsing. It handles:
//!
//! - Category dispatch over an ordered table of anchored regex patterns
//! - Integers, identifiers, operators, string literals and punctuation
//! - Comments and whitespace, kept as tokens so the stream covers the source
//! - Line and column tracking for error reporting

pub mod lexer;
pub mod tokens;
