#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;

extern crate regex;

/// A location in the source. `line` and `column` are 1-based, and `column`
/// counts characters rather than bytes. `offset` is the byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte `offset`.
///
/// Returns the 1-based line number, the line text (including its newline),
/// and the character index of `offset` within that line.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            let line_pos = line.get(..offset - start)?.chars().count();
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnterminatedString (close the string with a matching `"`)
        -> prog.rpal
          |
        2 | let s = "abc
          | --------^
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}:{}", file, position.line, position.column);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
