//! Output settings for the `rpal-lex` harness.

use std::fmt::Write;

use tracing::Level;

use crate::{
    lexer::tokens::{significant, Token},
    logging::LogFormat,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: Level,
    pub log_format: LogFormat,
    /// Prefix each line with `line:column`.
    pub positions: bool,
    /// Leave out whitespace and comments.
    pub significant: bool,
    /// Mark identifiers that are RPAL keywords.
    pub reserved: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: Level::WARN,
            log_format: LogFormat::default(),
            positions: false,
            significant: false,
            reserved: false,
        }
    }
}

impl Config {
    /// Renders one line per token.
    pub fn render(&self, tokens: Vec<Token>) -> String {
        let tokens = if self.significant {
            significant(tokens)
        } else {
            tokens
        };

        let mut out = String::new();
        for token in &tokens {
            out.push_str(&token.render(self.positions));
            if self.reserved && token.is_reserved() {
                out.push_str("\treserved");
            }
            let _ = writeln!(out);
        }

        out
    }
}
