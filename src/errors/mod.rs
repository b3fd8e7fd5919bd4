//! Error types for the scanner.
//!
//! Scanning fails on the first malformed token. The error carries:
//!
//! - The kind of failure (`ErrorImpl`)
//! - The source position where the offending token starts
//! - A short suggestion for fixing the input

pub mod errors;

#[cfg(test)]
mod tests;
