//! Lexical analysis.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Single and double character operators and punctuation
//! - Number and string literals, identifiers and reserved words
//! - Line and block comments, whitespace and line counting
//! - Non-fatal reporting of lexical errors

pub mod lexer;
pub mod tokens;
