//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into an ordered sequence of text-span tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Multi-character punctuation ahead of single-character prefixes
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
