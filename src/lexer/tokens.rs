use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Words that can never be used as identifiers.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("while");
        set.insert("return");
        set.insert("struct");
        set.insert("true");
        set.insert("false");
        set
    };

    pub static ref IDENTIFIER_REGEX: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    pub static ref INTEGER_REGEX: Regex = Regex::new("^[0-9]+$").unwrap();
    pub static ref FLOAT_REGEX: Regex = Regex::new("^[0-9]+\\.[0-9]+$").unwrap();
}

/// A single lexical token: a slice of source text plus its span.
///
/// Tokens carry no kind tag. The parser's cursor primitives match on the
/// literal text, and the literal/identifier rules classify tokens by shape.
#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is(&self, word: &str) -> bool {
        self.value == word
    }

    pub fn is_string_literal(&self) -> bool {
        self.value.starts_with('"')
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ value: {} }}", self.value)
    }
}
