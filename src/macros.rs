//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_WORD_HANDLER!` - Creates a default lexer handler for literal words
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $span:expr) => {
        Token {
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for a fixed literal word.
///
/// Generates a handler function that pushes a token holding the literal
/// text and advances the lexer position by the word's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("::").unwrap(),
///     handler: MK_WORD_HANDLER!("::"),
/// }
/// ```
#[macro_export]
macro_rules! MK_WORD_HANDLER {
    ($value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + $value.len() as i32) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n($value.len() as i32);
        }
    };
}
