//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the lexer, the parser's
//! root rule and the constant evaluator. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the different failure kinds
//! - Helpful error messages and suggestions
//!
//! Grammar-rule failure is not an error: rules roll back and return no
//! match, and only the root rule turns leftover input into an error.

pub mod errors;
