//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the backtracking parser that transforms a stream
//! of tokens into a flat node arena. Rules are ordered-choice functions
//! that speculatively consume tokens and roll back both the cursor and
//! the arena when an alternative fails. It handles:
//!
//! - Statement parsing (variable declarations, functions, control flow)
//! - Expression parsing (binary ops, function calls, literals)
//! - Type parsing for type annotations
//! - Speculation checkpoints with arena truncation on rollback
//!
//! Binary expressions come out of the parser with no precedence applied;
//! the fixup pass in [`crate::fixup`] rotates them into shape afterwards.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
