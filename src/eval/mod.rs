//! Constant expression evaluation.
//!
//! Compiles a fixed-up arithmetic subtree into a small stack bytecode and
//! runs it. Used to fold compile-time constants and as an end-to-end
//! check that the fixup pass produced the grouping the source meant.

pub mod bytecode;

#[cfg(test)]
mod tests;
