//! In-place operator precedence fixup.
//!
//! The parser emits binary expressions as right-leaning combs with no
//! precedence applied. This module walks the arena after parsing and
//! rotates subtrees in place until every operator node binds exactly the
//! operands its precedence and associativity entitle it to. Rotations
//! rewrite node payloads through the arena; node ids never move.

pub mod fixup;

#[cfg(test)]
mod tests;
