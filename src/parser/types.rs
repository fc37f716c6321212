//! Type annotation parsing.
//!
//! Types are a base (a plain name or a generic instantiation) followed by
//! any chain of suffixes: `^` for pointers, `[len]` or `[..]` for arrays.
//! Suffixes apply left to right, so `int^[4]` is an array of four
//! pointers to int.

use crate::ast::node::{Node, NodeId};

use super::{
    expr::{parse_identifier, parse_value},
    parser::Parser,
};

pub fn parse_type(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let mut id = if let Some(id) = parse_generic_type(p) {
            id
        } else {
            let name = parse_identifier(p)?;
            p.ast_mut().push(Node::TypeSimple { name })
        };

        loop {
            if p.eat_word("^") {
                id = p.ast_mut().push(Node::TypePointer { inner: id });
                continue;
            }
            if let Some(array) = parse_array_suffix(p, id) {
                id = array;
                continue;
            }
            break;
        }

        Some(id)
    })
}

/// Parses one array suffix on an already parsed inner type: `[..]` for a
/// slice of unknown length, `[expr]` for a fixed length.
fn parse_array_suffix(parser: &mut Parser, inner: NodeId) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("[") {
            return None;
        }

        if p.eat_word("..") {
            if !p.eat_word("]") {
                return None;
            }
            return Some(p.ast_mut().push(Node::TypeArray { inner, length: None }));
        }

        let length = parse_value(p)?;
        if !p.eat_word("]") {
            return None;
        }

        Some(p.ast_mut().push(Node::TypeArray {
            inner,
            length: Some(length),
        }))
    })
}

/// Parses `name(arg, arg, ...)` as a generic type instantiation with one
/// or more type arguments.
pub fn parse_generic_type(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let base = parse_identifier(p)?;
        if !p.eat_word("(") {
            return None;
        }

        let mut args = vec![];
        loop {
            args.push(parse_type(p)?);
            if p.eat_word(",") {
                continue;
            }
            break;
        }

        if !p.eat_word(")") {
            return None;
        }

        Some(p.ast_mut().push(Node::TypeGeneric { base, args }))
    })
}
