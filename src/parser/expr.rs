use crate::{
    ast::node::{Node, NodeId},
    lexer::tokens::{FLOAT_REGEX, IDENTIFIER_REGEX, INTEGER_REGEX, RESERVED_WORDS},
};

use super::{
    lookups::{BINARY_SYMBOLS, POSTFIX_SYMBOLS, PREFIX_SYMBOLS},
    parser::Parser,
};

/// Parses a full value expression: one single value, continued as a
/// binary operation if an operator follows it.
///
/// The left operand is parsed exactly once and the binary continuation is
/// decided by the next token, so nested expressions cost linear work. Raw
/// trees come out right-associated with no precedence applied; shape
/// correction is deferred entirely to the fixup engine.
pub fn parse_value(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let left = parse_single_value(p)?;

        if let Some(op) = p.eat_one_of(&BINARY_SYMBOLS) {
            let right = parse_value(p)?;
            return Some(p.ast_mut().push(Node::BinaryOp { op, left, right }));
        }

        Some(left)
    })
}

/// Parses a single value: a prefix unary operation wrapping a single
/// value, or a primary value followed by any chain of postfix suffixes
/// (postfix operators and `[ index ]` accesses).
pub fn parse_single_value(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if let Some(op) = p.eat_one_of(&PREFIX_SYMBOLS) {
            let value = parse_single_value(p)?;
            return Some(p.ast_mut().push(Node::UnaryOp { op, value }));
        }

        let mut id = parse_primary_value(p)?;
        loop {
            if let Some(op) = p.eat_one_of(&POSTFIX_SYMBOLS) {
                id = p.ast_mut().push(Node::UnaryOp { op, value: id });
                continue;
            }
            if let Some(access) = parse_index_suffix(p, id) {
                id = access;
                continue;
            }
            break;
        }

        Some(id)
    })
}

/// Primary value alternatives, tried in a fixed priority order.
///
/// Float before integer (so `1.5` never half-matches as `1`), function
/// call before bare identifier.
fn parse_primary_value(parser: &mut Parser) -> Option<NodeId> {
    if let Some(id) = parse_float_literal(parser) {
        return Some(id);
    }
    if let Some(id) = parse_int_literal(parser) {
        return Some(id);
    }
    if let Some(id) = parse_string_literal(parser) {
        return Some(id);
    }
    if let Some(id) = parse_bool_literal(parser) {
        return Some(id);
    }
    if let Some(id) = parse_parentheses(parser) {
        return Some(id);
    }
    if let Some(id) = parse_function_call(parser) {
        return Some(id);
    }
    parse_identifier(parser)
}

pub fn parse_int_literal(parser: &mut Parser) -> Option<NodeId> {
    let token = parser.current()?;
    if !INTEGER_REGEX.is_match(&token.value) {
        return None;
    }

    let repr = token.value.clone();
    let value: i64 = repr.parse().ok()?;
    parser.advance();

    Some(parser.ast_mut().push(Node::IntegerLiteral { repr, value }))
}

pub fn parse_float_literal(parser: &mut Parser) -> Option<NodeId> {
    let token = parser.current()?;
    if !FLOAT_REGEX.is_match(&token.value) {
        return None;
    }

    let repr = token.value.clone();
    let value: f64 = repr.parse().ok()?;
    parser.advance();

    Some(parser.ast_mut().push(Node::FloatLiteral { repr, value }))
}

pub fn parse_string_literal(parser: &mut Parser) -> Option<NodeId> {
    let token = parser.current()?;
    if !token.is_string_literal() {
        return None;
    }

    let repr = token.value.clone();
    let value = repr.trim_matches('"').to_string();
    parser.advance();

    Some(parser.ast_mut().push(Node::StringLiteral { repr, value }))
}

pub fn parse_bool_literal(parser: &mut Parser) -> Option<NodeId> {
    let token = parser.current()?;
    let value = match token.value.as_str() {
        "true" => true,
        "false" => false,
        _ => return None,
    };

    let repr = token.value.clone();
    parser.advance();

    Some(parser.ast_mut().push(Node::BoolLiteral { repr, value }))
}

/// Parses a bare identifier. Reserved words are rejected here, so a rule
/// expecting an identifier can never swallow a keyword.
pub fn parse_identifier(parser: &mut Parser) -> Option<NodeId> {
    let token = parser.current()?;
    if !IDENTIFIER_REGEX.is_match(&token.value) || RESERVED_WORDS.contains(token.value.as_str()) {
        return None;
    }

    let name = token.value.clone();
    parser.advance();

    Some(parser.ast_mut().push(Node::Identifier { name }))
}

pub fn parse_parentheses(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("(") {
            return None;
        }
        let value = parse_value(p)?;
        if !p.eat_word(")") {
            return None;
        }

        Some(p.ast_mut().push(Node::Parentheses { value }))
    })
}

/// Parses one `[ index ]` suffix on an already parsed base value.
fn parse_index_suffix(parser: &mut Parser, array: NodeId) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("[") {
            return None;
        }
        let index = parse_value(p)?;
        if !p.eat_word("]") {
            return None;
        }

        Some(p.ast_mut().push(Node::ArrayAccess { array, index }))
    })
}

pub fn parse_function_call(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let callee = parse_identifier(p)?;
        if !p.eat_word("(") {
            return None;
        }

        let mut args = vec![];
        loop {
            if p.check_word(")") {
                break;
            }
            args.push(parse_value(p)?);
            if p.eat_word(",") {
                continue;
            }
            if p.check_word(")") {
                break;
            }
            return None;
        }

        if !p.eat_word(")") {
            return None;
        }

        Some(p.ast_mut().push(Node::FunctionCall { callee, args }))
    })
}
