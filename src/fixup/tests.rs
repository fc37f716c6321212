use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        arena::Ast,
        node::{Node, NodeId},
    },
    fixup::fixup::fix_up_operators,
    lexer::lexer::tokenize,
    parser::{expr::parse_value, parser::Parser},
};

fn parse_expression(source: &str) -> (Ast, NodeId) {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("fixup test".to_string()));
    let id = parse_value(&mut parser).unwrap();
    (parser.ast().clone(), id)
}

fn fixed_expression(source: &str) -> (Ast, NodeId) {
    let (mut ast, id) = parse_expression(source);
    fix_up_operators(&mut ast, id);
    (ast, id)
}

fn binary_parts(ast: &Ast, id: NodeId) -> (&'static str, NodeId, NodeId) {
    match ast.get(id) {
        Node::BinaryOp { op, left, right } => (*op, *left, *right),
        other => panic!("expected binary op, got {}", other.kind_name()),
    }
}

fn leaves(ast: &Ast, id: NodeId) -> Vec<String> {
    let mut out = vec![];
    ast.collect_leaves(id, &mut out);
    out
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let (ast, id) = fixed_expression("2 * 3 + 4 * 5");

    let (op, left, right) = binary_parts(&ast, id);
    assert_eq!(op, "+");
    let (left_op, ..) = binary_parts(&ast, left);
    let (right_op, ..) = binary_parts(&ast, right);
    assert_eq!(left_op, "*");
    assert_eq!(right_op, "*");
}

#[test]
fn test_equal_precedence_chain_is_left_associated() {
    let (ast, id) = fixed_expression("1 + 2 - 3 - 4");

    // ((1 + 2) - 3) - 4
    let (op, left, right) = binary_parts(&ast, id);
    assert_eq!(op, "-");
    assert!(matches!(ast.get(right), Node::IntegerLiteral { value: 4, .. }));

    let (op, left, right) = binary_parts(&ast, left);
    assert_eq!(op, "-");
    assert!(matches!(ast.get(right), Node::IntegerLiteral { value: 3, .. }));

    let (op, left, right) = binary_parts(&ast, left);
    assert_eq!(op, "+");
    assert!(matches!(ast.get(left), Node::IntegerLiteral { value: 1, .. }));
    assert!(matches!(ast.get(right), Node::IntegerLiteral { value: 2, .. }));
}

#[test]
fn test_prefix_unary_lifted_above_member_access() {
    // -a.b negates the whole access, not just a.
    let (ast, id) = fixed_expression("-a.b");

    let Node::UnaryOp { op, value } = ast.get(id) else {
        panic!("expected unary root, got {}", ast.get(id).kind_name());
    };
    assert_eq!(*op, "-");

    let (op, left, right) = binary_parts(&ast, *value);
    assert_eq!(op, ".");
    assert!(matches!(ast.get(left), Node::Identifier { name } if name == "a"));
    assert!(matches!(ast.get(right), Node::Identifier { name } if name == "b"));
}

#[test]
fn test_member_access_becomes_array_base() {
    // a.b[i] indexes the field, so the access ends up above the dot.
    let (ast, id) = fixed_expression("a.b[i]");

    let Node::ArrayAccess { array, index } = ast.get(id) else {
        panic!("expected array access root, got {}", ast.get(id).kind_name());
    };
    assert!(matches!(ast.get(*index), Node::Identifier { name } if name == "i"));

    let (op, left, right) = binary_parts(&ast, *array);
    assert_eq!(op, ".");
    assert!(matches!(ast.get(left), Node::Identifier { name } if name == "a"));
    assert!(matches!(ast.get(right), Node::Identifier { name } if name == "b"));
}

#[test]
fn test_addition_does_not_capture_array_access() {
    // a + b[i] already binds correctly; nothing rotates.
    let (ast, id) = fixed_expression("a + b[i]");

    let (op, left, right) = binary_parts(&ast, id);
    assert_eq!(op, "+");
    assert!(matches!(ast.get(left), Node::Identifier { name } if name == "a"));
    assert!(matches!(ast.get(right), Node::ArrayAccess { .. }));
}

#[test]
fn test_postfix_unary_stays_below_addition() {
    let (ast, id) = fixed_expression("a + b^");

    let (op, _, right) = binary_parts(&ast, id);
    assert_eq!(op, "+");
    assert!(matches!(ast.get(right), Node::UnaryOp { op: "^", .. }));
}

#[test]
fn test_parentheses_block_rotation() {
    let (ast, id) = fixed_expression("(1 + 2) * 3");

    let (op, left, right) = binary_parts(&ast, id);
    assert_eq!(op, "*");
    assert!(matches!(ast.get(left), Node::Parentheses { .. }));
    assert!(matches!(ast.get(right), Node::IntegerLiteral { value: 3, .. }));
}

#[test]
fn test_compound_unary_and_array_rotation() {
    // -a.b[i] should come out as -((a.b)[i]).
    let (ast, id) = fixed_expression("-a.b[i]");

    let Node::UnaryOp { op, value } = ast.get(id) else {
        panic!("expected unary root, got {}", ast.get(id).kind_name());
    };
    assert_eq!(*op, "-");

    let Node::ArrayAccess { array, index } = ast.get(*value) else {
        panic!("expected array access under the unary op");
    };
    assert!(matches!(ast.get(*index), Node::Identifier { name } if name == "i"));
    let (op, ..) = binary_parts(&ast, *array);
    assert_eq!(op, ".");
}

#[test]
fn test_fixup_preserves_leaf_order() {
    let (raw_ast, raw_id) = parse_expression("1 + 2 * 3 - -x.y[4]");
    let (fixed_ast, fixed_id) = fixed_expression("1 + 2 * 3 - -x.y[4]");

    assert_eq!(leaves(&raw_ast, raw_id), leaves(&fixed_ast, fixed_id));
}

#[test]
fn test_fixup_is_idempotent() {
    let (mut ast, id) = fixed_expression("1 + 2 * 3 - 4 / -5 + a.b[i]");

    let snapshot = ast.nodes().to_vec();
    fix_up_operators(&mut ast, id);
    assert_eq!(ast.nodes(), &snapshot[..]);
}

#[test]
fn test_fixup_does_not_allocate_nodes() {
    let (mut ast, id) = parse_expression("1 + 2 * 3 + 4 * 5 - 6");

    let len = ast.len();
    fix_up_operators(&mut ast, id);
    assert_eq!(ast.len(), len);
}

#[test]
fn test_logical_operators_bind_loosest() {
    // a == b && c < d keeps the comparisons under the &&.
    let (ast, id) = fixed_expression("a == b && c < d");

    let (op, left, right) = binary_parts(&ast, id);
    assert_eq!(op, "&&");
    let (left_op, ..) = binary_parts(&ast, left);
    let (right_op, ..) = binary_parts(&ast, right);
    assert_eq!(left_op, "==");
    assert_eq!(right_op, "<");
}
