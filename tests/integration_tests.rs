//! Integration tests for the full front end.
//!
//! These tests drive the complete pipeline from source text through
//! tokenization, parsing and operator fixup, and check the resulting tree
//! shapes, constant evaluation results and failure modes.

use std::rc::Rc;

use frontend::{
    ast::{
        arena::Ast,
        node::{Node, NodeId},
    },
    eval::bytecode::{interpret_const_expr, Value},
    fixup::fixup::fix_up_operators,
    lexer::lexer::tokenize,
    parser::parser::parse,
    Position,
};
use pretty_assertions::assert_eq;

fn front_end(source: &str) -> (Ast, NodeId) {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    let (mut ast, root) = parse(tokens, Rc::new("test.lang".to_string())).unwrap();
    fix_up_operators(&mut ast, root);
    (ast, root)
}

fn statements(ast: &Ast, root: NodeId) -> Vec<NodeId> {
    match ast.get(root) {
        Node::Root { statements } => statements.clone(),
        other => panic!("expected root node, got {}", other.kind_name()),
    }
}

fn eval_statement(source: &str) -> Value {
    let (ast, root) = front_end(source);
    let statements = statements(&ast, root);
    assert_eq!(statements.len(), 1);
    interpret_const_expr(&ast, statements[0], &Position::null()).unwrap()
}

#[test]
fn test_constant_expression_grouping() {
    assert_eq!(eval_statement("1 * (2 + 3) * 4 + 5;"), Value::Int(25));
    assert_eq!(eval_statement("2 * 3 + 4 * 5;"), Value::Int(26));
    assert_eq!(eval_statement("1 + 2 - 3 - 4;"), Value::Int(-4));
    assert_eq!(eval_statement("2 + 10 / 2 - 3;"), Value::Int(4));
}

#[test]
fn test_call_arguments_are_grouped_independently() {
    let (ast, root) = front_end("calc(1 + 2, 3 + 4 * 5, x + 2 * y);");

    let statements = statements(&ast, root);
    assert_eq!(statements.len(), 1);

    let Node::Statement { root } = ast.get(statements[0]) else {
        panic!("expected statement wrapper");
    };
    let Node::FunctionCall { args, .. } = ast.get(*root) else {
        panic!("expected function call");
    };
    assert_eq!(args.len(), 3);

    let position = Position::null();
    assert_eq!(
        interpret_const_expr(&ast, args[0], &position).unwrap(),
        Value::Int(3)
    );
    assert_eq!(
        interpret_const_expr(&ast, args[1], &position).unwrap(),
        Value::Int(23)
    );

    // x + 2 * y must keep the multiplication under the addition.
    let Node::BinaryOp { op, left, right } = ast.get(args[2]) else {
        panic!("expected binary op argument");
    };
    assert_eq!(*op, "+");
    assert!(matches!(ast.get(*left), Node::Identifier { name } if name == "x"));
    assert!(matches!(ast.get(*right), Node::BinaryOp { op: "*", .. }));
}

#[test]
fn test_struct_definition_round_trip() {
    let (ast, root) = front_end("vec2 :: struct { x : float; y : float; }");

    let statements = statements(&ast, root);
    let Node::StructDef { name, fields } = ast.get(statements[0]) else {
        panic!("expected struct definition");
    };
    assert!(matches!(ast.get(*name), Node::Identifier { name } if name == "vec2"));
    assert_eq!(fields.len(), 2);
    for field in fields {
        assert!(matches!(ast.get(*field), Node::VariableDecl { init: None, .. }));
    }
}

#[test]
fn test_function_definition_round_trip() {
    let source = "
        max :: (a : int, b : int) -> int {
            if a < b {
                return b;
            }
            return a;
        }
    ";
    let (ast, root) = front_end(source);

    let statements = statements(&ast, root);
    assert_eq!(statements.len(), 1);

    let Node::FunctionDef { params, body, .. } = ast.get(statements[0]) else {
        panic!("expected function definition");
    };
    assert_eq!(params.len(), 2);

    let Node::Scope { statements } = ast.get(*body) else {
        panic!("expected scope body");
    };
    assert_eq!(statements.len(), 2);
    assert!(matches!(ast.get(statements[0]), Node::IfStatement { .. }));
    assert!(matches!(ast.get(statements[1]), Node::ReturnStatement { .. }));
}

#[test]
fn test_declaration_initializer_is_fixed_up() {
    let (ast, root) = front_end("x : int = 1 + 2 * 3;");

    let statements = statements(&ast, root);
    let Node::Statement { root } = ast.get(statements[0]) else {
        panic!("expected statement wrapper");
    };
    let Node::VariableDecl { init, .. } = ast.get(*root) else {
        panic!("expected variable declaration");
    };

    assert_eq!(
        interpret_const_expr(&ast, init.unwrap(), &Position::null()).unwrap(),
        Value::Int(7)
    );
}

#[test]
fn test_division_by_zero_surfaces_as_an_error() {
    let (ast, root) = front_end("1 / 0;");

    let statements = statements(&ast, root);
    assert_eq!(statements.len(), 1);

    let error = interpret_const_expr(&ast, statements[0], &Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "DivisionByZero");
}

#[test]
fn test_unary_and_member_access_interact() {
    let (ast, root) = front_end("v = -pos.x + len[i] * 2;");

    let statements = statements(&ast, root);
    let Node::Statement { root } = ast.get(statements[0]) else {
        panic!("expected statement wrapper");
    };
    let Node::VariableAssign { value, .. } = ast.get(*root) else {
        panic!("expected assignment");
    };

    // The leading minus is lifted above the member access, and from there
    // above the rest of the expression: -((pos.x) + (len[i] * 2)).
    let Node::UnaryOp { op, value } = ast.get(*value) else {
        panic!("expected unary op value");
    };
    assert_eq!(*op, "-");

    let Node::BinaryOp { op, left, right } = ast.get(*value) else {
        panic!("expected binary op under the unary op");
    };
    assert_eq!(*op, "+");
    assert!(matches!(ast.get(*left), Node::BinaryOp { op: ".", .. }));
    assert!(matches!(ast.get(*right), Node::BinaryOp { op: "*", .. }));
}

#[test]
fn test_fixup_preserves_leaf_order_across_a_program() {
    let source = "total = base + 2 * scale - offsets[i].x;";
    let tokens = tokenize(source.to_string(), None).unwrap();
    let (raw_ast, raw_root) = parse(tokens, Rc::new("test.lang".to_string())).unwrap();

    let mut raw_leaves = vec![];
    raw_ast.collect_leaves(raw_root, &mut raw_leaves);

    let (fixed_ast, fixed_root) = front_end(source);
    let mut fixed_leaves = vec![];
    fixed_ast.collect_leaves(fixed_root, &mut fixed_leaves);

    assert_eq!(raw_leaves, fixed_leaves);
    assert_eq!(raw_ast.len(), fixed_ast.len());
}

#[test]
fn test_fixup_is_idempotent_across_a_program() {
    let (mut ast, root) = front_end("a = 1 + 2 * 3 - x.y[4] / -5;");

    let snapshot = ast.nodes().to_vec();
    fix_up_operators(&mut ast, root);
    assert_eq!(ast.nodes(), &snapshot[..]);
}

#[test]
fn test_empty_program() {
    let (ast, root) = front_end("");
    assert!(statements(&ast, root).is_empty());
    assert_eq!(ast.len(), 1);
}

#[test]
fn test_stray_token_fails_the_whole_parse() {
    let tokens = tokenize("x = 1; )".to_string(), None).unwrap();
    let error = parse(tokens, Rc::new("test.lang".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnparsedInput");
}

#[test]
fn test_unbalanced_nesting_hits_the_recursion_limit() {
    let source = format!("x = {}1;", "(".repeat(300));
    let tokens = tokenize(source, None).unwrap();
    let error = parse(tokens, Rc::new("test.lang".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "RecursionLimit");
}

#[test]
fn test_lex_error_carries_the_offset() {
    let error = tokenize("x = $;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_dump_renders_a_whole_program() {
    let (ast, root) = front_end("x : int = 1 + 2;");

    let dump = ast.dump(root);
    assert!(dump.contains("Declaring var:"));
    assert!(dump.contains("Binary Op: '+'"));
    assert!(dump.contains("Int lit: 2"));
}
