use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    ast::{arena::Ast, node::NodeId},
    eval::bytecode::{compile_expr, execute, interpret_const_expr, Instruction, Value},
    fixup::fixup::fix_up_operators,
    lexer::lexer::tokenize,
    parser::{expr::parse_value, parser::Parser},
    Position,
};

fn fixed_expression(source: &str) -> (Ast, NodeId) {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let mut parser = Parser::new(tokens, Rc::new("eval test".to_string()));
    let id = parse_value(&mut parser).unwrap();
    let mut ast = parser.ast().clone();
    fix_up_operators(&mut ast, id);
    (ast, id)
}

fn eval(source: &str) -> Value {
    let (ast, id) = fixed_expression(source);
    interpret_const_expr(&ast, id, &Position::null()).unwrap()
}

#[test]
fn test_compile_emits_post_order() {
    let (ast, id) = fixed_expression("1 + 2 * 3");

    let mut instructions = vec![];
    compile_expr(&ast, id, &mut instructions, &Position::null()).unwrap();
    assert_eq!(
        instructions,
        vec![
            Instruction::PushInt(1),
            Instruction::PushInt(2),
            Instruction::PushInt(3),
            Instruction::Mul,
            Instruction::Add,
        ]
    );
}

#[test]
fn test_execute_empty_sequence_is_void() {
    assert_eq!(execute(&[], &Position::null()).unwrap(), Value::Void);
}

#[test]
fn test_precedence_changes_result() {
    assert_eq!(eval("1 + 2 * 3"), Value::Int(7));
    assert_eq!(eval("(1 + 2) * 3"), Value::Int(9));
}

#[test]
fn test_left_associative_subtraction() {
    // A right-leaning raw tree would give 1 - (2 - (3 - 4)) = -2.
    assert_eq!(eval("1 + 2 - 3 - 4"), Value::Int(-4));
}

#[test]
fn test_mixed_precedence_chain() {
    assert_eq!(eval("2 * 3 + 4 * 5"), Value::Int(26));
    assert_eq!(eval("2 + 3 * 4 + 5"), Value::Int(19));
}

#[test]
fn test_operand_order_of_subtraction_and_division() {
    assert_eq!(eval("10 - 4"), Value::Int(6));
    assert_eq!(eval("12 / 4"), Value::Int(3));
    assert_eq!(eval("100 / 10 / 5"), Value::Int(2));
}

#[test]
fn test_mixed_int_float_promotes() {
    assert_eq!(eval("1 + 2.5"), Value::Float(3.5));
    assert_eq!(eval("2.0 * 4"), Value::Float(8.0));
}

#[test]
fn test_integer_division_by_zero_is_an_error() {
    let (ast, id) = fixed_expression("1 / 0");

    let error = interpret_const_expr(&ast, id, &Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "DivisionByZero");
}

#[test]
fn test_division_by_a_zero_subexpression_is_an_error() {
    let (ast, id) = fixed_expression("10 / (3 - 3)");

    let error = interpret_const_expr(&ast, id, &Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "DivisionByZero");
}

#[test]
fn test_integer_overflow_is_an_error() {
    let (ast, id) = fixed_expression("9223372036854775807 + 1");

    let error = interpret_const_expr(&ast, id, &Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "ArithmeticOverflow");
}

#[test]
fn test_float_division_by_zero_saturates() {
    assert_eq!(eval("1.0 / 0.0"), Value::Float(f64::INFINITY));
}

#[test]
fn test_errors_carry_the_callers_position() {
    let (ast, id) = fixed_expression("x + 1");
    let position = Position(7, Rc::new("prog.lang".to_string()));

    let error = interpret_const_expr(&ast, id, &position).unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedConstExpr");
    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.get_position().1.as_str(), "prog.lang");
}

#[test]
fn test_unsupported_operator_is_reported() {
    let (ast, id) = fixed_expression("1 == 2");

    let error = interpret_const_expr(&ast, id, &Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedConstExpr");
}
