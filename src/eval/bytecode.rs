use crate::{
    ast::{
        arena::Ast,
        node::{Node, NodeId},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    PushInt(i64),
    PushFloat(f64),
    Add,
    Sub,
    Mul,
    Div,
}

/// Compiles the subtree at `id` into stack instructions, post-order, so
/// each binary operator finds its operands on top of the stack with the
/// right one pushed last.
///
/// Only numeric literals, parentheses and the four arithmetic operators
/// are constant-foldable; anything else is reported as unsupported.
/// Arena nodes carry no source offsets, so errors are attributed to the
/// `position` the caller hands in (the enclosing statement's start).
pub fn compile_expr(
    ast: &Ast,
    id: NodeId,
    out: &mut Vec<Instruction>,
    position: &Position,
) -> Result<(), Error> {
    match ast.get(id) {
        Node::IntegerLiteral { value, .. } => out.push(Instruction::PushInt(*value)),
        Node::FloatLiteral { value, .. } => out.push(Instruction::PushFloat(*value)),
        Node::Parentheses { value } => compile_expr(ast, *value, out, position)?,
        Node::Statement { root } => compile_expr(ast, *root, out, position)?,
        Node::BinaryOp { op, left, right } => {
            compile_expr(ast, *left, out, position)?;
            compile_expr(ast, *right, out, position)?;
            let instruction = match *op {
                "+" => Instruction::Add,
                "-" => Instruction::Sub,
                "*" => Instruction::Mul,
                "/" => Instruction::Div,
                other => {
                    return Err(Error::new(
                        ErrorImpl::UnsupportedConstExpr {
                            found: other.to_string(),
                        },
                        position.clone(),
                    ))
                }
            };
            out.push(instruction);
        }
        other => {
            return Err(Error::new(
                ErrorImpl::UnsupportedConstExpr {
                    found: other.kind_name().to_string(),
                },
                position.clone(),
            ))
        }
    }

    Ok(())
}

/// Runs a compiled instruction sequence on a value stack.
///
/// Mixed int and float operands promote to float. Integer division by
/// zero and integer overflow are reported as errors against `position`;
/// float arithmetic saturates to infinities and NaN as usual. An empty
/// final stack yields [`Value::Void`]; more than one leftover value means
/// the compiler emitted a malformed sequence and is a bug.
pub fn execute(instructions: &[Instruction], position: &Position) -> Result<Value, Error> {
    let mut stack: Vec<Value> = vec![];

    for instruction in instructions {
        match instruction {
            Instruction::PushInt(value) => stack.push(Value::Int(*value)),
            Instruction::PushFloat(value) => stack.push(Value::Float(*value)),
            Instruction::Add => binary_step(
                &mut stack,
                |a, b| a.checked_add(b).ok_or(ErrorImpl::ArithmeticOverflow),
                |a, b| a + b,
                position,
            )?,
            Instruction::Sub => binary_step(
                &mut stack,
                |a, b| a.checked_sub(b).ok_or(ErrorImpl::ArithmeticOverflow),
                |a, b| a - b,
                position,
            )?,
            Instruction::Mul => binary_step(
                &mut stack,
                |a, b| a.checked_mul(b).ok_or(ErrorImpl::ArithmeticOverflow),
                |a, b| a * b,
                position,
            )?,
            Instruction::Div => binary_step(
                &mut stack,
                |a, b| {
                    if b == 0 {
                        return Err(ErrorImpl::DivisionByZero);
                    }
                    a.checked_div(b).ok_or(ErrorImpl::ArithmeticOverflow)
                },
                |a, b| a / b,
                position,
            )?,
        }
    }

    match stack.len() {
        0 => Ok(Value::Void),
        1 => Ok(stack.pop().expect("length checked")),
        leftover => panic!("execution left {} values on the stack", leftover),
    }
}

fn binary_step(
    stack: &mut Vec<Value>,
    int_op: impl Fn(i64, i64) -> Result<i64, ErrorImpl>,
    float_op: impl Fn(f64, f64) -> f64,
    position: &Position,
) -> Result<(), Error> {
    // Operands were pushed left first, so the right one comes off first.
    let rhs = stack.pop().expect("stack underflow");
    let lhs = stack.pop().expect("stack underflow");

    let result = match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            Value::Int(int_op(a, b).map_err(|error| Error::new(error, position.clone()))?)
        }
        (Value::Float(a), Value::Float(b)) => Value::Float(float_op(a, b)),
        (Value::Int(a), Value::Float(b)) => Value::Float(float_op(a as f64, b)),
        (Value::Float(a), Value::Int(b)) => Value::Float(float_op(a, b as f64)),
        (lhs, rhs) => panic!("cannot operate on {:?} and {:?}", lhs, rhs),
    };
    stack.push(result);

    Ok(())
}

/// Compiles and runs the subtree at `id` in one step, attributing any
/// error to `position`.
pub fn interpret_const_expr(ast: &Ast, id: NodeId, position: &Position) -> Result<Value, Error> {
    let mut instructions = vec![];
    compile_expr(ast, id, &mut instructions, position)?;
    execute(&instructions, position)
}
