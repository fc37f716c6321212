use crate::{
    ast::{
        arena::Ast,
        node::{Node, NodeId},
    },
    parser::lookups::{
        binary_op_info, unary_op_info, Associativity, ARRAY_INDEX_PRECEDENCE, UNARY_PRECEDENCE,
    },
};

/// Restores precedence and associativity on the subtree rooted at `id`.
///
/// Children are fixed first, then the node's own shape is checked against
/// its children. Whenever a rotation fires the subtree under `id` has a
/// new shape, so the walk restarts from `id`; rotations strictly move the
/// tree toward its normal form, so the restart terminates.
///
/// A rotation fires when a looser operator holds a tighter construct as a
/// direct child:
///
/// - left child is a tighter binary op: rotate left
/// - left child is a prefix unary op that binds looser than this op:
///   lift the unary op above this node
/// - right child is a tighter binary op, or an equal-precedence one under
///   left associativity: rotate right
/// - right child is a postfix unary op that binds looser than this op:
///   lift the unary op above this node
/// - right child is an array access whose base this op should have bound
///   instead: lift the access above this node
pub fn fix_up_operators(ast: &mut Ast, id: NodeId) {
    match ast.get(id).clone() {
        Node::BinaryOp { op, left, right } => {
            fix_up_operators(ast, left);
            fix_up_operators(ast, right);

            let info = binary_op_info(op);

            // Child fixups may have rewritten the child slots in place.
            if let Node::BinaryOp { op: left_op, .. } = ast.get(left) {
                let left_info = binary_op_info(left_op);
                if info.precedence < left_info.precedence {
                    rotate_left(ast, id);
                    fix_up_operators(ast, id);
                    return;
                }
            }

            if let Node::UnaryOp { op: unary, .. } = ast.get(left) {
                if unary_op_info(unary).position.allows_prefix()
                    && info.precedence < UNARY_PRECEDENCE
                {
                    swap_unary_left(ast, id);
                    fix_up_operators(ast, id);
                    return;
                }
            }

            if let Node::BinaryOp { op: right_op, .. } = ast.get(right) {
                let right_info = binary_op_info(right_op);
                if info.precedence < right_info.precedence
                    || (info.precedence == right_info.precedence
                        && info.assoc == Associativity::Left)
                {
                    rotate_right(ast, id);
                    fix_up_operators(ast, id);
                    return;
                }
            }

            if let Node::UnaryOp { op: unary, .. } = ast.get(right) {
                if unary_op_info(unary).position.allows_postfix()
                    && info.precedence < UNARY_PRECEDENCE
                {
                    swap_unary_right(ast, id);
                    fix_up_operators(ast, id);
                    return;
                }
            }

            if let Node::ArrayAccess { .. } = ast.get(right) {
                if info.precedence <= ARRAY_INDEX_PRECEDENCE {
                    swap_array_right(ast, id);
                    fix_up_operators(ast, id);
                }
            }
        }
        Node::UnaryOp { value, .. } => fix_up_operators(ast, value),
        Node::Parentheses { value } => fix_up_operators(ast, value),
        Node::ArrayAccess { array, index } => {
            fix_up_operators(ast, array);
            fix_up_operators(ast, index);
        }
        Node::FunctionCall { callee, args } => {
            fix_up_operators(ast, callee);
            for arg in args {
                fix_up_operators(ast, arg);
            }
        }
        Node::TypeSimple { name } => fix_up_operators(ast, name),
        Node::TypePointer { inner } => fix_up_operators(ast, inner),
        Node::TypeArray { inner, length } => {
            fix_up_operators(ast, inner);
            if let Some(length) = length {
                fix_up_operators(ast, length);
            }
        }
        Node::TypeGeneric { base, args } => {
            fix_up_operators(ast, base);
            for arg in args {
                fix_up_operators(ast, arg);
            }
        }
        Node::VariableDecl {
            name,
            var_type,
            init,
        } => {
            fix_up_operators(ast, name);
            fix_up_operators(ast, var_type);
            if let Some(init) = init {
                fix_up_operators(ast, init);
            }
        }
        Node::VariableAssign { target, value } => {
            fix_up_operators(ast, target);
            fix_up_operators(ast, value);
        }
        Node::Statement { root } => fix_up_operators(ast, root),
        Node::Scope { statements } | Node::Root { statements } => {
            for statement in statements {
                fix_up_operators(ast, statement);
            }
        }
        Node::IfStatement { condition, body } => {
            fix_up_operators(ast, condition);
            fix_up_operators(ast, body);
        }
        Node::ReturnStatement { value } => fix_up_operators(ast, value),
        Node::StructDef { name, fields } => {
            fix_up_operators(ast, name);
            for field in fields {
                fix_up_operators(ast, field);
            }
        }
        Node::FunctionDef {
            name,
            params,
            return_type,
            body,
        } => {
            fix_up_operators(ast, name);
            for param in params {
                fix_up_operators(ast, param);
            }
            fix_up_operators(ast, return_type);
            fix_up_operators(ast, body);
        }
        Node::Identifier { .. }
        | Node::IntegerLiteral { .. }
        | Node::FloatLiteral { .. }
        | Node::StringLiteral { .. }
        | Node::BoolLiteral { .. } => {}
    }
}

/// `(x op1 (y op2 z))` becomes `((x op1 y) op2 z)`.
///
/// `op2` moves into the parent slot so the subtree root id is stable; the
/// old right child node is reused for the new inner `op1` node.
fn rotate_right(ast: &mut Ast, parent: NodeId) {
    let Node::BinaryOp {
        op: op1,
        left: x,
        right: child,
    } = ast.get(parent).clone()
    else {
        unreachable!("rotate_right on non-binary node");
    };
    let Node::BinaryOp {
        op: op2,
        left: y,
        right: z,
    } = ast.get(child).clone()
    else {
        unreachable!("rotate_right with non-binary right child");
    };

    *ast.get_mut(child) = Node::BinaryOp {
        op: op1,
        left: x,
        right: y,
    };
    *ast.get_mut(parent) = Node::BinaryOp {
        op: op2,
        left: child,
        right: z,
    };
}

/// `((x op2 y) op1 z)` becomes `(x op2 (y op1 z))`.
fn rotate_left(ast: &mut Ast, parent: NodeId) {
    let Node::BinaryOp {
        op: op1,
        left: child,
        right: z,
    } = ast.get(parent).clone()
    else {
        unreachable!("rotate_left on non-binary node");
    };
    let Node::BinaryOp {
        op: op2,
        left: x,
        right: y,
    } = ast.get(child).clone()
    else {
        unreachable!("rotate_left with non-binary left child");
    };

    *ast.get_mut(child) = Node::BinaryOp {
        op: op1,
        left: y,
        right: z,
    };
    *ast.get_mut(parent) = Node::BinaryOp {
        op: op2,
        left: x,
        right: child,
    };
}

/// `((uop v) op1 z)` becomes `(uop (v op1 z))`.
fn swap_unary_left(ast: &mut Ast, parent: NodeId) {
    let Node::BinaryOp {
        op: op1,
        left: unary,
        right: z,
    } = ast.get(parent).clone()
    else {
        unreachable!("swap_unary_left on non-binary node");
    };
    let Node::UnaryOp { op: uop, value: v } = ast.get(unary).clone() else {
        unreachable!("swap_unary_left with non-unary left child");
    };

    *ast.get_mut(unary) = Node::BinaryOp {
        op: op1,
        left: v,
        right: z,
    };
    *ast.get_mut(parent) = Node::UnaryOp { op: uop, value: unary };
}

/// `(x op1 (uop v))` becomes `(uop (x op1 v))`.
fn swap_unary_right(ast: &mut Ast, parent: NodeId) {
    let Node::BinaryOp {
        op: op1,
        left: x,
        right: unary,
    } = ast.get(parent).clone()
    else {
        unreachable!("swap_unary_right on non-binary node");
    };
    let Node::UnaryOp { op: uop, value: v } = ast.get(unary).clone() else {
        unreachable!("swap_unary_right with non-unary right child");
    };

    *ast.get_mut(unary) = Node::BinaryOp {
        op: op1,
        left: x,
        right: v,
    };
    *ast.get_mut(parent) = Node::UnaryOp { op: uop, value: unary };
}

/// `(x op1 (arr [ idx ]))` becomes `((x op1 arr) [ idx ])`.
fn swap_array_right(ast: &mut Ast, parent: NodeId) {
    let Node::BinaryOp {
        op: op1,
        left: x,
        right: access,
    } = ast.get(parent).clone()
    else {
        unreachable!("swap_array_right on non-binary node");
    };
    let Node::ArrayAccess { array, index } = ast.get(access).clone() else {
        unreachable!("swap_array_right with non-access right child");
    };

    *ast.get_mut(access) = Node::BinaryOp {
        op: op1,
        left: x,
        right: array,
    };
    *ast.get_mut(parent) = Node::ArrayAccess {
        array: access,
        index,
    };
}
