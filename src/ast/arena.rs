use std::fmt::Write;

use super::node::{Node, NodeId};

/// The node arena: a single growable, append-only store of tree nodes.
///
/// Nodes are appended by grammar rules and truncated as a contiguous
/// suffix on checkpoint rollback. There is no removal, reordering or
/// reservation. Out-of-range access is a programming error and panics;
/// the arena trusts its caller's index bookkeeping.
#[derive(Debug, Default, Clone)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Ast { nodes: vec![] }
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards every node at or beyond `len`. Only checkpoint rollback
    /// calls this.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Index of the most recently appended node.
    pub fn last_id(&self) -> NodeId {
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Collects the source text of every leaf (identifier or literal)
    /// reachable from `id`, in in-order traversal order.
    pub fn collect_leaves(&self, id: NodeId, out: &mut Vec<String>) {
        match self.get(id) {
            Node::Identifier { name } => out.push(name.clone()),
            Node::IntegerLiteral { repr, .. }
            | Node::FloatLiteral { repr, .. }
            | Node::StringLiteral { repr, .. }
            | Node::BoolLiteral { repr, .. } => out.push(repr.clone()),

            Node::BinaryOp { left, right, .. } => {
                self.collect_leaves(*left, out);
                self.collect_leaves(*right, out);
            }
            Node::UnaryOp { value, .. } => self.collect_leaves(*value, out),
            Node::Parentheses { value } => self.collect_leaves(*value, out),
            Node::ArrayAccess { array, index } => {
                self.collect_leaves(*array, out);
                self.collect_leaves(*index, out);
            }
            Node::FunctionCall { callee, args } => {
                self.collect_leaves(*callee, out);
                for arg in args {
                    self.collect_leaves(*arg, out);
                }
            }
            Node::TypeSimple { name } => self.collect_leaves(*name, out),
            Node::TypePointer { inner } => self.collect_leaves(*inner, out),
            Node::TypeArray { inner, length } => {
                self.collect_leaves(*inner, out);
                if let Some(length) = length {
                    self.collect_leaves(*length, out);
                }
            }
            Node::TypeGeneric { base, args } => {
                self.collect_leaves(*base, out);
                for arg in args {
                    self.collect_leaves(*arg, out);
                }
            }
            Node::VariableDecl { name, var_type, init } => {
                self.collect_leaves(*name, out);
                self.collect_leaves(*var_type, out);
                if let Some(init) = init {
                    self.collect_leaves(*init, out);
                }
            }
            Node::VariableAssign { target, value } => {
                self.collect_leaves(*target, out);
                self.collect_leaves(*value, out);
            }
            Node::Statement { root } => self.collect_leaves(*root, out),
            Node::Scope { statements } | Node::Root { statements } => {
                for stmt in statements {
                    self.collect_leaves(*stmt, out);
                }
            }
            Node::IfStatement { condition, body } => {
                self.collect_leaves(*condition, out);
                self.collect_leaves(*body, out);
            }
            Node::ReturnStatement { value } => self.collect_leaves(*value, out),
            Node::StructDef { name, fields } => {
                self.collect_leaves(*name, out);
                for field in fields {
                    self.collect_leaves(*field, out);
                }
            }
            Node::FunctionDef { name, params, return_type, body } => {
                self.collect_leaves(*name, out);
                for param in params {
                    self.collect_leaves(*param, out);
                }
                self.collect_leaves(*return_type, out);
                self.collect_leaves(*body, out);
            }
        }
    }

    /// Renders the subtree rooted at `id` as an indented textual tree.
    pub fn dump(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(id, 0, &mut out);
        out
    }

    fn indent(out: &mut String, indentation: usize) {
        for _ in 0..indentation {
            out.push_str("    ");
        }
    }

    fn dump_node(&self, id: NodeId, indentation: usize, out: &mut String) {
        match self.get(id) {
            Node::Identifier { name } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Identifier '{}'", name);
            }
            Node::IntegerLiteral { value, .. } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Int lit: {}", value);
            }
            Node::FloatLiteral { value, .. } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Float lit: {}", value);
            }
            Node::StringLiteral { repr, .. } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "String lit: {}", repr);
            }
            Node::BoolLiteral { value, .. } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Bool lit: {}", value);
            }
            Node::BinaryOp { op, left, right } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Binary Op: '{}'", op);
                self.dump_node(*left, indentation + 1, out);
                self.dump_node(*right, indentation + 1, out);
            }
            Node::UnaryOp { op, value } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Unary Op: '{}'", op);
                self.dump_node(*value, indentation + 1, out);
            }
            Node::Parentheses { value } => {
                self.dump_node(*value, indentation, out);
            }
            Node::ArrayAccess { array, index } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Array access:");
                self.dump_node(*array, indentation + 1, out);
                Self::indent(out, indentation);
                let _ = writeln!(out, "Index:");
                self.dump_node(*index, indentation + 1, out);
            }
            Node::FunctionCall { callee, args } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Calling:");
                self.dump_node(*callee, indentation + 1, out);
                for (i, arg) in args.iter().enumerate() {
                    Self::indent(out, indentation);
                    let _ = writeln!(out, "Arg {}:", i);
                    self.dump_node(*arg, indentation + 1, out);
                }
            }
            Node::TypeSimple { name } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Type:");
                self.dump_node(*name, indentation + 1, out);
            }
            Node::TypePointer { inner } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Pointer to:");
                self.dump_node(*inner, indentation + 1, out);
            }
            Node::TypeArray { inner, length } => {
                Self::indent(out, indentation);
                match length {
                    Some(length) => {
                        let _ = writeln!(out, "Array of:");
                        self.dump_node(*inner, indentation + 1, out);
                        Self::indent(out, indentation);
                        let _ = writeln!(out, "Length:");
                        self.dump_node(*length, indentation + 1, out);
                    }
                    None => {
                        let _ = writeln!(out, "Dynamic array of:");
                        self.dump_node(*inner, indentation + 1, out);
                    }
                }
            }
            Node::TypeGeneric { base, args } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Generic type:");
                self.dump_node(*base, indentation + 1, out);
                for arg in args {
                    self.dump_node(*arg, indentation + 1, out);
                }
            }
            Node::VariableDecl { name, var_type, init } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Declaring var:");
                self.dump_node(*name, indentation + 1, out);
                self.dump_node(*var_type, indentation + 1, out);
                if let Some(init) = init {
                    Self::indent(out, indentation);
                    let _ = writeln!(out, "Initial value:");
                    self.dump_node(*init, indentation + 1, out);
                }
            }
            Node::VariableAssign { target, value } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Assign to:");
                self.dump_node(*target, indentation + 1, out);
                self.dump_node(*value, indentation + 1, out);
            }
            Node::Statement { root } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Statement:");
                self.dump_node(*root, indentation, out);
            }
            Node::Scope { statements } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Scope.");
                for stmt in statements {
                    self.dump_node(*stmt, indentation + 1, out);
                }
            }
            Node::IfStatement { condition, body } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "If statement.");
                Self::indent(out, indentation);
                let _ = writeln!(out, "Condition:");
                self.dump_node(*condition, indentation + 1, out);
                Self::indent(out, indentation);
                let _ = writeln!(out, "Body:");
                self.dump_node(*body, indentation + 1, out);
            }
            Node::ReturnStatement { value } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Return:");
                self.dump_node(*value, indentation + 1, out);
            }
            Node::StructDef { name, fields } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Struct:");
                self.dump_node(*name, indentation + 1, out);
                Self::indent(out, indentation);
                let _ = writeln!(out, "Fields:");
                for field in fields {
                    self.dump_node(*field, indentation + 1, out);
                }
            }
            Node::FunctionDef { name, params, return_type, body } => {
                Self::indent(out, indentation);
                let _ = writeln!(out, "Function:");
                self.dump_node(*name, indentation + 1, out);
                Self::indent(out, indentation);
                let _ = writeln!(out, "Parameters:");
                for param in params {
                    self.dump_node(*param, indentation + 1, out);
                }
                Self::indent(out, indentation);
                let _ = writeln!(out, "Returns:");
                self.dump_node(*return_type, indentation + 1, out);
                Self::indent(out, indentation);
                let _ = writeln!(out, "Body:");
                self.dump_node(*body, indentation + 1, out);
            }
            Node::Root { statements } => {
                for stmt in statements {
                    self.dump_node(*stmt, indentation, out);
                }
            }
        }
    }
}
