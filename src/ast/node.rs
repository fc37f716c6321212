use std::fmt::Display;

/// Index of a node in the arena.
///
/// All structure in the tree is expressed through these indices; no node
/// ever holds another node by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single program-tree node.
///
/// Each variant carries only the fields relevant to its kind. Operator
/// symbols are `&'static str` drawn from the operator tables in
/// `parser::lookups`, so fixup can compare them by value cheaply.
///
/// The fixup engine overwrites a slot's variant in place during rotation;
/// everything else treats committed nodes as read-only.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Identifier { name: String },
    IntegerLiteral { repr: String, value: i64 },
    FloatLiteral { repr: String, value: f64 },
    StringLiteral { repr: String, value: String },
    BoolLiteral { repr: String, value: bool },

    BinaryOp { op: &'static str, left: NodeId, right: NodeId },
    UnaryOp { op: &'static str, value: NodeId },
    Parentheses { value: NodeId },
    ArrayAccess { array: NodeId, index: NodeId },
    FunctionCall { callee: NodeId, args: Vec<NodeId> },

    TypeSimple { name: NodeId },
    TypePointer { inner: NodeId },
    /// `length` is `None` for the dynamic-length form `[..]`.
    TypeArray { inner: NodeId, length: Option<NodeId> },
    TypeGeneric { base: NodeId, args: Vec<NodeId> },

    VariableDecl { name: NodeId, var_type: NodeId, init: Option<NodeId> },
    VariableAssign { target: NodeId, value: NodeId },
    Statement { root: NodeId },
    Scope { statements: Vec<NodeId> },
    IfStatement { condition: NodeId, body: NodeId },
    ReturnStatement { value: NodeId },

    StructDef { name: NodeId, fields: Vec<NodeId> },
    FunctionDef { name: NodeId, params: Vec<NodeId>, return_type: NodeId, body: NodeId },
    Root { statements: Vec<NodeId> },
}

impl Node {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Identifier { .. } => "Identifier",
            Node::IntegerLiteral { .. } => "IntegerLiteral",
            Node::FloatLiteral { .. } => "FloatLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::BoolLiteral { .. } => "BoolLiteral",
            Node::BinaryOp { .. } => "BinaryOp",
            Node::UnaryOp { .. } => "UnaryOp",
            Node::Parentheses { .. } => "Parentheses",
            Node::ArrayAccess { .. } => "ArrayAccess",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::TypeSimple { .. } => "TypeSimple",
            Node::TypePointer { .. } => "TypePointer",
            Node::TypeArray { .. } => "TypeArray",
            Node::TypeGeneric { .. } => "TypeGeneric",
            Node::VariableDecl { .. } => "VariableDecl",
            Node::VariableAssign { .. } => "VariableAssign",
            Node::Statement { .. } => "Statement",
            Node::Scope { .. } => "Scope",
            Node::IfStatement { .. } => "IfStatement",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::StructDef { .. } => "StructDef",
            Node::FunctionDef { .. } => "FunctionDef",
            Node::Root { .. } => "Root",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Identifier { .. }
                | Node::IntegerLiteral { .. }
                | Node::FloatLiteral { .. }
                | Node::StringLiteral { .. }
                | Node::BoolLiteral { .. }
        )
    }
}
