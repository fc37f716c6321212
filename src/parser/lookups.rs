use lazy_static::lazy_static;

/// Associativity of a binary operator.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Positions a unary operator may appear in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum UnaryPosition {
    Prefix,
    Postfix,
    Both,
}

impl UnaryPosition {
    pub fn allows_prefix(self) -> bool {
        matches!(self, UnaryPosition::Prefix | UnaryPosition::Both)
    }

    pub fn allows_postfix(self) -> bool {
        matches!(self, UnaryPosition::Postfix | UnaryPosition::Both)
    }
}

#[derive(Debug)]
pub struct BinaryOperator {
    pub symbol: &'static str,
    pub assoc: Associativity,
    /// Lower numbers bind tighter.
    pub precedence: i32,
}

#[derive(Debug)]
pub struct UnaryOperator {
    pub symbol: &'static str,
    pub position: UnaryPosition,
}

/// Precedence every unary operator binds at, for comparison against binary
/// operators during fixup.
pub const UNARY_PRECEDENCE: i32 = 3;

/// Precedence array indexing binds at during fixup.
pub const ARRAY_INDEX_PRECEDENCE: i32 = 2;

pub const BINARY_OPERATORS: &[BinaryOperator] = &[
    BinaryOperator { symbol: ".", assoc: Associativity::Left, precedence: 2 },
    BinaryOperator { symbol: "*", assoc: Associativity::Left, precedence: 5 },
    BinaryOperator { symbol: "/", assoc: Associativity::Left, precedence: 5 },
    BinaryOperator { symbol: "%", assoc: Associativity::Left, precedence: 5 },
    BinaryOperator { symbol: "+", assoc: Associativity::Left, precedence: 6 },
    BinaryOperator { symbol: "-", assoc: Associativity::Left, precedence: 6 },
    BinaryOperator { symbol: "<", assoc: Associativity::Left, precedence: 8 },
    BinaryOperator { symbol: "<=", assoc: Associativity::Left, precedence: 8 },
    BinaryOperator { symbol: ">", assoc: Associativity::Left, precedence: 8 },
    BinaryOperator { symbol: ">=", assoc: Associativity::Left, precedence: 8 },
    BinaryOperator { symbol: "==", assoc: Associativity::Left, precedence: 9 },
    BinaryOperator { symbol: "!=", assoc: Associativity::Left, precedence: 9 },
    BinaryOperator { symbol: "&&", assoc: Associativity::Left, precedence: 13 },
    BinaryOperator { symbol: "||", assoc: Associativity::Left, precedence: 14 },
];

pub const UNARY_OPERATORS: &[UnaryOperator] = &[
    UnaryOperator { symbol: "!", position: UnaryPosition::Prefix },
    UnaryOperator { symbol: "-", position: UnaryPosition::Prefix },
    UnaryOperator { symbol: "&", position: UnaryPosition::Prefix },
    UnaryOperator { symbol: "^", position: UnaryPosition::Postfix },
];

lazy_static! {
    pub static ref BINARY_SYMBOLS: Vec<&'static str> =
        BINARY_OPERATORS.iter().map(|op| op.symbol).collect();
    pub static ref PREFIX_SYMBOLS: Vec<&'static str> = UNARY_OPERATORS
        .iter()
        .filter(|op| op.position.allows_prefix())
        .map(|op| op.symbol)
        .collect();
    pub static ref POSTFIX_SYMBOLS: Vec<&'static str> = UNARY_OPERATORS
        .iter()
        .filter(|op| op.position.allows_postfix())
        .map(|op| op.symbol)
        .collect();
}

/// Looks up the table entry for a binary operator symbol.
///
/// Symbols reaching this point came out of the same table during parsing,
/// so a miss is a programming error.
pub fn binary_op_info(symbol: &str) -> &'static BinaryOperator {
    BINARY_OPERATORS
        .iter()
        .find(|op| op.symbol == symbol)
        .unwrap_or_else(|| panic!("unknown binary operator `{}`", symbol))
}

pub fn unary_op_info(symbol: &str) -> &'static UnaryOperator {
    UNARY_OPERATORS
        .iter()
        .find(|op| op.symbol == symbol)
        .unwrap_or_else(|| panic!("unknown unary operator `{}`", symbol))
}
