use crate::ast::node::{Node, NodeId};

use super::{
    expr::{parse_identifier, parse_value},
    parser::Parser,
    types::parse_type,
};

/// Parses one statement.
///
/// Alternatives are tried in order: assignment, variable declaration, if,
/// scope, return, bare value. Assignments, declarations and bare values
/// must be followed by a `;` and are wrapped in a [`Node::Statement`];
/// block forms and `return` (which eats its own terminator) stand alone.
pub fn parse_statement(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let mut needs_semicolon = true;

        let root = if let Some(id) = parse_variable_assign(p) {
            id
        } else if let Some(id) = parse_variable_decl(p) {
            id
        } else if let Some(id) = parse_if_statement(p) {
            needs_semicolon = false;
            id
        } else if let Some(id) = parse_scope(p) {
            needs_semicolon = false;
            id
        } else if let Some(id) = parse_return_statement(p) {
            needs_semicolon = false;
            id
        } else {
            parse_value(p)?
        };

        if !needs_semicolon {
            return Some(root);
        }

        if !p.eat_word(";") {
            return None;
        }

        Some(p.ast_mut().push(Node::Statement { root }))
    })
}

pub fn parse_variable_assign(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let target = parse_value(p)?;
        if !p.eat_word("=") {
            return None;
        }
        let value = parse_value(p)?;

        Some(p.ast_mut().push(Node::VariableAssign { target, value }))
    })
}

/// Parses `name : type` with an optional `= value` initializer.
pub fn parse_variable_decl(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let name = parse_identifier(p)?;
        if !p.eat_word(":") {
            return None;
        }
        let var_type = parse_type(p)?;

        let init = if p.eat_word("=") {
            Some(parse_value(p)?)
        } else {
            None
        };

        Some(p.ast_mut().push(Node::VariableDecl {
            name,
            var_type,
            init,
        }))
    })
}

pub fn parse_scope(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("{") {
            return None;
        }

        let mut statements = vec![];
        while !p.check_word("}") {
            statements.push(parse_statement(p)?);
        }

        if !p.eat_word("}") {
            return None;
        }

        Some(p.ast_mut().push(Node::Scope { statements }))
    })
}

pub fn parse_if_statement(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("if") {
            return None;
        }
        let condition = parse_value(p)?;
        let body = parse_scope(p)?;

        Some(p.ast_mut().push(Node::IfStatement { condition, body }))
    })
}

pub fn parse_return_statement(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if !p.eat_word("return") {
            return None;
        }
        let value = parse_value(p)?;
        if !p.eat_word(";") {
            return None;
        }

        Some(p.ast_mut().push(Node::ReturnStatement { value }))
    })
}

/// Parses `name :: struct { field : type ; ... }`.
pub fn parse_struct_def(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let name = parse_identifier(p)?;
        if !p.eat_word("::") {
            return None;
        }
        if !p.eat_word("struct") {
            return None;
        }
        if !p.eat_word("{") {
            return None;
        }

        let mut fields = vec![];
        while !p.check_word("}") {
            let field = parse_variable_decl(p)?;
            if !p.eat_word(";") {
                return None;
            }
            fields.push(field);
        }

        if !p.eat_word("}") {
            return None;
        }

        Some(p.ast_mut().push(Node::StructDef { name, fields }))
    })
}

/// Parses `name :: (param : type, ...) -> type { ... }`.
pub fn parse_function_def(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        let name = parse_identifier(p)?;
        if !p.eat_word("::") {
            return None;
        }
        if !p.eat_word("(") {
            return None;
        }

        let mut params = vec![];
        while !p.check_word(")") {
            if !params.is_empty() && !p.eat_word(",") {
                return None;
            }
            params.push(parse_variable_decl(p)?);
        }

        if !p.eat_word(")") {
            return None;
        }
        if !p.eat_word("->") {
            return None;
        }
        let return_type = parse_type(p)?;
        let body = parse_scope(p)?;

        Some(p.ast_mut().push(Node::FunctionDef {
            name,
            params,
            return_type,
            body,
        }))
    })
}
