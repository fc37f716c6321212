//! Parser implementation for building the program tree.
//!
//! This module contains the main Parser struct: a backtracking cursor over
//! the token sequence plus the node arena the grammar rules append to.
//!
//! Every compound grammar rule runs inside [`Parser::attempt`], which
//! records a checkpoint of `(token position, arena length)` and restores
//! both when the rule reports no match. Rollback is the only undo
//! mechanism in the whole front end: a failed rule leaves no trace, no
//! matter how much speculative progress its sub-rules made.

use std::rc::Rc;

use crate::{
    ast::{
        arena::Ast,
        node::{Node, NodeId},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    Position,
};

use super::stmt::{parse_function_def, parse_statement, parse_struct_def};

/// Maximum grammar-rule nesting depth before a parse is abandoned.
///
/// Pathologically nested input would otherwise overflow the call stack;
/// hitting the limit surfaces as a `RecursionLimit` parse error.
pub const MAX_RULE_DEPTH: usize = 256;

/// One checkpoint: where the cursor and the arena stood when a rule began.
struct Frame {
    pos: usize,
    node_count: usize,
}

/// The backtracking cursor and parsing state.
pub struct Parser {
    /// The token sequence being consumed, strictly left to right
    tokens: Vec<Token>,
    /// Current read position in the token sequence
    pos: usize,
    /// The node arena all rules append to
    ast: Ast,
    /// Stack of open checkpoints
    frames: Vec<Frame>,
    /// Current rule nesting depth
    depth: usize,
    /// Set once a rule failed because of the depth limit
    depth_exceeded: bool,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            ast: Ast::new(),
            frames: vec![],
            depth: 0,
            depth_exceeded: false,
            file,
        }
    }

    /// Checks if there are unconsumed tokens left.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the current token without advancing, if any remain.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes the current token unconditionally.
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Peeks whether the current token is exactly `word`.
    pub fn check_word(&self, word: &str) -> bool {
        match self.current() {
            Some(token) => token.is(word),
            None => false,
        }
    }

    /// Consumes the current token if it is exactly `word`.
    pub fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is one of `words`, returning which
    /// one matched.
    pub fn eat_one_of(&mut self, words: &[&'static str]) -> Option<&'static str> {
        let token = self.current()?;
        for word in words {
            if token.is(word) {
                self.pos += 1;
                return Some(word);
            }
        }
        None
    }

    /// Runs a grammar rule inside a checkpoint.
    ///
    /// `Some` commits: everything consumed and appended since the
    /// checkpoint is kept. `None` rolls back: the read position is reset
    /// and the arena truncated to exactly the recorded length, destroying
    /// every node appended since. This holds on every exit path of the
    /// rule body, including failures deep inside nested successful
    /// sub-rules.
    pub fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_RULE_DEPTH {
            self.depth_exceeded = true;
            return None;
        }

        self.depth += 1;
        self.frames.push(Frame {
            pos: self.pos,
            node_count: self.ast.len(),
        });

        let result = rule(self);

        let frame = self.frames.pop().expect("checkpoint stack underflow");
        if result.is_none() {
            debug_assert!(frame.pos <= self.pos);
            debug_assert!(frame.node_count <= self.ast.len());
            self.pos = frame.pos;
            self.ast.truncate(frame.node_count);
        }
        self.depth -= 1;

        result
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn ast_mut(&mut self) -> &mut Ast {
        &mut self.ast
    }

    /// Current read position, exposed for the backtracking-purity tests.
    pub fn token_pos(&self) -> usize {
        self.pos
    }

    /// Source position of the current token, for error reporting.
    pub fn position(&self) -> Position {
        if let Some(token) = self.tokens.get(self.pos) {
            token.span.start.clone()
        } else if let Some(token) = self.tokens.last() {
            token.span.end.clone()
        } else {
            Position(0, Rc::clone(&self.file))
        }
    }
}

/// Parses a full token sequence into a populated arena plus root index.
///
/// Top-level constructs are tried in order (struct definition, function
/// definition, statement) until no rule matches. The parse only succeeds
/// if every token was consumed; leftover input fails the whole parse and
/// no tree is handed out.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<(Ast, NodeId), Error> {
    let mut parser = Parser::new(tokens, file);

    let mut top_level = vec![];
    while parser.has_tokens() {
        match parse_top_level(&mut parser) {
            Some(id) => top_level.push(id),
            None => break,
        }
    }

    if parser.has_tokens() {
        // The flag only matters when the parse actually got stuck: a
        // rolled-back speculative alternative may brush the depth limit
        // even though a shallower alternative then consumes everything.
        if parser.depth_exceeded {
            return Err(Error::new(
                ErrorImpl::RecursionLimit {
                    limit: MAX_RULE_DEPTH,
                },
                parser.position(),
            ));
        }

        let token = parser.current().expect("has_tokens checked");
        return Err(Error::new(
            ErrorImpl::UnparsedInput {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    let root = parser.ast.push(Node::Root {
        statements: top_level,
    });
    Ok((parser.ast, root))
}

fn parse_top_level(parser: &mut Parser) -> Option<NodeId> {
    parser.attempt(|p| {
        if let Some(id) = parse_struct_def(p) {
            return Some(id);
        }
        if let Some(id) = parse_function_def(p) {
            return Some(id);
        }
        parse_statement(p)
    })
}
