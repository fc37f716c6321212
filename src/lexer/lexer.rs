use std::rc::Rc;

use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN, MK_WORD_HANDLER};

use super::tokens::Token;

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        // Multi-character punctuation sits above its single-character
        // prefixes, so `::` never lexes as two `:` tokens.
        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: text_handler},
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: text_handler},
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: text_handler},
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_WORD_HANDLER!("::")},
                RegexPattern { regex: Regex::new("->").unwrap(), handler: MK_WORD_HANDLER!("->")},
                RegexPattern { regex: Regex::new("\\.\\.").unwrap(), handler: MK_WORD_HANDLER!("..")},
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_WORD_HANDLER!("==")},
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_WORD_HANDLER!("!=")},
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_WORD_HANDLER!("<=")},
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_WORD_HANDLER!(">=")},
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_WORD_HANDLER!("&&")},
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_WORD_HANDLER!("||")},
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_WORD_HANDLER!("[")},
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_WORD_HANDLER!("]")},
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_WORD_HANDLER!("{")},
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_WORD_HANDLER!("}")},
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_WORD_HANDLER!("(")},
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_WORD_HANDLER!(")")},
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_WORD_HANDLER!(";")},
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_WORD_HANDLER!(":")},
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_WORD_HANDLER!(",")},
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_WORD_HANDLER!("=")},
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_WORD_HANDLER!("!")},
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_WORD_HANDLER!("<")},
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_WORD_HANDLER!(">")},
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_WORD_HANDLER!("+")},
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_WORD_HANDLER!("-")},
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_WORD_HANDLER!("*")},
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_WORD_HANDLER!("/")},
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_WORD_HANDLER!("%")},
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_WORD_HANDLER!("^")},
                RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_WORD_HANDLER!("&")},
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_WORD_HANDLER!(".")},
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos as usize] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[(self.pos as usize)..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn text_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(matched.clone(), Span { start: Position(lexer.pos as u32, Rc::clone(&lexer.file)), end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)) }));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
}

/// Splits source text into an ordered token sequence.
///
/// Tokens are plain text spans; no end-of-input sentinel is appended, the
/// parser checks exhaustion by position.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.patterns.clone().iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, Position(lex.pos as u32, Rc::clone(&lex.file))));
        }
    }

    Ok(lex.tokens)
}
