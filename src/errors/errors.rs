use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnparsedInput { .. } => "UnparsedInput",
            ErrorImpl::RecursionLimit { .. } => "RecursionLimit",
            ErrorImpl::UnsupportedConstExpr { .. } => "UnsupportedConstExpr",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow => "ArithmeticOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnparsedInput { token } => ErrorTip::Suggestion(format!(
                "No rule matches from `{}` onwards, did you miss a semicolon?",
                token
            )),
            ErrorImpl::RecursionLimit { limit } => ErrorTip::Suggestion(format!(
                "Nesting deeper than {} levels, is a bracket unbalanced?",
                limit
            )),
            ErrorImpl::UnsupportedConstExpr { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot appear in a compile-time constant expression",
                found
            )),
            ErrorImpl::DivisionByZero => {
                ErrorTip::Suggestion("The divisor evaluates to zero".to_string())
            }
            ErrorImpl::ArithmeticOverflow => ErrorTip::Suggestion(
                "The result does not fit in a 64-bit integer".to_string(),
            ),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("input left unparsed from token: {token:?}")]
    UnparsedInput { token: String },
    #[error("nesting exceeds the recursion limit of {limit:?}")]
    RecursionLimit { limit: usize },
    #[error("unsupported node in constant expression: {found:?}")]
    UnsupportedConstExpr { found: String },
    #[error("division by zero in constant expression")]
    DivisionByZero,
    #[error("arithmetic overflow in constant expression")]
    ArithmeticOverflow,
}
