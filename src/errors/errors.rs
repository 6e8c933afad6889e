use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// Creates an error bound to the token that caused it.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error::new(error_impl, token.line)
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedExpression { .. } => "UnterminatedExpression",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::TooDeeplyNested { .. } => "TooDeeplyNested",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
            ErrorImpl::OperandNotANumber { .. } => "OperandNotANumber",
            ErrorImpl::OperandNotAString { .. } => "OperandNotAString",
            ErrorImpl::OperandNotABool { .. } => "OperandNotABool",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::None,
            ErrorImpl::UnterminatedExpression { found } => {
                ErrorTip::Suggestion(format!("Found `{}` where `)` was expected", found))
            }
            ErrorImpl::UnterminatedBlockComment => {
                ErrorTip::Suggestion(String::from("Close the comment with `*/`"))
            }
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected character: `{}`", token))
            }
            ErrorImpl::ExpectedExpression { found } => {
                ErrorTip::Suggestion(format!("Found `{}` where an expression was expected", found))
            }
            ErrorImpl::TooDeeplyNested { limit } => ErrorTip::Suggestion(format!(
                "Operators and groupings may nest at most {} levels deep",
                limit
            )),
            ErrorImpl::UnsupportedOperator { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` is not supported here", operator))
            }
            ErrorImpl::OperandNotANumber { operator, received } => ErrorTip::Suggestion(format!(
                "Operator `{}` expected a number, received `{}`",
                operator, received
            )),
            ErrorImpl::OperandNotAString { operator, received } => ErrorTip::Suggestion(format!(
                "Operator `{}` expected a string, received `{}`",
                operator, received
            )),
            ErrorImpl::OperandNotABool { operator, received } => ErrorTip::Suggestion(format!(
                "Operator `{}` expected a bool, received `{}`",
                operator, received
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] ERROR: {}.", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Expect ')' after expression")]
    UnterminatedExpression { found: String },
    #[error("Unterminated block comment")]
    UnterminatedBlockComment,
    #[error("Unexpected token")]
    UnexpectedToken { token: String },
    #[error("Expected expression")]
    ExpectedExpression { found: String },
    #[error("Expression nests too deeply")]
    TooDeeplyNested { limit: usize },
    #[error("Unsupported operator")]
    UnsupportedOperator { operator: String },
    #[error("Operand must be a number")]
    OperandNotANumber { operator: String, received: String },
    #[error("Operand must be a string")]
    OperandNotAString { operator: String, received: String },
    #[error("Operand must be a bool")]
    OperandNotABool { operator: String, received: String },
}
