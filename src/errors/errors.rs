use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                got: TokenKind::Eof,
                ..
            } => ErrorTip::Suggestion(String::from(
                "input ended early, is a closing token missing?",
            )),
            ErrorImpl::UnexpectedToken { literal, .. } => {
                ErrorTip::Suggestion(format!("found `{}`", literal))
            }
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Illegal,
                literal,
            } => ErrorTip::Suggestion(format!("`{}` is not a recognised character", literal)),
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "`{}` does not fit in a 64-bit integer",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split it up with `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
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
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken {
        expected: TokenKind,
        got: TokenKind,
        literal: String,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, literal: String },
    #[error("could not parse {literal} as number")]
    NumberParseError { literal: String },
    #[error("expression is nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
