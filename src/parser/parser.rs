//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser keeps exactly two
//! tokens, the current one and one of lookahead, and pulls the next token from
//! the lexer each time it advances. Statement parsing lives in `stmt`,
//! expression parsing in `expr`.
//!
//! Errors never abort parsing. They are recorded in order and the statement
//! they occurred in is dropped or left partially filled.

use std::mem;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// Deepest nesting of expressions and blocks the parser follows.
///
/// Each prefix operator, group, call argument list and block is one level,
/// and so is every operator folded into a left-associative chain.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Current nesting level, bounded by `MAX_NESTING_DEPTH`
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, reading the first two tokens from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Moves the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        self.current_token = mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances if the lookahead is of `expected_kind`.
    ///
    /// Otherwise records an `UnexpectedToken` diagnostic and returns `None`
    /// without advancing, so statement parsers can bail out with `?`.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<()> {
        if self.peek_is(expected_kind) {
            self.advance();
            return Some(());
        }

        let error = unexpected_token(expected_kind, &self.peek_token);
        self.record(error);
        None
    }

    /// Goes one nesting level deeper.
    ///
    /// At the limit this records `NestingTooDeep` at the current token and
    /// returns `None` instead.
    pub fn descend(&mut self) -> Option<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current_token.span.start,
            );
            self.record(error);
            return None;
        }

        self.depth += 1;
        Some(())
    }

    /// Runs `parse` one level deeper and restores the level afterwards.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Parser) -> Option<T>) -> Option<T> {
        let depth = self.depth;
        self.descend()?;

        let result = parse(self);
        self.depth = depth;

        result
    }

    /// Binding power of the current token.
    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token.kind)
    }

    /// Binding power of the lookahead token.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek_token.kind)
    }

    /// Appends a diagnostic.
    pub fn record(&mut self, error: Error) {
        debug!(
            error = %error,
            position = error.get_position().0,
            "recorded parse diagnostic"
        );
        self.errors.push(error);
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program. Check `errors()` before trusting it.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                program.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }
}

/// Builds the diagnostic for finding `token` where `expected` was required.
pub fn unexpected_token(expected: TokenKind, token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected,
            got: token.kind,
            literal: token.literal.clone(),
        },
        token.span.start,
    )
}

/// Parses `source` into a program and its diagnostics.
///
/// This is the main entry point for parsing. It creates a lexer and parser,
/// parses until EOF and hands back everything that was recorded.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
