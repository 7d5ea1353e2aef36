use std::{fmt::Display, slice::Iter};

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    ast::{write_optional, Expr, Node, Stmt},
    expressions::IdentifierExpr,
};

/// `let <name> = <value>;`
///
/// Only built once the name and `=` have been matched. `value` stays `None`
/// when the bound expression could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Option<Expr>,
}

impl LetStmt {
    pub fn new(token: Token, name: IdentifierExpr) -> Self {
        LetStmt {
            token,
            name,
            value: None,
        }
    }

    /// Builds a statement not backed by source text.
    pub fn from_name(name: IdentifierExpr) -> Self {
        LetStmt::new(
            MK_TOKEN!(TokenKind::Let, String::from("let"), 0, 0),
            name,
        )
    }

    pub fn with_value(mut self, value: Expr) -> Self {
        self.value = Some(value);
        self
    }
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

/// A bare expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the expression.
    pub token: Token,
    pub expression: Option<Expr>,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_optional(f, &self.expression)
    }
}

/// `{ <stmts> }`, the body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        for stmt in self.iter() {
            write!(f, "{}", stmt)?;
        }
        write!(f, " }}")
    }
}
