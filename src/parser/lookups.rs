use crate::{ast::ast::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type PrefixHandler = fn(&mut Parser) -> Option<Expr>;
pub type InfixHandler = fn(&mut Parser, Expr) -> Option<Expr>;

/// Binding power of `kind` when it continues an expression.
///
/// Kinds without an infix role bind at `Lowest`, which ends the expression.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => BindingPower::Equals,
        TokenKind::Lt | TokenKind::Gt => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Asterisk | TokenKind::Slash => BindingPower::Product,
        TokenKind::LParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// Handler for a token that starts an expression.
pub fn prefix_lookup(kind: TokenKind) -> Option<PrefixHandler> {
    let handler: PrefixHandler = match kind {
        // Literals and symbols
        TokenKind::Ident => parse_identifier_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::True | TokenKind::False => parse_boolean_expr,

        // Unary operators
        TokenKind::Bang | TokenKind::Minus => parse_prefix_expr,

        TokenKind::LParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Function => parse_function_expr,
        _ => return None,
    };

    Some(handler)
}

/// Handler for a token that continues an expression with the left operand
/// already parsed.
pub fn infix_lookup(kind: TokenKind) -> Option<InfixHandler> {
    let handler: InfixHandler = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq => parse_infix_expr,

        TokenKind::LParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}
