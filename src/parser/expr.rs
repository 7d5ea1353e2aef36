use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{infix_lookup, prefix_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Precedence climbing over the prefix/infix lookups.
///
/// Returns `None` when the expression could not be built; the reason has
/// already been recorded on the parser.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    parser.nested(|parser| climb(parser, bp))
}

fn climb(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse the prefix position
    let token_kind = parser.current_token_kind();
    let Some(prefix) = prefix_lookup(token_kind) else {
        let token = parser.current_token();
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token_kind,
                literal: token.literal.clone(),
            },
            token.span.start,
        );
        parser.record(error);
        return None;
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than `bp`, fold it into the lhs
    while !parser.peek_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(infix) = infix_lookup(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        // Every fold makes the tree one level deeper on the left
        if parser.descend().is_none() {
            return Some(left);
        }
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Identifier(IdentifierExpr::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    let value = match token.literal.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            parser.record(Error::new(
                ErrorImpl::NumberParseError {
                    literal: token.literal.clone(),
                },
                token.span.start,
            ));
            None
        }
    };

    Some(Expr::Integer(IntegerExpr { token, value }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(BooleanExpr {
        value: parser.current_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix).map(Box::new);

    Some(Expr::Prefix(PrefixExpr {
        operator: token.literal.clone(),
        token,
        right,
    }))
}

/// The right operand is parsed at the operator's own binding power, which is
/// what makes same-precedence operators associate to the left.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp).map(Box::new);

    Some(Expr::Infix(InfixExpr {
        operator: token.literal.clone(),
        token,
        left: Box::new(left),
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Option<Expr> {
    // fn(a, b) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Some(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Some(parameters);
    }

    parser.expect_peek(TokenKind::Ident)?;
    parameters.push(IdentifierExpr::new(parser.current_token().clone()));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Ident)?;
        parameters.push(IdentifierExpr::new(parser.current_token().clone()));
    }

    parser.expect_peek(TokenKind::RParen)?;

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, function: Expr) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        token,
        function: Box::new(function),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::RParen)?;

    Some(args)
}
