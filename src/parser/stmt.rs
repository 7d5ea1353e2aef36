use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::{unexpected_token, Parser};

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// Consumes a trailing `;` if there is one.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Ident)?;
    let name = IdentifierExpr::new(parser.current_token().clone());

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let mut stmt = LetStmt::new(start_token, name);
    stmt.value = parse_expr(parser, BindingPower::Lowest);

    skip_semicolon(parser);

    Some(Stmt::Let(stmt))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);

    skip_semicolon(parser);

    Some(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    skip_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ <stmts> }` with the current token on `{`, leaving it on `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Option<BlockStmt> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_is(TokenKind::RBrace) {
        if parser.current_is(TokenKind::Eof) {
            let error = unexpected_token(TokenKind::RBrace, parser.current_token());
            parser.record(error);
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    Some(BlockStmt { token, body })
}
