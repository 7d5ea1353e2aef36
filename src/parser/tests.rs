//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - `let` and `return` statements
//! - Literals, prefix and infix expressions
//! - Operator precedence through the canonical rendering
//! - `if` expressions, function literals and calls
//! - Error recording and recovery

use pretty_assertions::assert_eq;

use super::parser::{parse, Parser, MAX_NESTING_DEPTH};
use crate::{
    ast::{
        ast::{Expr, Node, Program, Stmt},
        statements::ExpressionStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
};

fn parse_ok(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert_eq!(
        parser.error_messages(),
        Vec::<String>::new(),
        "unexpected parser errors for {:?}",
        source
    );

    program
}

fn error_messages(source: &str) -> Vec<String> {
    let (_, errors) = parse(source);
    errors.iter().map(|error| error.to_string()).collect()
}

/// Unwraps the expression of a single expression statement program.
fn single_expression(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "expected one statement in {}", program);

    match &program.statements[0] {
        Stmt::Expression(ExpressionStmt {
            expression: Some(expr),
            ..
        }) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let source = "
let x = 5;
let y = 10;
let foobar = 838383;
";
    let program = parse_ok(source);

    assert_eq!(program.len(), 3);

    let expectations = [("x", "5"), ("y", "10"), ("foobar", "838383")];
    for (stmt, (name, value)) in program.statements.iter().zip(expectations) {
        let Stmt::Let(stmt) = stmt else {
            panic!("expected a let statement, got {:?}", stmt);
        };

        assert_eq!(stmt.token_literal(), "let");
        assert_eq!(stmt.name.value, name);
        assert_eq!(stmt.name.token_literal(), name);
        assert_eq!(
            stmt.value.as_ref().map(|value| value.to_string()),
            Some(value.to_string())
        );
    }
}

#[test]
fn test_parse_let_with_expression_value() {
    let program = parse_ok("let y = true; let foobar = y;");

    assert_eq!(program.to_string(), "let y = true;let foobar = y;");
}

#[test]
fn test_parse_let_without_semicolon() {
    let program = parse_ok("let x = 5");

    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "let x = 5;");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok("return 5;\nreturn 10;\nreturn 993322;");

    assert_eq!(program.len(), 3);
    for stmt in &program.statements {
        let Stmt::Return(stmt) = stmt else {
            panic!("expected a return statement, got {:?}", stmt);
        };
        assert_eq!(stmt.token_literal(), "return");
        assert!(stmt.value.is_some());
    }

    assert_eq!(program.to_string(), "return 5;return 10;return 993322;");
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_ok("foobar;");

    match single_expression(&program) {
        Expr::Identifier(ident) => {
            assert_eq!(ident.value, "foobar");
            assert_eq!(ident.token_literal(), "foobar");
        }
        other => panic!("expected an identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_expression() {
    let program = parse_ok("5;");

    match single_expression(&program) {
        Expr::Integer(int) => {
            assert_eq!(int.value, Some(5));
            assert_eq!(int.token_literal(), "5");
        }
        other => panic!("expected an integer, got {:?}", other),
    }
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Boolean(boolean) => assert_eq!(boolean.value, expected),
            other => panic!("expected a boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!5;", "!", "5"),
        ("-15;", "-", "15"),
        ("!foobar;", "!", "foobar"),
        ("-foobar;", "-", "foobar"),
        ("!true;", "!", "true"),
        ("!false;", "!", "false"),
    ];

    for (source, operator, operand) in cases {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(
                    prefix.right.as_ref().map(|right| right.to_string()),
                    Some(operand.to_string())
                );
            }
            other => panic!("expected a prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", "5", "+", "5"),
        ("5 - 5;", "5", "-", "5"),
        ("5 * 5;", "5", "*", "5"),
        ("5 / 5;", "5", "/", "5"),
        ("5 > 5;", "5", ">", "5"),
        ("5 < 5;", "5", "<", "5"),
        ("5 == 5;", "5", "==", "5"),
        ("5 != 5;", "5", "!=", "5"),
        ("foobar + barfoo;", "foobar", "+", "barfoo"),
        ("true == true", "true", "==", "true"),
        ("true != false", "true", "!=", "false"),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Infix(infix) => {
                assert_eq!(infix.left.to_string(), left);
                assert_eq!(infix.operator, operator);
                assert_eq!(
                    infix.right.as_ref().map(|right| right.to_string()),
                    Some(right.to_string())
                );
            }
            other => panic!("expected an infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_grouped_and_call_precedence() {
    let cases = [
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_ok("if (x < y) { x }");

    match single_expression(&program) {
        Expr::If(if_expr) => {
            assert_eq!(if_expr.condition.to_string(), "(x < y)");
            assert_eq!(if_expr.consequence.body.len(), 1);
            assert_eq!(if_expr.consequence.to_string(), "{ x }");
            assert!(if_expr.alternative.is_none());
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y }");

    match single_expression(&program) {
        Expr::If(if_expr) => {
            assert_eq!(if_expr.consequence.to_string(), "{ x }");
            assert_eq!(
                if_expr.alternative.as_ref().map(|alt| alt.to_string()),
                Some("{ y }".to_string())
            );
        }
        other => panic!("expected an if expression, got {:?}", other),
    }

    assert_eq!(program.to_string(), "if ((x < y)) { x } else { y }");
}

#[test]
fn test_parse_function_literal() {
    let program = parse_ok("fn(x, y) { x + y; }");

    match single_expression(&program) {
        Expr::Function(function) => {
            let params: Vec<&str> = function
                .parameters
                .iter()
                .map(|param| param.value.as_str())
                .collect();
            assert_eq!(params, vec!["x", "y"]);
            assert_eq!(function.body.body.len(), 1);
            assert_eq!(function.body.to_string(), "{ (x + y) }");
        }
        other => panic!("expected a function literal, got {:?}", other),
    }
}

#[test]
fn test_parse_function_parameters() {
    let cases = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Function(function) => {
                let params: Vec<&str> = function
                    .parameters
                    .iter()
                    .map(|param| param.value.as_str())
                    .collect();
                assert_eq!(params, expected);
            }
            other => panic!("expected a function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_call_expression() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");

    match single_expression(&program) {
        Expr::Call(call) => {
            assert_eq!(call.function.to_string(), "add");
            let args: Vec<String> = call.arguments.iter().map(|arg| arg.to_string()).collect();
            assert_eq!(args, vec!["1", "(2 * 3)", "(4 + 5)"]);
        }
        other => panic!("expected a call expression, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_program() {
    let program = parse_ok("");

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_let_missing_assign() {
    let (program, errors) = parse("let x 5;");

    assert!(!errors.is_empty());
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be ASSIGN, got INT instead"
    );
    assert!(program
        .statements
        .iter()
        .all(|stmt| !matches!(stmt, Stmt::Let(_))));
}

#[test]
fn test_let_statement_errors() {
    assert_eq!(
        error_messages("let = 10;"),
        vec![
            "expected next token to be IDENT, got ASSIGN instead",
            "no prefix parse function for ASSIGN found",
        ]
    );
    assert_eq!(
        error_messages("let 838383;"),
        vec!["expected next token to be IDENT, got INT instead"]
    );
}

#[test]
fn test_errors_accumulate_in_order() {
    let (program, errors) = parse("let = 1; let x 2; let y = 3;");

    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be IDENT, got ASSIGN instead",
            "no prefix parse function for ASSIGN found",
            "expected next token to be ASSIGN, got INT instead",
        ]
    );

    // The well formed statement at the end still comes through
    assert!(matches!(program.statements.last(), Some(Stmt::Let(_))));
    assert_eq!(program.statements.last().map(|s| s.to_string()), Some("let y = 3;".to_string()));
}

#[test]
fn test_no_prefix_parse_function() {
    let (program, errors) = parse("+5;");

    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert_eq!(messages, vec!["no prefix parse function for PLUS found"]);

    // Parsing carries on with the next token
    assert_eq!(program.to_string(), "5");
}

#[test]
fn test_illegal_token_is_reported() {
    let (_, errors) = parse("let x = @;");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "no prefix parse function for ILLEGAL found"
    );
    assert_eq!(errors[0].get_position().0, 8);
}

#[test]
fn test_let_keeps_statement_without_value() {
    let (program, errors) = parse("let x = ;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Stmt::Let(stmt) => {
            assert_eq!(stmt.name.value, "x");
            assert!(stmt.value.is_none());
        }
        other => panic!("expected a let statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "let x = ;");
}

#[test]
fn test_integer_overflow_keeps_node() {
    let (program, errors) = parse("99999999999999999999;");

    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert_eq!(
        messages,
        vec!["could not parse 99999999999999999999 as number"]
    );

    match single_expression(&program) {
        Expr::Integer(int) => {
            assert_eq!(int.value, None);
            assert_eq!(int.token_literal(), "99999999999999999999");
        }
        other => panic!("expected an integer, got {:?}", other),
    }
}

#[test]
fn test_missing_closing_paren() {
    assert_eq!(
        error_messages("(1 + 2"),
        vec!["expected next token to be RPAREN, got EOF instead"]
    );
}

#[test]
fn test_unterminated_block() {
    let (program, errors) = parse("if (x) { x");

    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert_eq!(
        messages,
        vec!["expected next token to be RBRACE, got EOF instead"]
    );
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_render_parse_render_is_stable() {
    let sources = [
        "let x = -a * b;",
        "return (a + b) * c;",
        "a + b * c + d / e - f",
        "!-a == !true",
        "if (x < y) { x } else { y }",
        "let add = fn(x, y) { x + y; };",
        "add(1, 2 * 3, fn(a) { a })",
        "let x = 5; return x;",
    ];

    for source in sources {
        let first = parse_ok(source).to_string();
        let second = parse_ok(&first).to_string();

        assert_eq!(first, second, "source: {}", source);
    }
}

#[test]
fn test_parser_is_done_at_eof() {
    let mut parser = Parser::new(Lexer::new("x"));

    assert_eq!(parser.parse_program().to_string(), "x");
    // A second run finds nothing left
    assert!(parser.parse_program().is_empty());
    assert!(parser.errors().is_empty());
}

#[test]
fn test_parser_starts_with_two_tokens() {
    let parser = Parser::new(Lexer::new("let x"));

    assert_eq!(parser.current_token().literal, "let");
    assert_eq!(parser.peek_token().literal, "x");
    assert_eq!(parser.peek_token_kind(), TokenKind::Ident);
}

fn is_nesting_error(error: &Error) -> bool {
    matches!(error.get_kind(), ErrorImpl::NestingTooDeep { .. })
}

#[test]
fn test_deep_prefix_nesting_is_reported() {
    let (program, errors) = parse(&format!("{}5;", "-".repeat(100_000)));

    assert!(!errors.is_empty());
    assert!(errors.iter().all(is_nesting_error), "{:?}", errors[0]);
    // The first operator past the limit is the one reported
    assert_eq!(errors[0].get_position().0, MAX_NESTING_DEPTH);

    assert_eq!(
        program.statements[0].to_string(),
        format!(
            "{}{}",
            "(-".repeat(MAX_NESTING_DEPTH),
            ")".repeat(MAX_NESTING_DEPTH)
        )
    );
    // The rest of the input is still parsed
    assert!(program.to_string().contains("(-5)"));
}

#[test]
fn test_long_infix_chain_is_reported() {
    let (program, errors) = parse(&format!("1{}", "+1".repeat(50_000)));

    assert!(!errors.is_empty());
    assert!(errors.iter().all(is_nesting_error), "{:?}", errors[0]);
    // The last operand that no longer fits is the first one reported
    assert_eq!(errors[0].get_position().0, 2 * (MAX_NESTING_DEPTH - 1));

    let first = program.statements[0].to_string();
    assert_eq!(first.matches('+').count(), MAX_NESTING_DEPTH - 1);
    assert!(!program.to_string().is_empty());
}

#[test]
fn test_deep_grouping_is_reported() {
    let depth = MAX_NESTING_DEPTH * 4;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let (_, errors) = parse(&source);

    assert!(errors.iter().any(is_nesting_error));
}

#[test]
fn test_deep_blocks_are_reported() {
    let depth = MAX_NESTING_DEPTH;
    let source = format!("{}x{}", "if (x) { ".repeat(depth), " }".repeat(depth));
    let (_, errors) = parse(&source);

    assert!(errors.iter().any(is_nesting_error));
}

#[test]
fn test_nesting_below_the_limit_parses() {
    // The statement itself takes the first level
    let depth = MAX_NESTING_DEPTH - 1;
    let group = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let chain = format!("1{}", "+1".repeat(MAX_NESTING_DEPTH - 2));

    let program = parse_ok(&format!("{}; {}; {};", group, group, chain));

    assert_eq!(program.len(), 3);
    assert_eq!(program.statements[0].to_string(), "1");
    assert_eq!(program.statements[1].to_string(), "1");
}
