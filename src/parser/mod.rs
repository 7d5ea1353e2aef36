//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from the lexer one at a
//! time and builds an AST. It uses a Pratt parser for expressions with
//! operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, literals, grouping,
//!   `if` expressions, function literals and calls)
//! - Error recovery: diagnostics are collected and parsing carries on with the
//!   next statement
//!
//! Prefix and infix behaviours are looked up per token kind in `lookups`,
//! together with the binding power used for precedence climbing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
