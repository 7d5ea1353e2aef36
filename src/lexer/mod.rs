//! Lexical analysis module.
//!
//! This module contains the streaming lexer (tokenizer) that converts source
//! text into tokens one at a time for the parser. It handles:
//!
//! - Recognition of keywords, identifiers, integer literals and operators
//! - One- and two-character operators (`=`/`==`, `!`/`!=`)
//! - Unrecognised characters, which become `Illegal` tokens instead of errors
//! - Token offsets for diagnostic positioning

pub mod lexer;
pub mod tokens;
