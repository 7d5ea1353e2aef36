/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait, the `Program` root and the `Stmt`/`Expr` enums
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
///
/// Every node renders through `Display` into a canonical, fully parenthesised
/// form. That rendering is what the parser tests compare against.
pub mod ast;
pub mod expressions;
pub mod statements;
