/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression enum and the visitor contract
/// - expressions: Definitions for each expression node
/// - printer: A visitor rendering expressions in prefix form
pub mod ast;
pub mod expressions;
pub mod printer;
