/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression sum type and the top-level unit
/// - expressions: Definitions for the individual expression forms
pub mod ast;
pub mod expressions;
