/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and its top-level items
/// - expressions: Expression nodes and operators
/// - statements: Statement nodes found in function bodies
/// - types: The primitive type model and its compatibility relation
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
