/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node tags, the `Expression`/`Statement` variants and scopes
/// - expressions: Identifiers, literals and the unary/binary containers
/// - statements: Declarations, assignations, loops and conditional chains
pub mod ast;
pub mod expressions;
pub mod statements;
