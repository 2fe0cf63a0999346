//! Parsing Feature
//!
//! Responsible for Java AST parsing and syntax tree representation.
//!
//! ## Structure
//! - `domain/` - ParsedTree, SyntaxNode models
//! - `ports/` - Parser trait
//! - `infrastructure/` - TreeSitterParser (tree-sitter-java)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{ParseError, ParsedTree, SyntaxKind, SyntaxNode};
pub use infrastructure::TreeSitterParser;
pub use ports::Parser;
