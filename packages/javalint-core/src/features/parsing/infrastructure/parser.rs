//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Parser as TSParser, Tree};

use crate::errors::{JavalintError, Result};
use crate::features::parsing::domain::{ParseError, ParsedTree, SyntaxKind, SyntaxNode};
use crate::features::parsing::ports::Parser;
use crate::shared::models::Span;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Java,
}

impl TreeSitterParser {
    /// Create a Java parser
    pub fn java() -> Self {
        Self {
            language: TreeSitterLanguage::Java,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Java => tree_sitter_java::language(),
        }
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root_node = tree.root_node();
        let root = self.convert_node(&root_node);

        let mut errors = Vec::new();
        collect_errors(&root_node, &mut errors);

        ParsedTree::new(
            root,
            source.to_string(),
            file_path.to_string(),
            self.language_name().to_string(),
        )
        .with_errors(errors)
    }

    /// Convert a tree-sitter node to SyntaxNode
    fn convert_node(&self, node: &tree_sitter::Node) -> SyntaxNode {
        let children: Vec<SyntaxNode> = (0..node.child_count())
            .filter_map(|i| node.child(i))
            .filter(|c| !c.is_extra()) // Skip comments
            .map(|c| self.convert_node(&c))
            .collect();

        SyntaxNode::new(map_node_kind(node.kind()))
            .with_span(node_span(node))
            .with_raw_kind(node.kind())
            .with_children(children)
    }
}

/// Map a tree-sitter-java node kind to our SyntaxKind
///
/// Both `for` forms map to `ForStmt`; the nesting analyses treat the classic
/// and the enhanced loop as the same block kind.
fn map_node_kind(ts_kind: &str) -> SyntaxKind {
    match ts_kind {
        // Definitions
        "class_declaration" | "interface_declaration" | "enum_declaration" => SyntaxKind::ClassDef,
        "method_declaration" | "constructor_declaration" => SyntaxKind::MethodDef,

        // Statements
        "if_statement" => SyntaxKind::IfStmt,
        "for_statement" | "enhanced_for_statement" => SyntaxKind::ForStmt,
        "while_statement" => SyntaxKind::WhileStmt,
        "do_statement" => SyntaxKind::DoStmt,
        "switch_expression" | "switch_statement" => SyntaxKind::SwitchStmt,
        "try_statement" | "try_with_resources_statement" => SyntaxKind::TryStmt,
        "return_statement" => SyntaxKind::ReturnStmt,

        // Other
        "block" | "program" => SyntaxKind::Block,

        // Unknown
        other => SyntaxKind::Other(other.to_string()),
    }
}

fn node_span(node: &tree_sitter::Node) -> Span {
    Span::new(
        node.start_position().row as u32 + 1,
        node.start_position().column as u32,
        node.end_position().row as u32 + 1,
        node.end_position().column as u32,
    )
}

/// Collect parse errors
fn collect_errors(node: &tree_sitter::Node, errors: &mut Vec<ParseError>) {
    if node.is_error() || node.is_missing() {
        errors.push(ParseError {
            message: format!("syntax error near {:?}", node.kind()),
            span: node_span(node),
        });
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_errors(&child, errors);
        }
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| JavalintError::parse(format!("failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| JavalintError::parse("failed to parse source code"))?;

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        match self.language {
            TreeSitterLanguage::Java => ext == "java",
        }
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Java => "java",
        }
    }
}
