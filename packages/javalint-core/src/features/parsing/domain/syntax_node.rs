//! Java syntax node representation
//!
//! Abstracts tree-sitter nodes for use in domain logic. Only the constructs
//! the pattern analyses distinguish get their own variant; everything else
//! falls into `Other`.

use crate::shared::models::Span;

/// Syntax node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    // Definitions
    ClassDef,
    MethodDef,

    // Statements
    IfStmt,
    ForStmt,
    WhileStmt,
    DoStmt,
    SwitchStmt,
    TryStmt,
    ReturnStmt,

    // Other
    Block,
    Other(String),
}

impl SyntaxKind {
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            SyntaxKind::IfStmt
                | SyntaxKind::ForStmt
                | SyntaxKind::WhileStmt
                | SyntaxKind::DoStmt
                | SyntaxKind::SwitchStmt
                | SyntaxKind::TryStmt
        )
    }
}

/// Syntax node with an optional source position
///
/// A node without a span contributes no line to any fold; traversal
/// terminates on `children.is_empty()`.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Option<Span>,
    pub children: Vec<SyntaxNode>,

    /// Original tree-sitter kind (for debugging)
    pub raw_kind: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind) -> Self {
        Self {
            kind,
            span: None,
            children: Vec::new(),
            raw_kind: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = Some(raw_kind.into());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// 1-based line the node starts on, if the parser annotated one
    pub fn start_line(&self) -> Option<u32> {
        self.span.map(|s| s.start_line)
    }

    /// Total number of nodes in this subtree, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_kind_is_control_flow() {
        assert!(SyntaxKind::IfStmt.is_control_flow());
        assert!(SyntaxKind::ForStmt.is_control_flow());
        assert!(!SyntaxKind::MethodDef.is_control_flow());
        assert!(!SyntaxKind::Other("identifier".to_string()).is_control_flow());
    }

    #[test]
    fn test_node_count() {
        let tree = SyntaxNode::new(SyntaxKind::Block).with_children(vec![
            SyntaxNode::new(SyntaxKind::ForStmt)
                .with_children(vec![SyntaxNode::new(SyntaxKind::ReturnStmt)]),
            SyntaxNode::new(SyntaxKind::IfStmt),
        ]);
        assert_eq!(tree.node_count(), 4);
        assert!(!tree.is_leaf());
        assert!(tree.children[1].is_leaf());
    }

    #[test]
    fn test_start_line_absent_without_span() {
        let node = SyntaxNode::new(SyntaxKind::ForStmt);
        assert_eq!(node.start_line(), None);

        let node = node.with_span(Span::new(7, 0, 9, 1));
        assert_eq!(node.start_line(), Some(7));
    }
}
