//! Block type selector
//!
//! Identifies which syntax kind counts as a "block" for depth counting.
//! Exactly one selector is active per detector instance.

use crate::features::parsing::domain::SyntaxKind;

/// Which control-flow statement the nesting analysis counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    For,
    If,
}

impl BlockType {
    /// Single place block selection is defined. `For` covers the classic and
    /// the enhanced loop; both parse to `ForStmt`.
    pub fn matches(&self, kind: &SyntaxKind) -> bool {
        match self {
            BlockType::For => matches!(kind, SyntaxKind::ForStmt),
            BlockType::If => matches!(kind, SyntaxKind::IfStmt),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::For => "for",
            BlockType::If => "if",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_selector() {
        assert!(BlockType::For.matches(&SyntaxKind::ForStmt));
        assert!(!BlockType::For.matches(&SyntaxKind::IfStmt));
        assert!(!BlockType::For.matches(&SyntaxKind::WhileStmt));
    }

    #[test]
    fn test_if_selector() {
        assert!(BlockType::If.matches(&SyntaxKind::IfStmt));
        assert!(!BlockType::If.matches(&SyntaxKind::ForStmt));
    }
}
