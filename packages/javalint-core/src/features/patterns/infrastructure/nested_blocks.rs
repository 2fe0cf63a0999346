//! Nested block detector
//!
//! Reports lines where FOR/IF blocks nest at or beyond a maximum depth.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{JavalintError, Result};
use crate::features::parsing::domain::{ParsedTree, SyntaxNode};
use crate::features::parsing::infrastructure::TreeSitterParser;
use crate::features::parsing::ports::Parser;
use crate::features::patterns::domain::{fold_tree, BlockType};
use crate::features::patterns::ports::Pattern;

/// Detects FOR/IF blocks nested `max_depth` deep or deeper
///
/// The nesting depth of a node is the number of selected-kind nodes on the
/// path from the root to the node, the node itself included. The bound is
/// inclusive: depth == max_depth qualifies. Each qualifying node is reported
/// at the earliest annotated line found anywhere in its subtree.
pub struct NestedBlocks {
    max_depth: u32,
    block_type: BlockType,
}

impl NestedBlocks {
    pub fn new(max_depth: u32, block_type: BlockType) -> Self {
        Self {
            max_depth,
            block_type,
        }
    }

    /// Run the detection over an already-parsed tree.
    ///
    /// Qualifying nodes with no annotated line anywhere in their subtree are
    /// skipped.
    pub fn lines_in_tree(&self, tree: &ParsedTree) -> Vec<u32> {
        let found = self.collect_nested(&tree.root);
        let lines: Vec<u32> = found
            .iter()
            .filter_map(|node| Self::earliest_line(node))
            .collect();

        debug!(
            "nested_blocks: {} qualifying {} block(s) in {} (max_depth={})",
            lines.len(),
            self.block_type.as_str(),
            tree.file_path,
            self.max_depth
        );

        lines
    }

    /// Collect every selected-kind node whose nesting depth reaches the
    /// threshold, in pre-order.
    ///
    /// `depth` travels by value into recursive calls: siblings never observe
    /// each other's increments, descendants inherit the incremented count.
    /// A fresh accumulator is allocated on every invocation.
    fn collect_nested<'t>(&self, root: &'t SyntaxNode) -> Vec<&'t SyntaxNode> {
        let mut found = Vec::new();
        self.collect_into(root, 0, &mut found);
        found
    }

    fn collect_into<'t>(&self, node: &'t SyntaxNode, depth: u32, found: &mut Vec<&'t SyntaxNode>) {
        let mut depth = depth;
        if self.block_type.matches(&node.kind) {
            depth += 1;
            if depth >= self.max_depth {
                found.push(node);
            }
        }
        for child in &node.children {
            self.collect_into(child, depth, found);
        }
    }

    /// Earliest annotated line inside the node's subtree, the node itself
    /// included. `None` when nothing in the subtree carries a position.
    fn earliest_line(node: &SyntaxNode) -> Option<u32> {
        fold_tree(node, &|n: &SyntaxNode| n.start_line())
            .into_iter()
            .min()
    }
}

impl Pattern for NestedBlocks {
    fn name(&self) -> &'static str {
        "nested_blocks"
    }

    fn value(&self, path: &Path) -> Result<Vec<u32>> {
        let source = fs::read_to_string(path)?;
        let parser = TreeSitterParser::java();
        let tree = parser.parse(&source, &path.to_string_lossy())?;

        // Parse failure is the caller's concern; surface it instead of
        // analyzing a broken tree.
        if tree.has_errors {
            return Err(match tree.errors.first() {
                Some(e) => JavalintError::parse(format!(
                    "{}:{}: {}",
                    tree.file_path, e.span.start_line, e.message
                )),
                None => JavalintError::parse(tree.file_path.clone()),
            });
        }

        Ok(self.lines_in_tree(&tree))
    }
}
