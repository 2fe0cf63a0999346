//! Property tests for the tree fold and the depth collector, checked against
//! a straightforward reference recursion over generated trees.

use javalint_core::{fold_tree, BlockType, NestedBlocks, ParsedTree, Span, SyntaxKind, SyntaxNode};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = SyntaxKind> {
    prop_oneof![
        Just(SyntaxKind::ForStmt),
        Just(SyntaxKind::IfStmt),
        Just(SyntaxKind::Block),
        Just(SyntaxKind::ReturnStmt),
        Just(SyntaxKind::MethodDef),
    ]
}

fn arb_tree() -> impl Strategy<Value = SyntaxNode> {
    arb_kind()
        .prop_map(SyntaxNode::new)
        .prop_recursive(4, 48, 4, |inner| {
            (arb_kind(), prop::collection::vec(inner, 0..4))
                .prop_map(|(kind, children)| SyntaxNode::new(kind).with_children(children))
        })
}

/// Give every node a distinct line in pre-order, so the subtree minimum is
/// always the node's own line.
fn annotate(node: &mut SyntaxNode, next: &mut u32) {
    node.span = Some(Span::new(*next, 0, *next, 1));
    *next += 1;
    for child in &mut node.children {
        annotate(child, next);
    }
}

fn subtree_min_line(node: &SyntaxNode) -> Option<u32> {
    let own = node.start_line();
    node.children
        .iter()
        .filter_map(subtree_min_line)
        .chain(own)
        .min()
}

/// Reference recursion: path-local depth counter, inclusive threshold.
fn reference_lines(
    node: &SyntaxNode,
    block: BlockType,
    max_depth: u32,
    depth: u32,
    out: &mut Vec<u32>,
) {
    let mut depth = depth;
    if block.matches(&node.kind) {
        depth += 1;
        if depth >= max_depth {
            if let Some(line) = subtree_min_line(node) {
                out.push(line);
            }
        }
    }
    for child in &node.children {
        reference_lines(child, block, max_depth, depth, out);
    }
}

proptest! {
    #[test]
    fn fold_visits_every_node_exactly_once(tree in arb_tree()) {
        let visited = fold_tree(&tree, &|_| Some(()));
        prop_assert_eq!(visited.len(), tree.node_count());
    }

    #[test]
    fn fold_with_absent_mapping_is_empty(tree in arb_tree()) {
        let out: Vec<u32> = fold_tree(&tree, &|_| None);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn detector_matches_reference(
        mut tree in arb_tree(),
        max_depth in 0u32..5,
        use_if in any::<bool>(),
    ) {
        let mut next = 1;
        annotate(&mut tree, &mut next);

        let block = if use_if { BlockType::If } else { BlockType::For };
        let mut expected = Vec::new();
        reference_lines(&tree, block, max_depth, 0, &mut expected);

        let parsed = ParsedTree::new(
            tree,
            String::new(),
            "Prop.java".to_string(),
            "java".to_string(),
        );
        let detector = NestedBlocks::new(max_depth, block);
        prop_assert_eq!(detector.lines_in_tree(&parsed), expected);
    }
}
