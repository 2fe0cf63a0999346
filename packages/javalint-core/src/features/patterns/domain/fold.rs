//! Generic pre-order tree fold

use crate::features::parsing::domain::SyntaxNode;

/// Apply `f` to `root` and every descendant in pre-order, collecting the
/// values that are present into a flat sequence.
///
/// The root's own value (when present) precedes its children's results;
/// children contribute in order.
pub fn fold_tree<T, F>(root: &SyntaxNode, f: &F) -> Vec<T>
where
    F: Fn(&SyntaxNode) -> Option<T>,
{
    let mut acc = Vec::new();
    fold_into(root, f, &mut acc);
    acc
}

fn fold_into<T, F>(node: &SyntaxNode, f: &F, acc: &mut Vec<T>)
where
    F: Fn(&SyntaxNode) -> Option<T>,
{
    if let Some(v) = f(node) {
        acc.push(v);
    }
    for child in &node.children {
        fold_into(child, f, acc);
    }
}
