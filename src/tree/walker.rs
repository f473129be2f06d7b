//! Pre-order flattening of a [`Tree`].

use super::node::{Node, NodeId, Tree};

/// Returns every node reachable from the root in pre-order: a node first,
/// then each child subtree left to right in attach order.
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub fn flatten(tree: &Tree) -> Vec<&Node> {
    flatten_ids(tree)
        .into_iter()
        .map(|id| tree.node(id))
        .collect()
}

/// Same traversal as [`flatten`], yielding node handles.
pub fn flatten_ids(tree: &Tree) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(tree.len());
    if tree.is_empty() {
        return order;
    }

    let mut stack = vec![tree.root()];
    while let Some(current) = stack.pop() {
        order.push(current);
        stack.extend(tree.node(current).children().iter().rev());
    }
    order
}
