//! ASCII outline rendering.

use super::node::{Entry, Node, NodeId, Tree};

const BRANCH: &str = "|-- ";
const LAST_BRANCH: &str = "+-- ";
const CONTINUE: &str = "|   ";
const BLANK: &str = "    ";

/// One-line label of a node, without any tree-drawing prefix.
///
/// Folders render as `[F] <id>\t<name>`, bookmarks as `[B] <id>\t<title> <url>`.
pub fn label(node: &Node) -> String {
    match node.entry() {
        Entry::Folder(folder) => format!("[F] {}\t{}", folder.id, folder.name),
        Entry::Bookmark(bookmark) => {
            format!("[B] {}\t{} {}", bookmark.id, bookmark.title, bookmark.url)
        }
    }
}

/// Renders the tree as one line per node in pre-order.
///
/// The root has no prefix. Every other line carries one column per
/// ancestor below the root (`|   ` while that ancestor still has siblings
/// to come, blank otherwise) followed by `|-- ` or, for the last sibling,
/// `+-- `.
pub fn render(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.len());
    if tree.is_empty() {
        return lines;
    }

    lines.push(label(tree.root_node()));

    // (node, columns inherited from ancestors, is last sibling)
    let mut stack: Vec<(NodeId, String, bool)> = Vec::new();
    push_children(tree, tree.root(), "", &mut stack);

    while let Some((current, columns, last)) = stack.pop() {
        let node = tree.node(current);
        let branch = if last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", columns, branch, label(node)));

        let nested = format!("{}{}", columns, if last { BLANK } else { CONTINUE });
        push_children(tree, current, &nested, &mut stack);
    }
    lines
}

fn push_children(tree: &Tree, parent: NodeId, columns: &str, stack: &mut Vec<(NodeId, String, bool)>) {
    let children = tree.node(parent).children();
    let last = children.len().saturating_sub(1);
    for (index, child) in children.iter().enumerate().rev() {
        stack.push((*child, columns.to_string(), index == last));
    }
}
