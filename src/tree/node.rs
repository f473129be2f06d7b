//! Arena-backed bookmark tree.
//!
//! The [`Tree`] owns every [`Node`]; nodes refer to their children by
//! [`NodeId`] handles into the arena. Trees are built fresh for each
//! operation from flat records and dropped afterwards.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::bookmark::{Bookmark, Folder};

/// Stable handle of a node inside its [`Tree`].
pub type NodeId = usize;

/// Discriminant of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Folder,
    Bookmark,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Folder => "Folder",
            NodeKind::Bookmark => "Bookmark",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record a node wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Folder(Folder),
    Bookmark(Bookmark),
}

impl Entry {
    pub fn kind(&self) -> NodeKind {
        match self {
            Entry::Folder(_) => NodeKind::Folder,
            Entry::Bookmark(_) => NodeKind::Bookmark,
        }
    }

    /// The record's own id. Folder and bookmark ids live in separate spaces.
    pub fn id(&self) -> i64 {
        match self {
            Entry::Folder(folder) => folder.id,
            Entry::Bookmark(bookmark) => bookmark.id,
        }
    }

    /// Id of the folder this record declares as its parent.
    pub fn parent_id(&self) -> Option<i64> {
        match self {
            Entry::Folder(folder) => folder.parent_id,
            Entry::Bookmark(bookmark) => Some(bookmark.folder_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    entry: Entry,
    children: Vec<NodeId>,
}

impl Node {
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn kind(&self) -> NodeKind {
        self.entry.kind()
    }

    pub fn id(&self) -> i64 {
        self.entry.id()
    }

    pub fn parent_id(&self) -> Option<i64> {
        self.entry.parent_id()
    }

    /// Child handles in attach order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match &self.entry {
            Entry::Folder(folder) => Some(folder),
            Entry::Bookmark(_) => None,
        }
    }

    pub fn as_bookmark(&self) -> Option<&Bookmark> {
        match &self.entry {
            Entry::Bookmark(bookmark) => Some(bookmark),
            Entry::Folder(_) => None,
        }
    }
}

/// A rooted tree of folders and bookmarks.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Creates a detached arena; `root` must be set with [`Tree::set_root`]
    /// once the root node has been pushed.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: 0,
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) -> NodeId {
        self.nodes.push(Node {
            entry,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.push(child);
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[self.root]
    }

    /// # Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes held by the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Folder id -> node handle for every folder reachable from the root.
    pub fn folder_index(&self) -> HashMap<i64, NodeId> {
        let mut index = HashMap::new();
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            if let Entry::Folder(folder) = &node.entry {
                index.insert(folder.id, current);
            }
            stack.extend(node.children.iter().rev());
        }
        index
    }
}
