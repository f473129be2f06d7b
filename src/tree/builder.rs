//! Assembles flat, parent-referencing records into a [`Tree`].

use std::collections::{HashMap, HashSet};

use super::node::{Entry, NodeId, Tree};
use super::walker::flatten_ids;
use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::TreeError;

/// Builds a folder tree from flat records.
///
/// Exactly one record must have no parent; it becomes the root. Children
/// are attached in input order, so sibling order mirrors the record list.
///
/// # Errors
/// - [`TreeError::DuplicateId`] when two folders share an id.
/// - [`TreeError::Structural`] for zero or several roots, a parent id missing
///   from the record set, or records that never connect to the root.
pub fn build_folder_tree(records: Vec<Folder>) -> Result<Tree, TreeError> {
    let mut seen = HashSet::with_capacity(records.len());
    for folder in &records {
        folder.validate()?;
        if !seen.insert(folder.id) {
            return Err(TreeError::DuplicateId(folder.id));
        }
    }

    let roots: Vec<i64> = records
        .iter()
        .filter(|folder| folder.is_root())
        .map(|folder| folder.id)
        .collect();
    match roots.len() {
        1 => {}
        0 => return Err(TreeError::Structural("no root folder".to_string())),
        _ => {
            return Err(TreeError::Structural(format!(
                "multiple root folders: {:?}",
                roots
            )))
        }
    }

    let count = records.len();
    let mut tree = Tree::with_capacity(count);
    let mut by_id: HashMap<i64, NodeId> = HashMap::with_capacity(count);
    let mut links: Vec<(NodeId, Option<i64>)> = Vec::with_capacity(count);

    for folder in records {
        let folder_id = folder.id;
        let parent_id = folder.parent_id;
        let handle = tree.push(Entry::Folder(folder));
        by_id.insert(folder_id, handle);
        links.push((handle, parent_id));
    }

    for (handle, parent_id) in links {
        match parent_id {
            None => tree.set_root(handle),
            Some(parent_id) => {
                let parent = by_id.get(&parent_id).copied().ok_or_else(|| {
                    TreeError::Structural(format!(
                        "folder {} references missing parent {}",
                        tree.node(handle).id(),
                        parent_id
                    ))
                })?;
                tree.attach(parent, handle);
            }
        }
    }

    let reachable = flatten_ids(&tree).len();
    if reachable != count {
        return Err(TreeError::Structural(format!(
            "{} folder(s) form a cycle detached from the root",
            count - reachable
        )));
    }

    Ok(tree)
}

/// Attaches bookmarks to an already built folder tree.
///
/// Each bookmark is appended to its folder's children in input order, after
/// the folder's sub-folders. The tree is left untouched when an error is
/// returned.
///
/// # Errors
/// - [`TreeError::DuplicateId`] when two bookmarks share an id.
/// - [`TreeError::UnknownParent`] when a bookmark's folder is not in the tree.
pub fn attach_bookmarks(tree: &mut Tree, records: Vec<Bookmark>) -> Result<(), TreeError> {
    let folders = tree.folder_index();

    let mut seen = HashSet::with_capacity(records.len());
    let mut parents = Vec::with_capacity(records.len());
    for bookmark in &records {
        bookmark.validate()?;
        if !seen.insert(bookmark.id) {
            return Err(TreeError::DuplicateId(bookmark.id));
        }
        let parent = folders.get(&bookmark.folder_id).copied().ok_or(
            TreeError::UnknownParent {
                id: bookmark.id,
                parent_id: bookmark.folder_id,
            },
        )?;
        parents.push(parent);
    }

    for (bookmark, parent) in records.into_iter().zip(parents) {
        let handle = tree.push(Entry::Bookmark(bookmark));
        tree.attach(parent, handle);
    }
    Ok(())
}

/// Builds the combined tree: folders first, then bookmarks attached.
pub fn build_bookmark_tree(folders: Vec<Folder>, bookmarks: Vec<Bookmark>) -> Result<Tree, TreeError> {
    let mut tree = build_folder_tree(folders)?;
    attach_bookmarks(&mut tree, bookmarks)?;
    Ok(tree)
}
