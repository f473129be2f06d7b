//! JSON rendering of a flattened tree.
//!
//! Each node becomes one object holding its record fields plus a
//! `node_type` discriminator (`"Folder"` or `"Bookmark"`). Icons are
//! emitted as UTF-8 text.

use serde::Serialize;

use super::node::{Entry, Tree};
use super::walker::flatten;
use crate::types::errors::TreeError;

/// Serializable view of a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node_type")]
pub enum JsonEntry<'a> {
    Folder {
        id: i64,
        name: &'a str,
        parent_id: Option<i64>,
    },
    Bookmark {
        id: i64,
        title: &'a str,
        url: &'a str,
        icon: &'a str,
        folder_id: i64,
    },
}

/// Converts every node, in pre-order, to its serializable view.
///
/// # Errors
/// [`TreeError::Encoding`] when a bookmark icon is not valid UTF-8.
pub fn json_entries(tree: &Tree) -> Result<Vec<JsonEntry<'_>>, TreeError> {
    flatten(tree)
        .into_iter()
        .map(|node| match node.entry() {
            Entry::Folder(folder) => Ok(JsonEntry::Folder {
                id: folder.id,
                name: &folder.name,
                parent_id: folder.parent_id,
            }),
            Entry::Bookmark(bookmark) => {
                let icon = std::str::from_utf8(&bookmark.icon).map_err(|e| {
                    TreeError::Encoding(format!("icon of bookmark {}: {}", bookmark.id, e))
                })?;
                Ok(JsonEntry::Bookmark {
                    id: bookmark.id,
                    title: &bookmark.title,
                    url: &bookmark.url,
                    icon,
                    folder_id: bookmark.folder_id,
                })
            }
        })
        .collect()
}

/// Tree as a JSON array value.
pub fn to_json_value(tree: &Tree) -> Result<serde_json::Value, TreeError> {
    let entries = json_entries(tree)?;
    serde_json::to_value(entries).map_err(|e| TreeError::Encoding(e.to_string()))
}

/// Tree as a pretty-printed JSON document.
pub fn to_json(tree: &Tree) -> Result<String, TreeError> {
    let entries = json_entries(tree)?;
    serde_json::to_string_pretty(&entries).map_err(|e| TreeError::Encoding(e.to_string()))
}
