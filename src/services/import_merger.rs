//! Merges an assembled foreign tree into the internal store.
//!
//! Folders are inserted parent-before-child with a worklist seeded by the
//! foreign roots, so foreign ids may appear in any order. Bookmarks follow
//! in ascending foreign id, re-pointed through the foreign -> internal id
//! map. Everything runs in one transaction.

use std::collections::{HashMap, HashSet, VecDeque};

use rusqlite::Connection;
use serde::Serialize;
use tracing::{debug, info};

use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::tree::node::{Entry, Tree};
use crate::tree::walker::flatten;
use crate::types::bookmark::{Bookmark, Folder, ROOT_FOLDER_ID};
use crate::types::errors::ImportError;

/// Number of records written by one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub folders: usize,
    pub bookmarks: usize,
}

/// Writes foreign records into the internal store.
pub struct ImportMerger<'a> {
    conn: &'a Connection,
}

impl<'a> ImportMerger<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Flattens `tree`, splits it into folders and bookmarks and merges them.
    ///
    /// The foreign root and every folder without a parent are placed under
    /// the internal root folder.
    pub fn merge(&self, tree: &Tree) -> Result<MergeReport, ImportError> {
        let mut folders = Vec::new();
        let mut bookmarks = Vec::new();
        for node in flatten(tree) {
            match node.entry() {
                Entry::Folder(folder) => folders.push(folder.clone()),
                Entry::Bookmark(bookmark) => bookmarks.push(bookmark.clone()),
            }
        }
        self.merge_records(folders, bookmarks)
    }

    /// Merges flat foreign records.
    ///
    /// A folder with no parent, or linked to itself, counts as a foreign
    /// root. Siblings keep their input order.
    ///
    /// # Errors
    /// - [`ImportError::Integrity`] for duplicate folder ids, or when some
    ///   folders never reach a foreign root (dangling or cyclic parents).
    /// - [`ImportError::UnknownParent`] when a bookmark's folder was never merged.
    ///
    /// On error nothing is written.
    pub fn merge_records(
        &self,
        folders: Vec<Folder>,
        mut bookmarks: Vec<Bookmark>,
    ) -> Result<MergeReport, ImportError> {
        let mut seen = HashSet::with_capacity(folders.len());
        let mut waiting: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut ready: VecDeque<(usize, i64)> = VecDeque::new();

        for (index, folder) in folders.iter().enumerate() {
            if !seen.insert(folder.id) {
                return Err(ImportError::Integrity(format!(
                    "folder id {} appears more than once",
                    folder.id
                )));
            }
            match folder.parent_id {
                Some(parent_id) if parent_id != folder.id => {
                    waiting.entry(parent_id).or_default().push(index);
                }
                _ => ready.push_back((index, ROOT_FOLDER_ID)),
            }
        }

        let tx = self.conn.unchecked_transaction()?;
        let mut store = BookmarkManager::new(&tx);
        let mut resolved: HashMap<i64, i64> = HashMap::with_capacity(folders.len());

        while let Some((index, parent)) = ready.pop_front() {
            let folder = &folders[index];
            let internal_id = store.insert_folder(&folder.name, parent)?;
            resolved.insert(folder.id, internal_id);
            if let Some(children) = waiting.remove(&folder.id) {
                ready.extend(children.into_iter().map(|child| (child, internal_id)));
            }
        }

        if resolved.len() != folders.len() {
            let stuck: Vec<String> = folders
                .iter()
                .filter(|folder| !resolved.contains_key(&folder.id))
                .map(|folder| format!("{} (parent {:?})", folder.id, folder.parent_id))
                .collect();
            return Err(ImportError::Integrity(format!(
                "folders never reach an imported root: {}",
                stuck.join(", ")
            )));
        }
        debug!(folders = resolved.len(), "Merged folders");

        bookmarks.sort_by_key(|bookmark| bookmark.id);
        for bookmark in &bookmarks {
            let folder_id = resolved.get(&bookmark.folder_id).copied().ok_or(
                ImportError::UnknownParent {
                    id: bookmark.id,
                    parent_id: bookmark.folder_id,
                },
            )?;
            store.insert_bookmark(&bookmark.title, &bookmark.url, &bookmark.icon, folder_id)?;
        }

        tx.commit()?;

        let report = MergeReport {
            folders: resolved.len(),
            bookmarks: bookmarks.len(),
        };
        info!(
            folders = report.folders,
            bookmarks = report.bookmarks,
            "Import merged"
        );
        Ok(report)
    }
}
