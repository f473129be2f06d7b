//! Point edits on stored folders and bookmarks.
//!
//! Every operation validates its target and new value first, then writes a
//! single column of a single row. A rejected edit writes nothing.

use std::collections::HashSet;

use tracing::debug;

use crate::managers::bookmark_manager::{BookmarkField, BookmarkManagerTrait, FolderField};
use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::EditError;

/// Applies edits through a record store.
pub struct Editor<M: BookmarkManagerTrait> {
    store: M,
}

impl<M: BookmarkManagerTrait> Editor<M> {
    pub fn new(store: M) -> Self {
        Self { store }
    }

    fn folder(&self, id: i64) -> Result<Folder, EditError> {
        self.store
            .get_folder(id)?
            .ok_or_else(|| EditError::NotFound(format!("folder {}", id)))
    }

    fn bookmark(&self, id: i64) -> Result<Bookmark, EditError> {
        self.store
            .get_bookmark(id)?
            .ok_or_else(|| EditError::NotFound(format!("bookmark {}", id)))
    }

    pub fn rename_folder(&mut self, folder_id: i64, name: &str) -> Result<(), EditError> {
        self.folder(folder_id)?;
        self.store
            .update_folder(folder_id, FolderField::Name(name.to_string()))?;
        debug!(folder_id, "Renamed folder");
        Ok(())
    }

    /// Sets a bookmark's title; an empty title falls back to its url.
    pub fn rename_bookmark(&mut self, bookmark_id: i64, title: &str) -> Result<(), EditError> {
        let bookmark = self.bookmark(bookmark_id)?;
        let title = if title.is_empty() { bookmark.url } else { title.to_string() };
        self.store
            .update_bookmark(bookmark_id, BookmarkField::Title(title))?;
        debug!(bookmark_id, "Renamed bookmark");
        Ok(())
    }

    /// Moves a folder below another folder.
    ///
    /// # Errors
    /// - [`EditError::SelfParent`] when both ids are equal (checked before any lookup).
    /// - [`EditError::NotFound`] when either folder is missing.
    /// - [`EditError::InvalidValue`] when moving the root folder.
    /// - [`EditError::CircularParent`] when the new parent lies inside the moved folder.
    pub fn change_parent_folder(&mut self, folder_id: i64, parent_id: i64) -> Result<(), EditError> {
        if folder_id == parent_id {
            return Err(EditError::SelfParent(folder_id));
        }

        let child = self.folder(folder_id)?;
        self.folder(parent_id)?;
        if child.is_root() {
            return Err(EditError::InvalidValue(format!(
                "root folder {} can not be moved",
                folder_id
            )));
        }
        if self.is_descendant(parent_id, folder_id)? {
            return Err(EditError::CircularParent {
                id: folder_id,
                parent_id,
            });
        }

        self.store
            .update_folder(folder_id, FolderField::Parent(parent_id))?;
        debug!(folder_id, parent_id, "Moved folder");
        Ok(())
    }

    pub fn change_parent_bookmark(&mut self, bookmark_id: i64, folder_id: i64) -> Result<(), EditError> {
        self.bookmark(bookmark_id)?;
        self.folder(folder_id)?;
        self.store
            .update_bookmark(bookmark_id, BookmarkField::Folder(folder_id))?;
        debug!(bookmark_id, folder_id, "Moved bookmark");
        Ok(())
    }

    pub fn change_bookmark_url(&mut self, bookmark_id: i64, url: &str) -> Result<(), EditError> {
        if url.trim().is_empty() {
            return Err(EditError::InvalidValue("url must not be empty".to_string()));
        }
        self.bookmark(bookmark_id)?;
        self.store
            .update_bookmark(bookmark_id, BookmarkField::Url(url.to_string()))?;
        debug!(bookmark_id, "Changed bookmark url");
        Ok(())
    }

    /// Replaces a bookmark's icon bytes.
    pub fn change_bookmark_icon(&mut self, bookmark_id: i64, icon: Vec<u8>) -> Result<(), EditError> {
        self.bookmark(bookmark_id)?;
        self.store
            .update_bookmark(bookmark_id, BookmarkField::Icon(icon))?;
        debug!(bookmark_id, "Changed bookmark icon");
        Ok(())
    }

    /// Whether `candidate` sits somewhere below `ancestor`, walking parent links upward.
    fn is_descendant(&self, candidate: i64, ancestor: i64) -> Result<bool, EditError> {
        let mut visited = HashSet::new();
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            // stored data should be acyclic; stop rather than spin if it is not
            if !visited.insert(id) {
                return Ok(false);
            }
            current = self.store.get_folder(id)?.and_then(|folder| folder.parent_id);
        }
        Ok(false)
    }

    pub fn into_inner(self) -> M {
        self.store
    }
}
