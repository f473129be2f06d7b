use serde::{Deserialize, Serialize};

use super::errors::TreeError;

/// Id of the single well-known root folder.
pub const ROOT_FOLDER_ID: i64 = 0;

/// Name given to the root folder when the store is created.
pub const ROOT_FOLDER_NAME: &str = "ROOT";

/// Placeholder name for folders whose source has no title at all.
pub const NO_TITLE: &str = "<no title>";

/// A folder for grouping bookmarks.
///
/// `parent_id` is `None` only for the root of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl Folder {
    pub fn new(id: i64, name: impl Into<String>, parent_id: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
        }
    }

    /// The store's root folder (id 0, no parent).
    pub fn root() -> Self {
        Self::new(ROOT_FOLDER_ID, ROOT_FOLDER_NAME, None)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Checks the record on its own: non-negative id and no self-link.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.id < 0 {
            return Err(TreeError::Structural(format!(
                "folder id must be non-negative, got {}",
                self.id
            )));
        }
        if self.parent_id == Some(self.id) {
            return Err(TreeError::Structural(format!(
                "folder {} is its own parent",
                self.id
            )));
        }
        Ok(())
    }
}

/// A saved bookmark: title, url, favicon bytes and the folder it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: Vec<u8>,
    pub folder_id: i64,
}

impl Bookmark {
    /// Creates a bookmark with an empty icon. An empty title falls back to the url.
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>, folder_id: i64) -> Self {
        let url = url.into();
        let title = title.into();
        Self {
            id,
            title: if title.is_empty() { url.clone() } else { title },
            url,
            icon: Vec::new(),
            folder_id,
        }
    }

    pub fn with_icon(mut self, icon: Vec<u8>) -> Self {
        self.icon = icon;
        self
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        if self.id < 0 {
            return Err(TreeError::Structural(format!(
                "bookmark id must be non-negative, got {}",
                self.id
            )));
        }
        Ok(())
    }
}
