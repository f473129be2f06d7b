//! Bookmark Manager for Frostmark.
//!
//! Implements `BookmarkManagerTrait`, the record store behind every tree
//! operation, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection, OptionalExtension};

use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::BookmarkError;

/// A single writable folder column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderField {
    Name(String),
    Parent(i64),
}

/// A single writable bookmark column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkField {
    Title(String),
    Url(String),
    Icon(Vec<u8>),
    Folder(i64),
}

/// Trait defining the record store operations.
pub trait BookmarkManagerTrait {
    /// All folders ordered by id.
    fn list_folders(&self) -> Result<Vec<Folder>, BookmarkError>;
    /// All bookmarks ordered by id.
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn get_folder(&self, id: i64) -> Result<Option<Folder>, BookmarkError>;
    fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>, BookmarkError>;
    /// Inserts a folder below `parent_id` and returns its new id.
    fn insert_folder(&mut self, name: &str, parent_id: i64) -> Result<i64, BookmarkError>;
    /// Inserts a bookmark into `folder_id` and returns its new id.
    fn insert_bookmark(
        &mut self,
        title: &str,
        url: &str,
        icon: &[u8],
        folder_id: i64,
    ) -> Result<i64, BookmarkError>;
    fn update_folder(&mut self, id: i64, field: FolderField) -> Result<(), BookmarkError>;
    fn update_bookmark(&mut self, id: i64, field: BookmarkField) -> Result<(), BookmarkError>;
    fn count_folders(&self) -> Result<i64, BookmarkError>;
    fn count_bookmarks(&self) -> Result<i64, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn folder_exists(&self, folder_id: i64) -> Result<bool, BookmarkError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM folders WHERE id = ?1",
            params![folder_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn row_to_folder(row: &rusqlite::Row) -> rusqlite::Result<Folder> {
        Ok(Folder {
            id: row.get(0)?,
            name: row.get(1)?,
            parent_id: row.get(2)?,
        })
    }

    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            icon: row.get(3)?,
            folder_id: row.get(4)?,
        })
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    fn list_folders(&self) -> Result<Vec<Folder>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, parent_id FROM folders ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_folder)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, url, icon, folder_id FROM bookmarks ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_bookmark)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn get_folder(&self, id: i64) -> Result<Option<Folder>, BookmarkError> {
        let folder = self
            .conn
            .query_row(
                "SELECT id, name, parent_id FROM folders WHERE id = ?1",
                params![id],
                Self::row_to_folder,
            )
            .optional()?;
        Ok(folder)
    }

    fn get_bookmark(&self, id: i64) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmark = self
            .conn
            .query_row(
                "SELECT id, title, url, icon, folder_id FROM bookmarks WHERE id = ?1",
                params![id],
                Self::row_to_bookmark,
            )
            .optional()?;
        Ok(bookmark)
    }

    fn insert_folder(&mut self, name: &str, parent_id: i64) -> Result<i64, BookmarkError> {
        if !self.folder_exists(parent_id)? {
            return Err(BookmarkError::FolderNotFound(parent_id));
        }

        self.conn.execute(
            "INSERT INTO folders (name, parent_id) VALUES (?1, ?2)",
            params![name, parent_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_bookmark(
        &mut self,
        title: &str,
        url: &str,
        icon: &[u8],
        folder_id: i64,
    ) -> Result<i64, BookmarkError> {
        if !self.folder_exists(folder_id)? {
            return Err(BookmarkError::FolderNotFound(folder_id));
        }

        self.conn.execute(
            "INSERT INTO bookmarks (title, url, icon, folder_id) VALUES (?1, ?2, ?3, ?4)",
            params![title, url, icon, folder_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Writes exactly one column of one folder row.
    fn update_folder(&mut self, id: i64, field: FolderField) -> Result<(), BookmarkError> {
        let affected = match field {
            FolderField::Name(name) => self.conn.execute(
                "UPDATE folders SET name = ?1 WHERE id = ?2",
                params![name, id],
            )?,
            FolderField::Parent(parent_id) => {
                if !self.folder_exists(parent_id)? {
                    return Err(BookmarkError::FolderNotFound(parent_id));
                }
                self.conn.execute(
                    "UPDATE folders SET parent_id = ?1 WHERE id = ?2",
                    params![parent_id, id],
                )?
            }
        };

        if affected == 0 {
            return Err(BookmarkError::FolderNotFound(id));
        }
        Ok(())
    }

    /// Writes exactly one column of one bookmark row.
    fn update_bookmark(&mut self, id: i64, field: BookmarkField) -> Result<(), BookmarkError> {
        let affected = match field {
            BookmarkField::Title(title) => self.conn.execute(
                "UPDATE bookmarks SET title = ?1 WHERE id = ?2",
                params![title, id],
            )?,
            BookmarkField::Url(url) => self.conn.execute(
                "UPDATE bookmarks SET url = ?1 WHERE id = ?2",
                params![url, id],
            )?,
            BookmarkField::Icon(icon) => self.conn.execute(
                "UPDATE bookmarks SET icon = ?1 WHERE id = ?2",
                params![icon, id],
            )?,
            BookmarkField::Folder(folder_id) => {
                if !self.folder_exists(folder_id)? {
                    return Err(BookmarkError::FolderNotFound(folder_id));
                }
                self.conn.execute(
                    "UPDATE bookmarks SET folder_id = ?1 WHERE id = ?2",
                    params![folder_id, id],
                )?
            }
        };

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        Ok(())
    }

    fn count_folders(&self) -> Result<i64, BookmarkError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM folders", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_bookmarks(&self) -> Result<i64, BookmarkError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))?;
        Ok(count)
    }
}
