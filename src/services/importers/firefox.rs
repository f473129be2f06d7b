//! Firefox `places.sqlite` importer.
//!
//! Folders and bookmarks both live in `moz_bookmarks`, told apart by the
//! `type` column; bookmark urls come from `moz_places`. The places root
//! (the row whose parent is 0) becomes the tree root.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rusqlite::{params, Connection};
use tracing::debug;

use super::ImporterTrait;
use crate::database::Database;
use crate::tree::builder::build_bookmark_tree;
use crate::tree::node::Tree;
use crate::types::bookmark::{Bookmark, Folder, NO_TITLE};
use crate::types::errors::ImportError;

// toolkit/components/places/nsNavBookmarks.h
const TYPE_BOOKMARK: i64 = 1;
const TYPE_FOLDER: i64 = 2;

const FOLDERS_QUERY: &str =
    "SELECT id, title, parent FROM moz_bookmarks WHERE type = ?1 ORDER BY id";

const BOOKMARKS_QUERY: &str = "SELECT b.id, b.title, b.parent, p.url, NULL, NULL
     FROM moz_bookmarks b
     JOIN moz_places p ON b.fk = p.id
     WHERE b.type = ?1
     ORDER BY p.id";

// Profiles older than Firefox 55 keep favicons inline in places.sqlite.
const BOOKMARKS_WITH_FAVICONS_QUERY: &str = "SELECT b.id, b.title, b.parent, p.url, f.mime_type, f.data
     FROM moz_bookmarks b
     JOIN moz_places p ON b.fk = p.id
     LEFT JOIN moz_favicons f ON p.favicon_id = f.id
     WHERE b.type = ?1
     ORDER BY p.id";

/// Reads a Firefox profile's `places.sqlite`.
#[derive(Debug, Default)]
pub struct FirefoxImporter;

impl FirefoxImporter {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the tree from an already opened places connection.
    pub fn assemble_from_connection(&self, conn: &Connection) -> Result<Tree, ImportError> {
        let folders = read_folders(conn)?;
        let bookmarks = read_bookmarks(conn)?;
        debug!(
            folders = folders.len(),
            bookmarks = bookmarks.len(),
            "Read Firefox places"
        );
        Ok(build_bookmark_tree(folders, bookmarks)?)
    }
}

impl ImporterTrait for FirefoxImporter {
    fn assemble_import_tree(&self, source: &Path) -> Result<Tree, ImportError> {
        let conn = Database::open_foreign(source)?;
        self.assemble_from_connection(&conn)
    }
}

fn read_folders(conn: &Connection) -> Result<Vec<Folder>, ImportError> {
    let mut stmt = conn.prepare(FOLDERS_QUERY)?;
    let rows = stmt.query_map(params![TYPE_FOLDER], |row| {
        let id: i64 = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        let parent: Option<i64> = row.get(2)?;
        Ok(Folder {
            id,
            name: title.filter(|t| !t.is_empty()).unwrap_or_else(|| NO_TITLE.to_string()),
            parent_id: parent.filter(|p| *p != 0),
        })
    })?;

    let mut folders = Vec::new();
    for row in rows {
        folders.push(row?);
    }
    Ok(folders)
}

fn read_bookmarks(conn: &Connection) -> Result<Vec<Bookmark>, ImportError> {
    let query = if has_favicons_table(conn)? {
        BOOKMARKS_WITH_FAVICONS_QUERY
    } else {
        BOOKMARKS_QUERY
    };

    let mut stmt = conn.prepare(query)?;
    let rows = stmt.query_map(params![TYPE_BOOKMARK], |row| {
        let id: i64 = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        let folder_id: i64 = row.get(2)?;
        let url: Option<String> = row.get(3)?;
        let mime: Option<String> = row.get(4)?;
        let data: Option<Vec<u8>> = row.get(5)?;

        let bookmark = Bookmark::new(id, title.unwrap_or_default(), url.unwrap_or_default(), folder_id);
        Ok(bookmark.with_icon(favicon_data_url(mime.as_deref(), data.as_deref())))
    })?;

    let mut bookmarks = Vec::new();
    for row in rows {
        bookmarks.push(row?);
    }
    Ok(bookmarks)
}

fn has_favicons_table(conn: &Connection) -> Result<bool, ImportError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'moz_favicons'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Encodes raw favicon bytes as a `data:` url, the text form icons are
/// stored in. Missing or empty data yields an empty icon.
pub fn favicon_data_url(mime: Option<&str>, data: Option<&[u8]>) -> Vec<u8> {
    match data {
        Some(bytes) if !bytes.is_empty() => {
            let mime = mime.filter(|m| !m.is_empty()).unwrap_or("image/png");
            format!("data:{};base64,{}", mime, BASE64.encode(bytes)).into_bytes()
        }
        _ => Vec::new(),
    }
}
