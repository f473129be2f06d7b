//! App Core for Frostmark.
//!
//! Holds the internal store and the settings engine and exposes the
//! operations the CLI and RPC front ends call: read the tree, render it,
//! export it, import into it, edit it.

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::database::connection::Database;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::platform;
use crate::services::editor::Editor;
use crate::services::exporter;
use crate::services::import_merger::{ImportMerger, MergeReport};
use crate::services::importers::{self, Browser};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::tree::builder::build_bookmark_tree;
use crate::tree::node::Tree;
use crate::tree::{json, printer};
use crate::types::errors::ImportError;
use crate::types::settings::Settings;

/// File name of the internal store inside the data directory.
pub const DATABASE_FILE: &str = "frostmark.db";

/// Picks the store location: an explicit path (flag or `FROSTMARK_DB`)
/// wins, then `general.database_path`, then the platform data directory.
pub fn resolve_database_path(explicit: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match settings.general.database_path.as_deref() {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => platform::get_data_dir().join(DATABASE_FILE),
    }
}

/// Central application struct.
///
/// `BookmarkManager` borrows the connection, so it is created on demand
/// through [`App::bookmarks`].
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Opens (or creates) the store at `db_path`.
    pub fn new(db_path: &Path, settings_engine: SettingsEngine) -> Result<Self, Box<dyn Error>> {
        let db = Database::open(db_path)?;
        debug!(path = %db_path.display(), "Opened bookmark store");
        Ok(Self { db, settings_engine })
    }

    /// App over a fresh in-memory store.
    pub fn in_memory(settings_engine: SettingsEngine) -> Result<Self, Box<dyn Error>> {
        let db = Database::open_in_memory()?;
        Ok(Self { db, settings_engine })
    }

    pub fn bookmarks(&self) -> BookmarkManager<'_> {
        BookmarkManager::new(self.db.connection())
    }

    /// Builds the tree from a fresh snapshot of the stored records.
    pub fn fetch_tree(&self) -> Result<Tree, Box<dyn Error>> {
        let store = self.bookmarks();
        let folders = store.list_folders()?;
        let bookmarks = store.list_bookmarks()?;
        Ok(build_bookmark_tree(folders, bookmarks)?)
    }

    /// ASCII outline of the stored tree.
    pub fn render_tree(&self) -> Result<Vec<String>, Box<dyn Error>> {
        Ok(printer::render(&self.fetch_tree()?))
    }

    /// Stored tree as a pretty JSON document.
    pub fn tree_json(&self) -> Result<String, Box<dyn Error>> {
        Ok(json::to_json(&self.fetch_tree()?)?)
    }

    pub fn tree_json_value(&self) -> Result<serde_json::Value, Box<dyn Error>> {
        Ok(json::to_json_value(&self.fetch_tree()?)?)
    }

    /// Writes the stored tree as bookmark-exchange HTML to `path`.
    pub fn export_to(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let tree = self.fetch_tree()?;
        exporter::export_to(&tree, path)?;
        info!(path = %path.display(), "Exported bookmarks");
        Ok(())
    }

    /// Reads `path` with `browser`'s importer and merges it into the store.
    pub fn import_from(&self, browser: Browser, path: &Path) -> Result<MergeReport, ImportError> {
        info!(browser = %browser, path = %path.display(), "Importing bookmarks");
        let tree = importers::assemble_import_tree(browser, path)?;
        ImportMerger::new(self.db.connection()).merge(&tree)
    }

    pub fn editor(&self) -> Editor<BookmarkManager<'_>> {
        Editor::new(self.bookmarks())
    }

    pub fn settings(&self) -> &Settings {
        self.settings_engine.get_settings()
    }
}
