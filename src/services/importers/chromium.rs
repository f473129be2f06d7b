//! Chrome and Opera `Bookmarks` JSON importer.
//!
//! Both browsers store a `roots` object of nested nodes. Chrome exposes
//! `bookmark_bar`, `other` and `synced`; Opera adds a `custom_root` map
//! (speed dial, trash, unsorted, ...) which is walked in key order between
//! the bookmark bar and `other`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Browser, ImporterTrait};
use crate::tree::builder::build_bookmark_tree;
use crate::tree::node::Tree;
use crate::types::bookmark::{Bookmark, Folder, NO_TITLE};
use crate::types::errors::ImportError;

/// Id of the synthetic folder wrapping all roots.
const UMBRELLA_ID: i64 = 0;

#[derive(Debug, Deserialize)]
struct BookmarksFile {
    roots: Roots,
}

#[derive(Debug, Default, Deserialize)]
struct Roots {
    bookmark_bar: Option<RawNode>,
    custom_root: Option<BTreeMap<String, RawNode>>,
    other: Option<RawNode>,
    synced: Option<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl RawNode {
    fn is_folder(&self) -> bool {
        self.kind.as_deref() == Some("folder")
    }

    fn is_url(&self) -> bool {
        self.kind.as_deref() == Some("url")
    }

    fn numeric_id(&self) -> Result<i64, ImportError> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| ImportError::Parse("bookmark node without an id".to_string()))?;
        raw.trim()
            .parse()
            .map_err(|_| ImportError::Parse(format!("bookmark node id is not an integer: {:?}", raw)))
    }
}

/// Reads a Chromium-family `Bookmarks` file.
#[derive(Debug)]
pub struct ChromiumImporter {
    browser: Browser,
}

impl ChromiumImporter {
    pub fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Assembles the tree from the JSON document text.
    pub fn assemble_from_str(&self, raw: &str) -> Result<Tree, ImportError> {
        let file: BookmarksFile = serde_json::from_str(raw)
            .map_err(|e| ImportError::Parse(format!("{} bookmarks: {}", self.browser, e)))?;

        let mut records = Records::default();
        records.folders.push(Folder::new(UMBRELLA_ID, NO_TITLE, None));
        for top in ordered_roots(&file.roots) {
            records.walk(top, UMBRELLA_ID)?;
        }

        debug!(
            browser = %self.browser,
            folders = records.folders.len(),
            bookmarks = records.bookmarks.len(),
            "Read Chromium bookmarks"
        );
        Ok(build_bookmark_tree(records.folders, records.bookmarks)?)
    }
}

impl ImporterTrait for ChromiumImporter {
    fn assemble_import_tree(&self, source: &Path) -> Result<Tree, ImportError> {
        let raw = fs::read_to_string(source)
            .map_err(|e| ImportError::Io(format!("{}: {}", source.display(), e)))?;
        self.assemble_from_str(&raw)
    }
}

fn ordered_roots(roots: &Roots) -> Vec<&RawNode> {
    let mut ordered = Vec::new();
    ordered.extend(roots.bookmark_bar.iter());
    if let Some(custom) = &roots.custom_root {
        ordered.extend(custom.values());
    }
    ordered.extend(roots.other.iter());
    ordered.extend(roots.synced.iter());
    ordered.into_iter().filter(|node| node.is_folder()).collect()
}

#[derive(Default)]
struct Records {
    folders: Vec<Folder>,
    bookmarks: Vec<Bookmark>,
}

impl Records {
    /// Collects `node` and its descendant folders in pre-order; each folder's
    /// own bookmarks follow in document order.
    fn walk(&mut self, node: &RawNode, parent_id: i64) -> Result<(), ImportError> {
        let id = node.numeric_id()?;
        let name = node.name.clone().unwrap_or_else(|| NO_TITLE.to_string());
        self.folders.push(Folder::new(id, name, Some(parent_id)));

        for child in node.children.iter().filter(|child| child.is_url()) {
            let url = child.url.clone().unwrap_or_default();
            let title = child.name.clone().unwrap_or_default();
            self.bookmarks.push(Bookmark::new(child.numeric_id()?, title, url, id));
        }
        for child in node.children.iter().filter(|child| child.is_folder()) {
            self.walk(child, id)?;
        }
        Ok(())
    }
}
