//! Bookmark-exchange (Netscape) HTML importer.
//!
//! Reads the `<DL><p>` / `<DT><H3>` / `<DT><A>` markup written by
//! `export` and by most browsers' "export bookmarks" menus. The outermost
//! list becomes a synthetic id-0 root; folders and bookmarks are numbered
//! from 1 in document order.
//!
//! Documents written by `export` carry names, titles and urls verbatim and
//! are read back verbatim. Other browsers escape entities, which are decoded.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::ImporterTrait;
use crate::services::exporter::PREAMBLE;
use crate::tree::builder::build_bookmark_tree;
use crate::tree::node::Tree;
use crate::types::bookmark::{Bookmark, Folder, NO_TITLE};
use crate::types::errors::ImportError;

const TOKEN_PATTERN: &str =
    r"(?is)<DT>\s*<H3(?P<folder_attrs>[^>]*)>(?P<folder>.*?)</H3>|<DT>\s*<A\s+(?P<attrs>[^>]*)>(?P<title>.*?)</A>|(?P<open><DL>)|(?P<close></DL>)";

const ATTRIBUTE_PATTERN: &str = r#"(?i)([A-Z_-]+)\s*=\s*"([^"]*)""#;

const EXPORTED_ANCHOR_PATTERN: &str = r#"^HREF="[^"]*" ICON="[^"]*"$"#;

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).unwrap())
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_REGEX: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_REGEX.get_or_init(|| Regex::new(ATTRIBUTE_PATTERN).unwrap())
}

fn exported_anchor_regex() -> &'static Regex {
    static EXPORTED_ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
    EXPORTED_ANCHOR_REGEX.get_or_init(|| Regex::new(EXPORTED_ANCHOR_PATTERN).unwrap())
}

/// Reads bookmark-exchange HTML files.
#[derive(Debug, Default)]
pub struct NetscapeImporter;

impl NetscapeImporter {
    pub fn new() -> Self {
        Self
    }

    /// Assembles the tree from markup text.
    pub fn assemble_from_str(&self, html: &str) -> Result<Tree, ImportError> {
        let mut folders: Vec<Folder> = Vec::new();
        let mut bookmarks: Vec<Bookmark> = Vec::new();
        let mut open: Vec<i64> = Vec::new();
        let mut heading: Option<i64> = None;
        let mut root_seen = false;
        let verbatim = written_by_exporter(html);
        let text = |raw: &str| {
            if verbatim {
                raw.to_string()
            } else {
                decode_entities(raw)
            }
        };

        for caps in token_regex().captures_iter(html) {
            if caps.name("open").is_some() {
                match heading.take() {
                    Some(folder_id) => open.push(folder_id),
                    None if !root_seen => {
                        root_seen = true;
                        folders.push(Folder::new(0, NO_TITLE, None));
                        open.push(0);
                    }
                    None => {
                        return Err(ImportError::Parse(
                            "list opened without a folder heading".to_string(),
                        ))
                    }
                }
                continue;
            }
            heading = None;

            if caps.name("close").is_some() {
                if open.pop().is_none() {
                    return Err(ImportError::Parse("unbalanced </DL>".to_string()));
                }
            } else if let Some(name) = caps.name("folder") {
                let parent = current(&open)?;
                let id = folders.len() as i64;
                folders.push(Folder::new(id, text(name.as_str()), Some(parent)));
                heading = Some(id);
            } else if let (Some(attrs), Some(title)) = (caps.name("attrs"), caps.name("title")) {
                let folder_id = current(&open)?;
                let mut url = String::new();
                let mut icon = String::new();
                for attr in attribute_regex().captures_iter(attrs.as_str()) {
                    match attr[1].to_ascii_uppercase().as_str() {
                        "HREF" => url = text(&attr[2]),
                        "ICON" => icon = attr[2].to_string(),
                        _ => {}
                    }
                }
                let id = bookmarks.len() as i64 + 1;
                bookmarks.push(
                    Bookmark::new(id, text(title.as_str()), url, folder_id)
                        .with_icon(icon.into_bytes()),
                );
            }
        }

        if !root_seen {
            return Err(ImportError::Parse("no bookmark list found".to_string()));
        }
        if !open.is_empty() {
            return Err(ImportError::Parse(format!("{} unclosed list(s)", open.len())));
        }

        debug!(
            folders = folders.len(),
            bookmarks = bookmarks.len(),
            verbatim,
            "Read bookmark-exchange HTML"
        );
        Ok(build_bookmark_tree(folders, bookmarks)?)
    }
}

impl ImporterTrait for NetscapeImporter {
    fn assemble_import_tree(&self, source: &Path) -> Result<Tree, ImportError> {
        let html = fs::read_to_string(source)
            .map_err(|e| ImportError::Io(format!("{}: {}", source.display(), e)))?;
        self.assemble_from_str(&html)
    }
}

fn current(open: &[i64]) -> Result<i64, ImportError> {
    open.last()
        .copied()
        .ok_or_else(|| ImportError::Parse("entry outside of any list".to_string()))
}

/// Whether `html` is `export` output: the exact preamble, bare `<H3>`
/// headings and anchors carrying only `HREF` then `ICON`.
fn written_by_exporter(html: &str) -> bool {
    html.starts_with(PREAMBLE)
        && token_regex().captures_iter(html).all(|caps| {
            if let Some(attrs) = caps.name("folder_attrs") {
                attrs.as_str().is_empty()
            } else if let Some(attrs) = caps.name("attrs") {
                exported_anchor_regex().is_match(attrs.as_str())
            } else {
                true
            }
        })
}

/// Decodes the handful of entities browsers escape in exported titles.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
