//! Netscape bookmark-exchange HTML export.
//!
//! Output is driven by the pre-order node list and a stack of currently
//! open folder ids. Each open folder contributes one `<DL><p>` block and
//! one level of four-space indentation.

use std::fs;
use std::path::Path;

use crate::tree::node::{Entry, Tree};
use crate::tree::walker::flatten;
use crate::types::errors::{ExportError, TreeError};

/// Fixed document header, emitted byte for byte.
pub const PREAMBLE: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
    It will be read and overwritten.
    DO NOT EDIT!
-->
<META
    HTTP-EQUIV=\"Content-Type\"
    CONTENT=\"text/html; charset=UTF-8\"
/>
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

const INDENT: &str = "    ";
const OPEN_LIST: &str = "<DL><p>";
const CLOSE_LIST: &str = "</DL><p>";
const SEPARATOR: &str = "<HR>";

struct Markup {
    out: String,
    open: Vec<i64>,
}

impl Markup {
    fn new() -> Self {
        Self {
            out: String::from(PREAMBLE),
            open: Vec::new(),
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.open.len() {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open_folder(&mut self, id: i64) {
        self.line(OPEN_LIST);
        self.open.push(id);
    }

    /// Pops the innermost folder and closes its list one level shallower.
    fn close_folder(&mut self) {
        if self.open.pop().is_some() {
            self.line(CLOSE_LIST);
        }
    }

    /// Closes folders until `id` is the innermost open one. Returns how many
    /// were closed.
    fn close_until(&mut self, id: i64) -> usize {
        let mut closed = 0;
        while matches!(self.open.last(), Some(top) if *top != id) {
            self.close_folder();
            closed += 1;
        }
        closed
    }

    fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close_folder();
        }
        self.out
    }
}

/// Renders the tree as a bookmark-exchange document.
///
/// The root opens the outermost list without a heading. A folder first
/// closes every open list that is not its parent's, then emits its heading
/// and opens its own list; a folder without children closes right away.
/// A bookmark whose folder is not the innermost open one closes back to it
/// and emits a single `<HR>` before its own line.
///
/// # Errors
/// [`TreeError::Encoding`] when a bookmark icon is not valid UTF-8.
pub fn export(tree: &Tree) -> Result<String, TreeError> {
    let mut markup = Markup::new();
    if tree.is_empty() {
        return Ok(markup.finish());
    }

    markup.open_folder(tree.root_node().id());
    for node in flatten(tree).into_iter().skip(1) {
        match node.entry() {
            Entry::Folder(folder) => {
                if let Some(parent_id) = folder.parent_id {
                    markup.close_until(parent_id);
                }
                markup.line(&format!("<DT><H3>{}</H3>", folder.name));
                markup.open_folder(folder.id);
                if !node.has_children() {
                    markup.close_folder();
                }
            }
            Entry::Bookmark(bookmark) => {
                if markup.close_until(bookmark.folder_id) > 0 {
                    markup.line(SEPARATOR);
                }
                let icon = std::str::from_utf8(&bookmark.icon).map_err(|e| {
                    TreeError::Encoding(format!("icon of bookmark {}: {}", bookmark.id, e))
                })?;
                markup.line(&format!(
                    "<DT><A HREF=\"{}\" ICON=\"{}\">{}</A>",
                    bookmark.url, icon, bookmark.title
                ));
            }
        }
    }

    Ok(markup.finish())
}

/// Renders the tree and writes it to `path`, replacing any existing file.
pub fn export_to(tree: &Tree, path: &Path) -> Result<(), ExportError> {
    let html = export(tree)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(())
}
