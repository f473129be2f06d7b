//! Property-based tests for export followed by bookmark-exchange import.
//!
//! Exporting a tree and reading the document back must reproduce the same
//! nesting, names, titles and urls in the same order. The outer list comes
//! back as an untitled root, and ids are renumbered in document order.
//! Text is compared byte for byte, padding and entity-like runs included.

use std::collections::HashMap;

use frostmark::services::exporter::export;
use frostmark::services::importers::NetscapeImporter;
use frostmark::tree::{build_bookmark_tree, flatten, Entry, Tree};
use frostmark::types::bookmark::{Bookmark, Folder};
use proptest::prelude::*;
use proptest::sample::Index;

/// Names with padding, ampersands and text that already looks like an entity.
fn arb_name() -> impl Strategy<Value = String> {
    "( ?)([a-zA-Z0-9&;# ]{1,10}|R&amp;D|a &lt;b&gt;|&quot;q&quot;)( ?)"
}

fn arb_url() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", "(q=1&r=2|q=1&amp;r=2|[a-z0-9&;=]{0,8})")
        .prop_map(|(host, query)| format!("https://{}.org/?{}", host, query))
}

fn arb_tree() -> impl Strategy<Value = Tree> {
    (
        prop::collection::vec((any::<Index>(), arb_name()), 0..12),
        prop::collection::vec((any::<Index>(), arb_name(), arb_url()), 0..20),
    )
        .prop_map(|(folder_specs, bookmark_specs)| {
            let mut folders = vec![Folder::new(0, "ROOT", None)];
            for (index, (parent, name)) in folder_specs.into_iter().enumerate() {
                let id = index as i64 + 1;
                folders.push(Folder::new(id, name, Some(parent.index(id as usize) as i64)));
            }
            let bookmarks = bookmark_specs
                .into_iter()
                .enumerate()
                .map(|(index, (folder, title, url))| {
                    let folder_id = folder.index(folders.len()) as i64;
                    Bookmark::new(index as i64 + 1, title, url, folder_id)
                })
                .collect();
            build_bookmark_tree(folders, bookmarks).unwrap()
        })
}

/// Pre-order (depth, text) pairs, skipping the root.
fn shape(tree: &Tree) -> Vec<(usize, String)> {
    let mut depth: HashMap<i64, usize> = HashMap::new();
    let mut out = Vec::new();
    for node in flatten(tree) {
        let level = node
            .parent_id()
            .and_then(|parent| depth.get(&parent).map(|d| d + 1))
            .unwrap_or(0);
        match node.entry() {
            Entry::Folder(folder) => {
                depth.insert(folder.id, level);
                if level > 0 {
                    out.push((level, format!("F {}", folder.name)));
                }
            }
            Entry::Bookmark(bookmark) => {
                out.push((level, format!("B {} {}", bookmark.title, bookmark.url)));
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn export_then_import_keeps_shape(tree in arb_tree()) {
        let html = export(&tree).unwrap();
        let reread = NetscapeImporter::new().assemble_from_str(&html).unwrap();

        prop_assert_eq!(reread.len(), tree.len());
        prop_assert_eq!(shape(&reread), shape(&tree));
    }

    /// Every opened list is closed again.
    #[test]
    fn export_balances_lists(tree in arb_tree()) {
        let html = export(&tree).unwrap();
        let opened = html.matches("<DL><p>").count();
        let closed = html.matches("</DL><p>").count();
        let folders = flatten(&tree)
            .iter()
            .filter(|node| node.as_folder().is_some())
            .count();

        prop_assert_eq!(opened, folders);
        prop_assert_eq!(closed, folders);
    }
}
