//! Property-based tests for merging foreign records into the store.
//!
//! Foreign folder records may arrive in any order; the merge must always
//! insert parents before children and produce the same hierarchy.

use std::collections::HashMap;

use frostmark::database::Database;
use frostmark::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use frostmark::services::import_merger::{ImportMerger, MergeReport};
use frostmark::types::bookmark::{Bookmark, Folder};
use proptest::prelude::*;
use proptest::sample::Index;

type Records = (Vec<Folder>, Vec<Bookmark>);

/// Foreign folders with unique names and sparse ids, one foreign root,
/// listed parent-first. Callers shuffle them.
fn arb_foreign() -> impl Strategy<Value = Records> {
    (
        prop::collection::vec(any::<Index>(), 0..16),
        prop::collection::vec((any::<Index>(), "[a-z]{1,8}"), 0..20),
    )
        .prop_map(|(parents, marks)| {
            // foreign ids never collide with internal ones
            let foreign_id = |index: usize| 1000 + 7 * index as i64;
            let mut folders = vec![Folder::new(foreign_id(0), "top", None)];
            for (index, parent) in parents.iter().enumerate() {
                let position = index + 1;
                let parent_id = foreign_id(parent.index(position));
                folders.push(Folder::new(
                    foreign_id(position),
                    format!("f{}", position),
                    Some(parent_id),
                ));
            }
            let bookmarks = marks
                .iter()
                .enumerate()
                .map(|(index, (folder, title))| {
                    Bookmark::new(
                        500 - index as i64,
                        title.clone(),
                        format!("http://{}.org", title),
                        foreign_id(folder.index(folders.len())),
                    )
                })
                .collect();
            (folders, bookmarks)
        })
}

/// The same records twice: as generated, and shuffled.
fn arb_orderings() -> impl Strategy<Value = (Records, Records)> {
    arb_foreign().prop_flat_map(|(folders, bookmarks)| {
        let original = (folders.clone(), bookmarks.clone());
        (Just(original), (Just(folders).prop_shuffle(), Just(bookmarks).prop_shuffle()))
    })
}

/// Name path of every stored folder and the folder path of every bookmark,
/// sorted, so sibling order does not matter.
fn stored_paths(db: &Database) -> (Vec<String>, Vec<String>) {
    let store = BookmarkManager::new(db.connection());
    let folders = store.list_folders().unwrap();
    let by_id: HashMap<i64, &Folder> = folders.iter().map(|f| (f.id, f)).collect();

    let path_of = |mut id: i64| {
        let mut parts = Vec::new();
        while let Some(folder) = by_id.get(&id) {
            parts.push(folder.name.clone());
            match folder.parent_id {
                Some(parent) => id = parent,
                None => break,
            }
        }
        parts.reverse();
        parts.join("/")
    };

    let mut folder_paths: Vec<String> = folders.iter().map(|f| path_of(f.id)).collect();
    let mut bookmark_paths: Vec<String> = store
        .list_bookmarks()
        .unwrap()
        .iter()
        .map(|b| format!("{} {} {}", path_of(b.folder_id), b.title, b.url))
        .collect();
    folder_paths.sort();
    bookmark_paths.sort();
    (folder_paths, bookmark_paths)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Shuffled input merges into the same hierarchy as parent-first input.
    #[test]
    fn merge_is_independent_of_record_order(
        ((folders, bookmarks), (shuffled_folders, shuffled_bookmarks)) in arb_orderings(),
    ) {
        let ordered = Database::open_in_memory().unwrap();
        ImportMerger::new(ordered.connection())
            .merge_records(folders.clone(), bookmarks.clone())
            .unwrap();

        let shuffled = Database::open_in_memory().unwrap();
        let report = ImportMerger::new(shuffled.connection())
            .merge_records(shuffled_folders, shuffled_bookmarks)
            .unwrap();

        prop_assert_eq!(report, MergeReport { folders: folders.len(), bookmarks: bookmarks.len() });
        prop_assert_eq!(stored_paths(&shuffled), stored_paths(&ordered));
    }

    /// Every merged folder is inserted after its parent, and bookmarks are
    /// inserted in ascending foreign id.
    #[test]
    fn merge_inserts_parents_first((_, (folders, bookmarks)) in arb_orderings()) {
        let db = Database::open_in_memory().unwrap();
        ImportMerger::new(db.connection())
            .merge_records(folders.clone(), bookmarks.clone())
            .unwrap();

        let store = BookmarkManager::new(db.connection());
        for folder in store.list_folders().unwrap() {
            if let Some(parent) = folder.parent_id {
                prop_assert!(parent < folder.id);
            }
        }

        let mut by_foreign_id = bookmarks.clone();
        by_foreign_id.sort_by_key(|b| b.id);
        let stored_titles: Vec<String> = store
            .list_bookmarks()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        let expected_titles: Vec<String> = by_foreign_id.into_iter().map(|b| b.title).collect();
        prop_assert_eq!(stored_titles, expected_titles);
    }
}
