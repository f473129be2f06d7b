//! Unit tests for tree assembly and pre-order flattening.

use frostmark::tree::walker::flatten_ids;
use frostmark::tree::{attach_bookmarks, build_bookmark_tree, build_folder_tree, flatten, NodeKind};
use frostmark::types::bookmark::{Bookmark, Folder};
use frostmark::types::errors::TreeError;
use rstest::rstest;

/// Root, three top-level folders, a two-level branch under `five`.
fn folder_fixture() -> Vec<Folder> {
    vec![
        Folder::new(0, "ROOT", None),
        Folder::new(1, "one", Some(0)),
        Folder::new(2, "two", Some(1)),
        Folder::new(3, "three", Some(1)),
        Folder::new(4, "four", Some(0)),
        Folder::new(5, "five", Some(0)),
        Folder::new(6, "six", Some(5)),
        Folder::new(7, "seven", Some(6)),
    ]
}

/// Bookmarks `a`..`n` spread over every folder of [`folder_fixture`].
fn bookmark_fixture() -> Vec<Bookmark> {
    let folders = [0, 0, 0, 1, 1, 1, 2, 3, 3, 3, 4, 5, 6, 7];
    folders
        .iter()
        .enumerate()
        .map(|(index, folder)| {
            let title = ((b'a' + index as u8) as char).to_string();
            Bookmark::new(index as i64 + 1, title, "<url>", *folder)
        })
        .collect()
}

fn ids(tree: &frostmark::tree::Tree) -> Vec<i64> {
    flatten(tree).iter().map(|node| node.id()).collect()
}

/// Folders alone flatten in depth-first input order.
#[test]
fn test_folder_tree_flattens_in_pre_order() {
    let tree = build_folder_tree(folder_fixture()).unwrap();
    assert_eq!(ids(&tree), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.len(), 8);
    assert!(flatten(&tree).iter().all(|node| node.kind() == NodeKind::Folder));
}

/// Bookmarks follow a folder's sub-folders at every level.
#[test]
fn test_bookmark_tree_flattens_with_bookmarks_last() {
    let tree = build_bookmark_tree(folder_fixture(), bookmark_fixture()).unwrap();
    assert_eq!(
        ids(&tree),
        vec![0, 1, 2, 7, 3, 8, 9, 10, 4, 5, 6, 4, 11, 5, 6, 7, 14, 13, 12, 1, 2, 3]
    );

    let kinds: Vec<NodeKind> = flatten(&tree).iter().map(|node| node.kind()).collect();
    assert_eq!(kinds[0], NodeKind::Folder);
    assert_eq!(kinds[3], NodeKind::Bookmark);
    assert_eq!(kinds.iter().filter(|k| **k == NodeKind::Bookmark).count(), 14);
}

/// Shuffled input still yields a tree rooted at the parentless folder.
#[test]
fn test_input_order_does_not_have_to_be_parent_first() {
    let mut folders = folder_fixture();
    folders.reverse();
    let tree = build_folder_tree(folders).unwrap();

    assert_eq!(tree.root_node().id(), 0);
    assert_eq!(ids(&tree), vec![0, 5, 6, 7, 4, 1, 3, 2]);
}

#[test]
fn test_flatten_ids_match_flatten() {
    let tree = build_bookmark_tree(folder_fixture(), bookmark_fixture()).unwrap();
    let handles = flatten_ids(&tree);
    assert_eq!(handles.len(), tree.len());
    assert_eq!(handles[0], tree.root());
}

#[rstest]
#[case::no_root(vec![Folder::new(1, "a", Some(0))])]
#[case::two_roots(vec![Folder::new(0, "a", None), Folder::new(1, "b", None)])]
#[case::missing_parent(vec![Folder::new(0, "ROOT", None), Folder::new(1, "a", Some(9))])]
#[case::self_parent(vec![Folder::new(0, "ROOT", None), Folder::new(1, "a", Some(1))])]
#[case::negative_id(vec![Folder::new(-1, "ROOT", None)])]
fn test_malformed_folder_sets_are_structural(#[case] folders: Vec<Folder>) {
    assert!(matches!(
        build_folder_tree(folders),
        Err(TreeError::Structural(_))
    ));
}

#[test]
fn test_duplicate_folder_id() {
    let folders = vec![
        Folder::new(0, "ROOT", None),
        Folder::new(1, "a", Some(0)),
        Folder::new(1, "b", Some(0)),
    ];
    assert_eq!(build_folder_tree(folders).unwrap_err(), TreeError::DuplicateId(1));
}

#[test]
fn test_duplicate_bookmark_id() {
    let mut tree = build_folder_tree(folder_fixture()).unwrap();
    let bookmarks = vec![
        Bookmark::new(1, "a", "http://a", 0),
        Bookmark::new(1, "b", "http://b", 1),
    ];
    assert_eq!(
        attach_bookmarks(&mut tree, bookmarks),
        Err(TreeError::DuplicateId(1))
    );
    assert_eq!(tree.len(), 8);
}

/// A bookmark may share its raw id with a folder; ids are per kind.
#[test]
fn test_bookmark_and_folder_ids_are_separate_spaces() {
    let tree = build_bookmark_tree(
        vec![Folder::new(0, "ROOT", None), Folder::new(1, "one", Some(0))],
        vec![Bookmark::new(1, "x", "http://x", 1)],
    )
    .unwrap();
    assert_eq!(ids(&tree), vec![0, 1, 1]);
}

#[test]
fn test_bookmark_in_unknown_folder() {
    let result = build_bookmark_tree(
        folder_fixture(),
        vec![Bookmark::new(3, "lost", "http://lost", 8)],
    );
    assert_eq!(
        result.unwrap_err(),
        TreeError::UnknownParent { id: 3, parent_id: 8 }
    );
}
