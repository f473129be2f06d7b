//! Unit tests for point edits on stored folders and bookmarks.

use frostmark::database::Database;
use frostmark::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use frostmark::services::editor::Editor;
use frostmark::types::bookmark::{Bookmark, Folder};
use frostmark::types::errors::EditError;

/// Store layout: ROOT(0) -> a(1) -> b(2) -> c(3), ROOT -> d(4);
/// bookmark 1 in `b`.
fn setup() -> Database {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let mut store = BookmarkManager::new(db.connection());
    let a = store.insert_folder("a", 0).unwrap();
    let b = store.insert_folder("b", a).unwrap();
    store.insert_folder("c", b).unwrap();
    store.insert_folder("d", 0).unwrap();
    store.insert_bookmark("site", "https://site.org", b"", b).unwrap();
    db
}

fn snapshot(db: &Database) -> (Vec<Folder>, Vec<Bookmark>) {
    let store = BookmarkManager::new(db.connection());
    (store.list_folders().unwrap(), store.list_bookmarks().unwrap())
}

fn editor(db: &Database) -> Editor<BookmarkManager<'_>> {
    Editor::new(BookmarkManager::new(db.connection()))
}

#[test]
fn test_rename_folder() {
    let db = setup();
    editor(&db).rename_folder(2, "renamed").unwrap();
    let store = BookmarkManager::new(db.connection());
    assert_eq!(store.get_folder(2).unwrap().unwrap().name, "renamed");
}

#[test]
fn test_rename_bookmark_and_empty_title_fallback() {
    let db = setup();
    let mut editor = editor(&db);
    editor.rename_bookmark(1, "new title").unwrap();
    editor.rename_bookmark(1, "").unwrap();

    let bookmark = editor.into_inner().get_bookmark(1).unwrap().unwrap();
    assert_eq!(bookmark.title, "https://site.org");
}

#[test]
fn test_move_folder() {
    let db = setup();
    editor(&db).change_parent_folder(3, 4).unwrap();
    let store = BookmarkManager::new(db.connection());
    assert_eq!(store.get_folder(3).unwrap().unwrap().parent_id, Some(4));
}

#[test]
fn test_move_bookmark() {
    let db = setup();
    editor(&db).change_parent_bookmark(1, 4).unwrap();
    let store = BookmarkManager::new(db.connection());
    assert_eq!(store.get_bookmark(1).unwrap().unwrap().folder_id, 4);
}

#[test]
fn test_change_url_and_icon() {
    let db = setup();
    let mut editor = editor(&db);
    editor.change_bookmark_url(1, "https://other.org").unwrap();
    editor.change_bookmark_icon(1, b"data:image/png;base64,AA==".to_vec()).unwrap();

    let bookmark = editor.into_inner().get_bookmark(1).unwrap().unwrap();
    assert_eq!(bookmark.url, "https://other.org");
    assert_eq!(bookmark.icon, b"data:image/png;base64,AA==".to_vec());
    assert_eq!(bookmark.title, "site");
}

/// Self-parenting is refused before any lookup, even for unknown ids.
#[test]
fn test_self_parent_is_refused_without_writing() {
    let db = setup();
    let before = snapshot(&db);

    assert!(matches!(
        editor(&db).change_parent_folder(2, 2),
        Err(EditError::SelfParent(2))
    ));
    assert!(matches!(
        editor(&db).change_parent_folder(77, 77),
        Err(EditError::SelfParent(77))
    ));
    assert_eq!(snapshot(&db), before);
}

/// A folder can not move below its own descendant.
#[test]
fn test_circular_move_is_refused() {
    let db = setup();
    let before = snapshot(&db);

    assert!(matches!(
        editor(&db).change_parent_folder(1, 3),
        Err(EditError::CircularParent { id: 1, parent_id: 3 })
    ));
    assert_eq!(snapshot(&db), before);
}

#[test]
fn test_root_can_not_move() {
    let db = setup();
    assert!(matches!(
        editor(&db).change_parent_folder(0, 4),
        Err(EditError::InvalidValue(_))
    ));
}

#[test]
fn test_missing_targets() {
    let db = setup();
    let before = snapshot(&db);
    let mut editor = editor(&db);

    assert!(matches!(editor.rename_folder(50, "x"), Err(EditError::NotFound(_))));
    assert!(matches!(editor.rename_bookmark(50, "x"), Err(EditError::NotFound(_))));
    assert!(matches!(editor.change_parent_folder(50, 1), Err(EditError::NotFound(_))));
    assert!(matches!(editor.change_parent_folder(1, 50), Err(EditError::NotFound(_))));
    assert!(matches!(editor.change_parent_bookmark(1, 50), Err(EditError::NotFound(_))));
    assert!(matches!(editor.change_bookmark_icon(50, Vec::new()), Err(EditError::NotFound(_))));
    drop(editor);

    assert_eq!(snapshot(&db), before);
}

#[test]
fn test_blank_url_is_invalid() {
    let db = setup();
    assert!(matches!(
        editor(&db).change_bookmark_url(1, "   "),
        Err(EditError::InvalidValue(_))
    ));
    assert!(matches!(
        editor(&db).change_bookmark_url(50, ""),
        Err(EditError::InvalidValue(_))
    ));
}

/// Deep chains are walked once; a cycle already in the store does not hang the check.
#[test]
fn test_descendant_walk_on_deep_and_cyclic_chains() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let mut store = BookmarkManager::new(db.connection());
    let top = store.insert_folder("top", 0).unwrap();
    let mut bottom = top;
    for depth in 0..500 {
        bottom = store.insert_folder(&format!("level {}", depth), bottom).unwrap();
    }
    let outside = store.insert_folder("outside", 0).unwrap();
    let lone = store.insert_folder("lone", 0).unwrap();

    assert!(matches!(
        editor(&db).change_parent_folder(top, bottom),
        Err(EditError::CircularParent { .. })
    ));
    editor(&db).change_parent_folder(bottom, outside).unwrap();

    db.connection()
        .execute("UPDATE folders SET parent_id = ?1 WHERE id = ?2", [outside, top])
        .unwrap();
    db.connection()
        .execute("UPDATE folders SET parent_id = ?1 WHERE id = ?2", [top, outside])
        .unwrap();
    editor(&db).change_parent_folder(lone, top).unwrap();
    assert_eq!(store.get_folder(lone).unwrap().unwrap().parent_id, Some(top));
}
