//! Unit tests for the error enums and their conversions.

use frostmark::types::errors::*;

// === TreeError Tests ===

#[test]
fn tree_error_display_variants() {
    assert_eq!(
        TreeError::Structural("no root folder".to_string()).to_string(),
        "Malformed tree: no root folder"
    );
    assert_eq!(TreeError::DuplicateId(4).to_string(), "Duplicate record id: 4");
    assert_eq!(
        TreeError::UnknownParent { id: 3, parent_id: 9 }.to_string(),
        "Record 3 references unknown parent folder 9"
    );
    assert_eq!(
        TreeError::Encoding("bad byte".to_string()).to_string(),
        "Encoding error: bad byte"
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(BookmarkError::NotFound(7).to_string(), "Bookmark not found: 7");
    assert_eq!(
        BookmarkError::FolderNotFound(2).to_string(),
        "Bookmark folder not found: 2"
    );
    assert_eq!(
        BookmarkError::DatabaseError("locked".to_string()).to_string(),
        "Bookmark database error: locked"
    );
}

#[test]
fn bookmark_error_from_rusqlite() {
    let err: BookmarkError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, BookmarkError::DatabaseError(_)));
}

// === EditError Tests ===

#[test]
fn edit_error_display_variants() {
    assert_eq!(
        EditError::SelfParent(7).to_string(),
        "Folder 7 can not be its own parent"
    );
    assert_eq!(
        EditError::CircularParent { id: 1, parent_id: 4 }.to_string(),
        "Folder 1 can not be moved into its descendant 4"
    );
    assert_eq!(
        EditError::NotFound("folder 3".to_string()).to_string(),
        "Not found: folder 3"
    );
}

#[test]
fn edit_error_from_bookmark_error_keeps_the_kind() {
    assert!(matches!(
        EditError::from(BookmarkError::FolderNotFound(5)),
        EditError::NotFound(what) if what == "folder 5"
    ));
    assert!(matches!(
        EditError::from(BookmarkError::DatabaseError("x".to_string())),
        EditError::DatabaseError(_)
    ));
}

// === ImportError Tests ===

#[test]
fn import_error_display_variants() {
    assert_eq!(
        ImportError::UnsupportedBrowser("lynx".to_string()).to_string(),
        "Unsupported browser: lynx"
    );
    assert_eq!(
        ImportError::Integrity("stuck".to_string()).to_string(),
        "Import integrity error: stuck"
    );
    assert_eq!(
        ImportError::UnknownParent { id: 8, parent_id: 42 }.to_string(),
        "Imported bookmark 8 references unresolved folder 42"
    );
}

#[test]
fn import_error_wraps_tree_error_as_source() {
    let err: ImportError = TreeError::DuplicateId(1).into();
    assert_eq!(err.to_string(), "Import tree error: Duplicate record id: 1");
    assert!(std::error::Error::source(&err).is_some());
}

// === ExportError Tests ===

#[test]
fn export_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ExportError = io.into();
    assert_eq!(err.to_string(), "Export I/O error: denied");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
}
