use std::fmt;

// === TreeError ===

/// Errors raised while assembling or serializing an in-memory bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The flat record list does not describe a single rooted tree.
    Structural(String),
    /// Two records of the same kind share an id within one build.
    DuplicateId(i64),
    /// A record references a parent folder that is not part of the tree.
    UnknownParent { id: i64, parent_id: i64 },
    /// A binary field could not be represented as UTF-8 text.
    Encoding(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Structural(msg) => write!(f, "Malformed tree: {}", msg),
            TreeError::DuplicateId(id) => write!(f, "Duplicate record id: {}", id),
            TreeError::UnknownParent { id, parent_id } => {
                write!(f, "Record {} references unknown parent folder {}", id, parent_id)
            }
            TreeError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

// === BookmarkError ===

/// Errors related to the bookmark store.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(i64),
    /// The target folder was not found.
    FolderNotFound(i64),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::FolderNotFound(id) => write!(f, "Bookmark folder not found: {}", id),
            BookmarkError::DatabaseError(msg) => {
                write!(f, "Bookmark database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<rusqlite::Error> for BookmarkError {
    fn from(err: rusqlite::Error) -> Self {
        BookmarkError::DatabaseError(err.to_string())
    }
}

// === EditError ===

/// Errors related to editing stored folders and bookmarks.
#[derive(Debug)]
pub enum EditError {
    /// The edit targets an entity that does not exist.
    NotFound(String),
    /// A folder would become its own parent.
    SelfParent(i64),
    /// A folder would be moved below one of its own descendants.
    CircularParent { id: i64, parent_id: i64 },
    /// The new value is not acceptable for the field.
    InvalidValue(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NotFound(what) => write!(f, "Not found: {}", what),
            EditError::SelfParent(id) => write!(f, "Folder {} can not be its own parent", id),
            EditError::CircularParent { id, parent_id } => write!(
                f,
                "Folder {} can not be moved into its descendant {}",
                id, parent_id
            ),
            EditError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            EditError::DatabaseError(msg) => write!(f, "Edit database error: {}", msg),
        }
    }
}

impl std::error::Error for EditError {}

impl From<BookmarkError> for EditError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::NotFound(id) => EditError::NotFound(format!("bookmark {}", id)),
            BookmarkError::FolderNotFound(id) => EditError::NotFound(format!("folder {}", id)),
            BookmarkError::DatabaseError(msg) => EditError::DatabaseError(msg),
        }
    }
}

// === ImportError ===

/// Errors related to importing foreign bookmark collections.
#[derive(Debug)]
pub enum ImportError {
    /// The importer name does not match a supported browser.
    UnsupportedBrowser(String),
    /// Reading the source file failed.
    Io(String),
    /// The source file could not be parsed.
    Parse(String),
    /// Reading the foreign database or writing the internal store failed.
    Database(String),
    /// The foreign records could not be assembled into a tree.
    Tree(TreeError),
    /// The merge can not make progress: some folders never reach a resolved parent.
    Integrity(String),
    /// A bookmark references a folder that was never resolved during the merge.
    UnknownParent { id: i64, parent_id: i64 },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::UnsupportedBrowser(name) => write!(f, "Unsupported browser: {}", name),
            ImportError::Io(msg) => write!(f, "Import I/O error: {}", msg),
            ImportError::Parse(msg) => write!(f, "Import parse error: {}", msg),
            ImportError::Database(msg) => write!(f, "Import database error: {}", msg),
            ImportError::Tree(err) => write!(f, "Import tree error: {}", err),
            ImportError::Integrity(msg) => write!(f, "Import integrity error: {}", msg),
            ImportError::UnknownParent { id, parent_id } => write!(
                f,
                "Imported bookmark {} references unresolved folder {}",
                id, parent_id
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Tree(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TreeError> for ImportError {
    fn from(err: TreeError) -> Self {
        ImportError::Tree(err)
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::Database(err.to_string())
    }
}

impl From<BookmarkError> for ImportError {
    fn from(err: BookmarkError) -> Self {
        ImportError::Database(err.to_string())
    }
}

// === ExportError ===

/// Errors related to writing a bookmark-exchange HTML file.
#[derive(Debug)]
pub enum ExportError {
    /// The tree could not be rendered.
    Tree(TreeError),
    /// Writing the output file failed.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Tree(err) => write!(f, "Export tree error: {}", err),
            ExportError::Io(msg) => write!(f, "Export I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Tree(err) => Some(err),
            ExportError::Io(_) => None,
        }
    }
}

impl From<TreeError> for ExportError {
    fn from(err: TreeError) -> Self {
        ExportError::Tree(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
