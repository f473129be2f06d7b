//! Foreign bookmark importers.
//!
//! Every importer reads one on-disk format and returns a [`Tree`] of the
//! same folder/bookmark shape the rest of the crate uses, keyed by the
//! foreign system's own ids. Multi-root formats are wrapped under a
//! synthetic id-0 folder named [`NO_TITLE`](crate::types::bookmark::NO_TITLE).

pub mod chromium;
pub mod firefox;
pub mod netscape;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tree::node::Tree;
use crate::types::errors::ImportError;

pub use chromium::ChromiumImporter;
pub use firefox::FirefoxImporter;
pub use netscape::NetscapeImporter;

/// Source formats frostmark can import from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// `places.sqlite` of a Firefox profile.
    Firefox,
    /// `Bookmarks` JSON of a Chrome profile.
    Chrome,
    /// `Bookmarks` JSON of an Opera profile.
    Opera,
    /// A bookmark-exchange HTML file, as written by `export`.
    Html,
}

impl Browser {
    pub const ALL: [Browser; 4] = [Browser::Firefox, Browser::Chrome, Browser::Opera, Browser::Html];

    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Firefox => "firefox",
            Browser::Chrome => "chrome",
            Browser::Opera => "opera",
            Browser::Html => "html",
        }
    }

    /// The importer reading this browser's format.
    pub fn importer(&self) -> Box<dyn ImporterTrait> {
        match self {
            Browser::Firefox => Box::new(FirefoxImporter::new()),
            Browser::Chrome | Browser::Opera => Box::new(ChromiumImporter::new(*self)),
            Browser::Html => Box::new(NetscapeImporter::new()),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firefox" => Ok(Browser::Firefox),
            "chrome" | "chromium" => Ok(Browser::Chrome),
            "opera" => Ok(Browser::Opera),
            "html" | "netscape" => Ok(Browser::Html),
            other => Err(ImportError::UnsupportedBrowser(other.to_string())),
        }
    }
}

/// A reader for one foreign bookmark format.
pub trait ImporterTrait {
    /// Reads `source` and assembles its folders and bookmarks into a tree
    /// carrying the foreign ids.
    fn assemble_import_tree(&self, source: &Path) -> Result<Tree, ImportError>;
}

/// Assembles the foreign tree stored at `source` using `browser`'s importer.
pub fn assemble_import_tree(browser: Browser, source: &Path) -> Result<Tree, ImportError> {
    if !source.exists() {
        return Err(ImportError::Io(format!(
            "{} does not exist",
            source.display()
        )));
    }
    browser.importer().assemble_import_tree(source)
}
