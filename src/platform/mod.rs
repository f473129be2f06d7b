// Frostmark platform abstraction
// Provides platform-specific application paths and browser profile discovery.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::services::importers::Browser;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
use windows as imp;

/// Returns the platform-specific configuration directory for Frostmark.
///
/// - **Linux**: `~/.config/frostmark` (or `$XDG_CONFIG_HOME/frostmark`)
/// - **macOS**: `~/Library/Application Support/Frostmark`
/// - **Windows**: `%APPDATA%/Frostmark`
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Returns the platform-specific data directory, home of `frostmark.db`.
///
/// - **Linux**: `~/.local/share/frostmark` (or `$XDG_DATA_HOME/frostmark`)
/// - **macOS**: `~/Library/Application Support/Frostmark`
/// - **Windows**: `%APPDATA%/Frostmark`
pub fn get_data_dir() -> PathBuf {
    imp::get_data_dir()
}

/// Directory holding `browser`'s profiles, or `None` for formats that are
/// not tied to a browser installation.
pub fn browser_profiles_dir(browser: Browser) -> Option<PathBuf> {
    imp::browser_profiles_dir(browser)
}

/// A browser profile with an importable bookmark file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub bookmarks_path: PathBuf,
}

/// Profiles of `browser` found in its default location. A missing location
/// yields an empty list.
pub fn list_profiles(browser: Browser) -> io::Result<Vec<Profile>> {
    match browser_profiles_dir(browser) {
        Some(dir) if dir.is_dir() => list_profiles_in(browser, &dir),
        _ => Ok(Vec::new()),
    }
}

/// Profiles of `browser` below `root`, sorted by name.
///
/// - Firefox: `*.default*` directories holding `places.sqlite`.
/// - Chrome: `Default` and `Profile N` directories holding `Bookmarks`.
/// - Opera: `root` itself when it holds `Bookmarks`.
pub fn list_profiles_in(browser: Browser, root: &Path) -> io::Result<Vec<Profile>> {
    let mut profiles = Vec::new();
    match browser {
        Browser::Firefox => {
            for name in subdirectories(root)? {
                let places = root.join(&name).join("places.sqlite");
                if name.contains(".default") && places.is_file() {
                    profiles.push(Profile {
                        name,
                        bookmarks_path: places,
                    });
                }
            }
        }
        Browser::Chrome => {
            for name in subdirectories(root)? {
                let bookmarks = root.join(&name).join("Bookmarks");
                if (name == "Default" || name.starts_with("Profile ")) && bookmarks.is_file() {
                    profiles.push(Profile {
                        name,
                        bookmarks_path: bookmarks,
                    });
                }
            }
        }
        Browser::Opera => {
            let bookmarks = root.join("Bookmarks");
            if bookmarks.is_file() {
                let name = root
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                profiles.push(Profile {
                    name,
                    bookmarks_path: bookmarks,
                });
            }
        }
        Browser::Html => {}
    }
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

fn subdirectories(root: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}
