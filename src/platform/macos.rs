// Frostmark platform paths for macOS
// Config and data: ~/Library/Application Support/Frostmark
// Browser profiles live next to it under Application Support.

use std::env;
use std::path::PathBuf;

use crate::services::importers::Browser;

fn application_support() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
}

/// `~/Library/Application Support/Frostmark`
pub fn get_config_dir() -> PathBuf {
    application_support().join("Frostmark")
}

/// `~/Library/Application Support/Frostmark`
pub fn get_data_dir() -> PathBuf {
    application_support().join("Frostmark")
}

pub fn browser_profiles_dir(browser: Browser) -> Option<PathBuf> {
    let base = application_support();
    match browser {
        Browser::Firefox => Some(base.join("Firefox").join("Profiles")),
        Browser::Chrome => Some(base.join("Google").join("Chrome")),
        Browser::Opera => Some(base.join("com.operasoftware.Opera")),
        Browser::Html => None,
    }
}
