// Frostmark platform paths for Windows
// Config and data: %APPDATA%/Frostmark
// Firefox profiles: %APPDATA%/Mozilla/Firefox/Profiles
// Chrome: %LOCALAPPDATA%/Google/Chrome/User Data, Opera: %APPDATA%/Opera Software/Opera Stable

use std::env;
use std::path::PathBuf;

use crate::services::importers::Browser;

fn appdata() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}

fn local_appdata() -> PathBuf {
    PathBuf::from(
        env::var("LOCALAPPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local")),
    )
}

/// `%APPDATA%/Frostmark`
pub fn get_config_dir() -> PathBuf {
    appdata().join("Frostmark")
}

/// `%APPDATA%/Frostmark`
pub fn get_data_dir() -> PathBuf {
    appdata().join("Frostmark")
}

pub fn browser_profiles_dir(browser: Browser) -> Option<PathBuf> {
    match browser {
        Browser::Firefox => Some(appdata().join("Mozilla").join("Firefox").join("Profiles")),
        Browser::Chrome => Some(local_appdata().join("Google").join("Chrome").join("User Data")),
        Browser::Opera => Some(appdata().join("Opera Software").join("Opera Stable")),
        Browser::Html => None,
    }
}
