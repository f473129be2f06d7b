// Frostmark platform paths for Linux
// Config: ~/.config/frostmark
// Data:   ~/.local/share/frostmark
// Firefox profiles: ~/.mozilla/firefox
// Chrome/Opera:     ~/.config/google-chrome, ~/.config/opera

use std::env;
use std::path::PathBuf;

use crate::services::importers::Browser;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_<kind>_HOME` when set and non-empty, otherwise `fallback` below `$HOME`.
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback.iter().fold(home_dir(), |path, part| path.join(part)),
    }
}

/// Uses `$XDG_CONFIG_HOME/frostmark` if set, otherwise `~/.config/frostmark`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("frostmark")
}

/// Uses `$XDG_DATA_HOME/frostmark` if set, otherwise `~/.local/share/frostmark`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"]).join("frostmark")
}

pub fn browser_profiles_dir(browser: Browser) -> Option<PathBuf> {
    match browser {
        Browser::Firefox => Some(home_dir().join(".mozilla").join("firefox")),
        Browser::Chrome => Some(xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("google-chrome")),
        Browser::Opera => Some(xdg_dir("XDG_CONFIG_HOME", &[".config"]).join("opera")),
        Browser::Html => None,
    }
}
