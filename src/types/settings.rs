use serde::{Deserialize, Serialize};

/// Top-level persisted settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub general: GeneralSettings,
    pub export: ExportSettings,
    pub import: ImportSettings,
}

/// Where the store lives and how chatty the tools are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Overrides the platform data directory location of the database.
    pub database_path: Option<String>,
    /// Default tracing filter, e.g. `warn` or `frostmark=debug`.
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportSettings {
    /// Path used by `export` when none is given.
    pub default_path: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_path: "bookmarks.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportSettings {
    /// Browser assumed by `profiles` when none is given.
    pub default_browser: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_browser: "firefox".to_string(),
        }
    }
}
