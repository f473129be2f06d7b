// Frostmark services
// Export, import and merge, point edits, and persisted settings.

pub mod editor;
pub mod exporter;
pub mod import_merger;
pub mod importers;
pub mod settings_engine;
