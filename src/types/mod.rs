// Frostmark shared type definitions
// Records, error enums and the persisted settings model.

pub mod bookmark;
pub mod errors;
pub mod settings;
