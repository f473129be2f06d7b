// Frostmark state managers
// The bookmark manager is the record store every tree operation reads from and writes to.

pub mod bookmark_manager;
