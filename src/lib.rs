//! Frostmark: a personal bookmark manager.
//!
//! Imports bookmark hierarchies from Firefox, Chrome, Opera and
//! bookmark-exchange HTML into one SQLite store, edits them, and renders
//! them as an outline, JSON or bookmark-exchange HTML.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod cli;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod tree;
pub mod types;
