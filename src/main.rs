//! frostmark: import browser bookmarks, edit them, export bookmark-exchange HTML.

use std::process::ExitCode;

use frostmark::cli;

fn main() -> ExitCode {
    // Logging is initialized by cli::run once settings are loaded
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(e.as_ref()) {
                    eprintln!("Caused by: {source}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
