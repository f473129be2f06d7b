//! Command-line interface for the `frostmark` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::app::{resolve_database_path, App};
use crate::platform;
use crate::services::importers::Browser;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Manage browser bookmarks: import, edit, export.
#[derive(Debug, Parser)]
#[command(name = "frostmark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Bookmark store to operate on.
    #[arg(long, global = true, env = "FROSTMARK_DB")]
    pub database: Option<PathBuf>,

    /// Settings file to use instead of the platform default.
    #[arg(long, global = true, env = "FROSTMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. `info` or `frostmark=debug`. Falls back to
    /// `RUST_LOG`, then to the `general.log_level` setting.
    #[arg(long, global = true, env = "FROSTMARK_LOG")]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the bookmark tree as an outline.
    #[command(alias = "ls")]
    List,

    /// Print the bookmark tree as JSON.
    Json,

    /// Write the bookmarks as bookmark-exchange HTML.
    Export {
        /// Output file; defaults to the `export.default_path` setting.
        path: Option<PathBuf>,
    },

    /// Merge bookmarks from browser files into the store.
    Import {
        /// firefox, chrome, opera or html.
        browser: Browser,
        /// places.sqlite, Bookmarks or .html files.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List browser profiles with importable bookmarks.
    Profiles {
        /// Defaults to the `import.default_browser` setting.
        browser: Option<Browser>,
    },

    /// Rename a folder.
    RenameFolder { id: i64, name: String },

    /// Change a bookmark's title.
    RenameBookmark { id: i64, title: String },

    /// Move a folder under another folder.
    MoveFolder { id: i64, parent: i64 },

    /// Move a bookmark into another folder.
    MoveBookmark { id: i64, folder: i64 },

    /// Change a bookmark's url.
    SetUrl { id: i64, url: String },

    /// Read or change settings.
    #[command(alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print one setting, or all of them.
    Get { key: Option<String> },
    /// Set a setting; the value is read as JSON, falling back to a plain string.
    Set { key: String, value: String },
    /// Restore default settings.
    Reset,
    /// Print the settings file location.
    Path,
}

/// Initialize tracing based on CLI options and settings.
fn init_logging(cli: &Cli, configured: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(configured)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    };

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

/// Parse a `config set` value: JSON when it parses, a plain string otherwise.
pub fn parse_setting_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Parses the process arguments and runs the selected command.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut settings_engine =
        SettingsEngine::new(cli.config.as_ref().map(|p| p.to_string_lossy().to_string()));
    let loaded = settings_engine.load();
    init_logging(&cli, &settings_engine.get_settings().general.log_level);
    if let Err(e) = loaded {
        warn!("Using default settings: {}", e);
    }

    if let Commands::Config { action } = &cli.command {
        return run_config(&mut settings_engine, action);
    }
    if let Commands::Profiles { browser } = &cli.command {
        let browser = match browser {
            Some(browser) => *browser,
            None => settings_engine.get_settings().import.default_browser.parse()?,
        };
        for profile in platform::list_profiles(browser)? {
            println!("{}\t{}", profile.name, profile.bookmarks_path.display());
        }
        return Ok(());
    }

    let db_path = resolve_database_path(cli.database.as_deref(), settings_engine.get_settings());
    debug!(path = %db_path.display(), "Resolved bookmark store");
    let app = App::new(&db_path, settings_engine)?;

    match cli.command {
        Commands::List => {
            for line in app.render_tree()? {
                println!("{}", line);
            }
        }
        Commands::Json => println!("{}", app.tree_json()?),
        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&app.settings().export.default_path));
            app.export_to(&path)?;
            println!("Exported bookmarks to {}", path.display());
        }
        Commands::Import { browser, paths } => {
            for path in paths {
                let report = app.import_from(browser, &path)?;
                println!(
                    "Imported {} folders and {} bookmarks from {}",
                    report.folders,
                    report.bookmarks,
                    path.display()
                );
            }
        }
        Commands::RenameFolder { id, name } => app.editor().rename_folder(id, &name)?,
        Commands::RenameBookmark { id, title } => app.editor().rename_bookmark(id, &title)?,
        Commands::MoveFolder { id, parent } => app.editor().change_parent_folder(id, parent)?,
        Commands::MoveBookmark { id, folder } => app.editor().change_parent_bookmark(id, folder)?,
        Commands::SetUrl { id, url } => app.editor().change_bookmark_url(id, &url)?,
        Commands::Profiles { .. } | Commands::Config { .. } => {}
    }
    Ok(())
}

fn run_config(engine: &mut SettingsEngine, action: &ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Get { key: Some(key) } => {
            println!("{}", serde_json::to_string_pretty(&engine.get_value(key)?)?);
        }
        ConfigAction::Get { key: None } => {
            println!("{}", serde_json::to_string_pretty(engine.get_settings())?);
        }
        ConfigAction::Set { key, value } => engine.set_value(key, parse_setting_value(value))?,
        ConfigAction::Reset => engine.reset()?,
        ConfigAction::Path => println!("{}", engine.get_config_path()),
    }
    Ok(())
}
