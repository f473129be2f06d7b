//! Frostmark RPC Server: JSON-RPC over stdin/stdout, the local backend for a UI.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"folder.rename", "params":{"id":3,"name":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use frostmark::app::{resolve_database_path, App};
use frostmark::rpc_handler::handle_method;
use frostmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};
use tracing::{debug, error, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(configured: &str) {
    let filter = EnvFilter::try_from_env("FROSTMARK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(configured));
    // stdout carries the protocol, so logs go to stderr
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    if let Err(e) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
}

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> ExitCode {
    let mut settings_engine = SettingsEngine::new(std::env::var("FROSTMARK_CONFIG").ok());
    let loaded = settings_engine.load();
    init_logging(&settings_engine.get_settings().general.log_level);
    if let Err(e) = loaded {
        warn!("Using default settings: {}", e);
    }

    let explicit = std::env::var_os("FROSTMARK_DB").map(std::path::PathBuf::from);
    let db_path = resolve_database_path(explicit.as_deref(), settings_engine.get_settings());
    let app = match App::new(&db_path, settings_engine) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!("Failed to open {}: {}", db_path.display(), e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Signal ready
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if respond(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                debug!(method, "RPC request");

                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if respond(&mut out, &response).is_err() {
            break;
        }
    }
    ExitCode::SUCCESS
}
