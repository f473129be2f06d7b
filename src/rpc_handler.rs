//! RPC method handler for the Frostmark JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested. `handle_method`
//! dispatches a method call to the `App` and turns the result into JSON.

use std::path::PathBuf;
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};

use crate::app::App;
use crate::services::importers::Browser;
use crate::services::settings_engine::SettingsEngineTrait;

/// Encode bytes to base64 string.
pub fn base64_encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Decode base64 string to bytes.
pub fn base64_decode(input: &str) -> Result<Vec<u8>, String> {
    BASE64.decode(input).map_err(|e| format!("base64 decode error: {}", e))
}

fn str_param<'p>(params: &'p Value, name: &str) -> Result<&'p str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn id_param(params: &Value, name: &str) -> Result<i64, String> {
    params
        .get(name)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| format!("missing {}", name))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Tree ───
        "tree.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            a.tree_json_value().map_err(|e| e.to_string())
        }
        "tree.render" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let lines = a.render_tree().map_err(|e| e.to_string())?;
            Ok(json!(lines))
        }

        // ─── Export / import ───
        "export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let path = match params.get("path").and_then(|v| v.as_str()) {
                Some(path) => PathBuf::from(path),
                None => PathBuf::from(&a.settings().export.default_path),
            };
            a.export_to(&path).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "path": path.to_string_lossy()}))
        }
        "import" => {
            let browser: Browser = str_param(params, "browser")?
                .parse()
                .map_err(|e: crate::types::errors::ImportError| e.to_string())?;
            let path = PathBuf::from(str_param(params, "path")?);
            let a = app.lock().map_err(|e| e.to_string())?;
            let report = a.import_from(browser, &path).map_err(|e| e.to_string())?;
            serde_json::to_value(report).map_err(|e| e.to_string())
        }

        // ─── Folders ───
        "folder.rename" => {
            let id = id_param(params, "id")?;
            let name = str_param(params, "name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor().rename_folder(id, name).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "folder.move" => {
            let id = id_param(params, "id")?;
            let parent_id = id_param(params, "parent_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor()
                .change_parent_folder(id, parent_id)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.rename" => {
            let id = id_param(params, "id")?;
            let title = str_param(params, "title")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor().rename_bookmark(id, title).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.move" => {
            let id = id_param(params, "id")?;
            let folder_id = id_param(params, "folder_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor()
                .change_parent_bookmark(id, folder_id)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.set_url" => {
            let id = id_param(params, "id")?;
            let url = str_param(params, "url")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor().change_bookmark_url(id, url).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.set_icon" => {
            // icons are stored as text so JSON and HTML output can carry them
            let id = id_param(params, "id")?;
            let mime = params.get("mime").and_then(|v| v.as_str()).unwrap_or("image/png");
            let data = base64_decode(str_param(params, "data")?)?;
            let icon = if data.is_empty() {
                Vec::new()
            } else {
                format!("data:{};base64,{}", mime, base64_encode(&data)).into_bytes()
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            a.editor()
                .change_bookmark_icon(id, icon)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            match params.get("key").and_then(|v| v.as_str()) {
                Some(key) => a.settings_engine.get_value(key).map_err(|e| e.to_string()),
                None => serde_json::to_value(a.settings()).map_err(|e| e.to_string()),
            }
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
