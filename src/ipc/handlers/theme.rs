use serde_json::json;

use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "theme": state.store.theme() }))
}

/// Flips the theme in the store and writes through to the settings database
/// when a profile is open; without one the toggle is in-memory only.
fn handle_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let theme = state.store.toggle_theme();
    if let Some(conn) = &state.settings {
        if let Err(e) = db::store_theme(conn, theme) {
            return err(&req.id, "settings_write_failed", e.to_string(), None);
        }
    }
    ok(&req.id, json!({ "theme": theme }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "theme.get" => Some(handle_get(state, req)),
        "theme.toggle" => Some(handle_toggle(state, req)),
        _ => None,
    }
}
