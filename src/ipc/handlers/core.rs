use std::path::PathBuf;

use serde_json::json;

use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "profilePath": state.profile.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

/// Opens (or creates) the settings database under the given profile directory
/// and loads the persisted theme into the store. Only the theme survives a
/// restart; the collections always reseed from the fixture.
fn handle_profile_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = path else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    match db::open_settings(&path) {
        Ok(conn) => {
            // Best-effort read; a corrupt value just falls back to light.
            let theme = db::load_theme(&conn).unwrap_or_default();
            state.store.set_theme(theme);
            state.profile = Some(path.clone());
            state.settings = Some(conn);
            log::info!("profile selected at {}", path.display());
            ok(
                &req.id,
                json!({ "profilePath": path.to_string_lossy(), "theme": theme }),
            )
        }
        Err(e) => err(&req.id, "settings_open_failed", format!("{e:?}"), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "profile.select" => Some(handle_profile_select(state, req)),
        _ => None,
    }
}
