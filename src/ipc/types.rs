use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::store::Store;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub profile: Option<PathBuf>,
    pub settings: Option<Connection>,
    pub store: Store,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            profile: None,
            settings: None,
            store: Store::with_fixtures(),
        }
    }
}
