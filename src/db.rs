use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

use crate::model::Theme;

const THEME_KEY: &str = "theme";

/// Opens (creating if needed) the per-profile settings database. The theme
/// flag is the only value persisted across restarts; everything else resets
/// to the fixture on startup.
pub fn open_settings(profile: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(profile)?;
    let db_path = profile.join("assignd.sqlite3");
    let conn = Connection::open(db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(conn)
}

pub fn settings_get(conn: &Connection, key: &str) -> anyhow::Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?", [key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn settings_set(conn: &Connection, key: &str, value: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;
    Ok(())
}

/// Unknown or absent values fall back to the light theme.
pub fn load_theme(conn: &Connection) -> anyhow::Result<Theme> {
    let stored = settings_get(conn, THEME_KEY)?;
    Ok(stored.as_deref().and_then(Theme::parse).unwrap_or_default())
}

pub fn store_theme(conn: &Connection, theme: Theme) -> anyhow::Result<()> {
    settings_set(conn, THEME_KEY, theme.as_str())
}
