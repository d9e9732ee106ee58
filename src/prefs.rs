//! Durable key-value preference store.
//!
//! Preferences are a flat map of string keys to string values, persisted as
//! JSON in the XDG state directory. Writes are last-writer-wins; the main
//! loop flushes on a dirty flag and at shutdown.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference key holding `"true"`/`"false"` for the dark palette.
pub const DARK_MODE_KEY: &str = "darkMode";

/// What: Resolve an XDG base directory from environment or `$HOME` segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g. `XDG_STATE_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME`.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG state directory for tradui (ensured to exist).
#[must_use]
pub fn state_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_STATE_HOME", &[".local", "state"]).join("tradui");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Default path of the persisted preference file.
#[must_use]
pub fn prefs_path() -> PathBuf {
    state_dir().join("prefs.json")
}

/// What: Load the preference map from disk.
///
/// Inputs:
/// - `path`: Preference file location.
///
/// Output:
/// - The stored map, or an empty map when the file is missing or invalid.
///   A corrupt store is never fatal; it is simply replaced on the next save.
#[must_use]
pub fn load(path: &Path) -> HashMap<String, String> {
    if let Ok(s) = fs::read_to_string(path)
        && let Ok(map) = serde_json::from_str::<HashMap<String, String>>(&s)
    {
        return map;
    }
    HashMap::new()
}

/// What: Persist the preference map as JSON.
///
/// Inputs:
/// - `path`: Preference file location.
/// - `prefs`: Map to write.
///
/// Output:
/// - `Ok(())` on success; the I/O error otherwise. Callers log and move on.
///
/// # Errors
/// - Any filesystem failure creating the parent directory or writing the file.
pub fn save(path: &Path, prefs: &HashMap<String, String>) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let body = serde_json::to_string_pretty(prefs).unwrap_or_else(|_| "{}".to_string());
    fs::write(path, body)
}

/// Whether the stored dark-mode flag is set.
#[must_use]
pub fn dark_mode(prefs: &HashMap<String, String>) -> bool {
    prefs.get(DARK_MODE_KEY).map(String::as_str) == Some("true")
}

/// Record the dark-mode flag as `"true"`/`"false"`.
pub fn set_dark_mode(prefs: &mut HashMap<String, String>, on: bool) {
    prefs.insert(
        DARK_MODE_KEY.to_string(),
        if on { "true" } else { "false" }.to_string(),
    );
}
