//! User-tunable engine settings, stored as JSON under the user config dir.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Engine tuning the embedding layer can override per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between a buffer change and the highlight pass. Surfaced for
    /// the embedding layer's debounce; the engine itself never sleeps.
    pub debounce_ms: u64,
    /// Paint the whole document as soon as it is opened.
    pub highlight_on_open: bool,
    /// Restrict re-highlighting to the edited rows. Off forces a
    /// whole-document pass after every change.
    pub scope_to_edit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            highlight_on_open: true,
            scope_to_edit: true,
        }
    }
}

impl Settings {
    /// Loads settings from disk, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), String> {
        let path = Self::settings_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    fn settings_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".config").join("siskin").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }
}
