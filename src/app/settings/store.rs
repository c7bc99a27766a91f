// Settings store: data type, global state, load/save of gallery_settings.json.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::gallery::seed::default_seed;
use crate::gallery::storage::DEFAULT_NAMESPACE;
use crate::gallery::{CardRecord, StoreError};

fn default_likes_file() -> PathBuf {
    PathBuf::from("card_likes.json")
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    // Where per-card like flags are kept
    #[serde(default = "default_likes_file")]
    pub likes_file: PathBuf,
    // Key prefix inside the likes file
    #[serde(default = "default_namespace")]
    pub namespace: String,
    // Show delete controls on cards
    #[serde(default = "default_true")]
    pub allow_delete: bool,
    #[serde(default = "default_seed")]
    pub seed_cards: Vec<CardRecord>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            likes_file: default_likes_file(),
            namespace: default_namespace(),
            allow_delete: true,
            seed_cards: default_seed(),
        }
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    if let Ok(p) = std::env::var("GALLERY_SETTINGS_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("gallery_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(self).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, data).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of reading the settings file at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLoad {
    Loaded,
    // No file yet: first run
    Missing,
    // File exists but could not be read or parsed; left as is
    Invalid,
}

/// Loads settings from `path` into `APP_SETTINGS`. Defaults are kept unless `Loaded`.
pub fn load_settings_from(path: &Path) -> SettingsLoad {
    match AppSettings::load_from_file(path) {
        Ok(s) => {
            super::with_settings_mut(|st| *st = s);
            log::info!("Loaded settings from {}", path.to_string_lossy());
            SettingsLoad::Loaded
        }
        Err(StoreError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No settings file at {}, using defaults", path.to_string_lossy());
            SettingsLoad::Missing
        }
        Err(e) => {
            log::warn!("Using default settings, {} left untouched: {e}", path.to_string_lossy());
            SettingsLoad::Invalid
        }
    }
}

pub fn save_settings_to(path: &Path) {
    let st = super::with_settings(AppSettings::clone);
    match st.save_to_file(path) {
        Ok(()) => log::info!("Saved settings to {}", path.to_string_lossy()),
        Err(e) => log::error!("Failed to save settings: {e}"),
    }
}

/// Startup load. Defaults are written back only when no file exists yet.
pub fn init_settings_at(path: &Path) -> SettingsLoad {
    let outcome = load_settings_from(path);
    if outcome == SettingsLoad::Missing {
        save_settings_to(path);
    }
    outcome
}

pub fn init_settings() -> SettingsLoad {
    init_settings_at(&settings_file_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, AppSettings::default());
        assert_eq!(s.seed_cards, default_seed());
    }

    #[test]
    fn custom_seed_is_read() {
        let s: AppSettings = serde_json::from_str(
            r#"{"allow_delete": false, "seed_cards": [{"id": "x", "title": "Compilers", "liked": true}]}"#,
        )
        .unwrap();
        assert!(!s.allow_delete);
        assert_eq!(s.seed_cards, vec![CardRecord::new("x", "Compilers", true)]);
        assert_eq!(s.namespace, "card");
    }

    #[test]
    fn save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let s = AppSettings {
            namespace: "gallery".into(),
            ..AppSettings::default()
        };
        s.save_to_file(&path).unwrap();
        assert_eq!(AppSettings::load_from_file(&path).unwrap(), s);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppSettings::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let text = r#"{"allow_delete": false, "seed_cards": [{"id":"x","title":"Mine"}],}"#;
        std::fs::write(&path, text).unwrap();

        assert_eq!(init_settings_at(&path), SettingsLoad::Invalid);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        assert_eq!(init_settings_at(&path), SettingsLoad::Missing);
        let written = AppSettings::load_from_file(&path).unwrap();
        assert_eq!(written.seed_cards, default_seed());
    }
}
