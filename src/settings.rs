//! Game settings and preferences
//!
//! A small JSON file next to the binary. Anything missing or malformed
//! falls back to defaults; the game never refuses to start over settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PATH: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the frame counter in the corner
    pub show_fps: bool,
    /// Fixed RNG seed for reproducible runs; seeds from the clock when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("strider-settings-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(temp_path("missing.json"));
        assert!(!settings.show_fps);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{ nope").unwrap();
        let settings = Settings::load(&path);
        assert!(!settings.show_fps);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let path = temp_path("partial.json");
        fs::write(&path, r#"{"show_fps": true}"#).unwrap();
        let settings = Settings::load(&path);
        assert!(settings.show_fps);
        assert!(settings.seed.is_none());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_seed_round_trips() {
        let path = temp_path("seed.json");
        fs::write(&path, r#"{"seed": 12345}"#).unwrap();
        assert_eq!(Settings::load(&path).seed, Some(12345));
        fs::remove_file(&path).unwrap();
    }
}
