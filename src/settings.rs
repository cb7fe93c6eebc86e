//! Game settings and preferences
//!
//! Persisted as a JSON file next to the binary. Absent or unreadable files
//! fall back to defaults; loading never fails the session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name drawn on the cell
    pub player_name: String,

    // === Arena ===
    pub world_width: f32,
    pub world_height: f32,
    /// Constant pellet population size
    pub pellet_count: usize,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Session ===
    /// Fixed seed for reproducible sessions; random when absent
    pub seed: Option<u64>,
    /// Enable the generative description service (needs GEMINI_API_KEY)
    pub describe: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "MyCell".to_string(),
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            pellet_count: PELLET_COUNT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            seed: None,
            describe: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "invalid settings file {}: {err}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mirror_constants() {
        let settings = Settings::default();
        assert_eq!(settings.world_width, WORLD_WIDTH);
        assert_eq!(settings.pellet_count, PELLET_COUNT);
        assert_eq!(settings.viewport_width, VIEWPORT_WIDTH);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            player_name: "Speck".to_string(),
            seed: Some(42),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"player_name":"Dot"}"#).unwrap();
        assert_eq!(back.player_name, "Dot");
        assert_eq!(back.pellet_count, PELLET_COUNT);
    }
}
