//! Render configuration persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RasterError, Result};

/// A reproducible render description: which scene to draw, at what size, from
/// which random seed, and where the image goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Scene name: "composite", "carpet", or "terrain"
    pub scene: String,
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    /// Margin in pixels between the buffer edge and the figure
    pub border: i32,
    pub output: String,
}

impl RenderConfig {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RasterError::Config(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| RasterError::Config(e.to_string()))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scene: "composite".to_string(),
            width: 1920,
            height: 1920,
            seed: 0,
            border: 32,
            output: "render.bmp".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("render.json");
        let config = RenderConfig {
            scene: "carpet".to_string(),
            width: 1080,
            height: 1080,
            seed: 99,
            border: 128,
            output: "carpet.bmp".to_string(),
        };
        config.save(&path).unwrap();
        let loaded = RenderConfig::load(&path).unwrap();
        assert_eq!(loaded.scene, "carpet");
        assert_eq!(loaded.width, 1080);
        assert_eq!(loaded.seed, 99);
        assert_eq!(loaded.border, 128);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            RenderConfig::load(&path),
            Err(RasterError::Config(_))
        ));
    }
}
