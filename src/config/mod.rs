pub mod validator;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Context, Result};

/// Location of the optional config file relative to the project root.
pub const CONFIG_FILE: &str = "assets/configs/app.json";

/// Application settings read from `assets/configs/app.json`.
///
/// Every field is optional in the file; absent fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub assets_dir: PathBuf,
    pub image_namespace: String,
    pub catalog_file: PathBuf,
    pub tick_rate_ms: u64,
    pub watch_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "LearnCR".to_string(),
            assets_dir: PathBuf::from("assets"),
            image_namespace: "cards".to_string(),
            catalog_file: PathBuf::from("assets/cards.json"),
            tick_rate_ms: 200,
            watch_catalog: true,
        }
    }
}

impl AppConfig {
    /// Load and validate the config under `root`, defaulting when the file is missing.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("failed to read app config at {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse app config at {}", path.display()))?;

        validator::validate_app_config(&config)?;
        Ok(config)
    }

    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.assets_dir)
    }

    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog_file)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load(dir.path()).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let configs = dir.path().join("assets").join("configs");
        fs::create_dir_all(&configs).expect("create configs dir");
        fs::write(
            configs.join("app.json"),
            r#"{"image_namespace": "tiles", "watch_catalog": false}"#,
        )
        .expect("write config");

        let config = AppConfig::load(dir.path()).expect("config loads");
        assert_eq!(config.image_namespace, "tiles");
        assert!(!config.watch_catalog);
        assert_eq!(config.title, "LearnCR");
        assert_eq!(
            config.catalog_path(dir.path()),
            dir.path().join("assets/cards.json")
        );
    }

    #[test]
    fn loads_repository_config() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let config = AppConfig::load(root).expect("repository config loads");
        assert_eq!(config.image_namespace, "cards");
    }
}
