use serde::{Deserialize, Serialize};
use spaceapi_core::{models::DEMO_API_KEY, SpaceApiError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable checked before the config file
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Persistent configuration saved to disk
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// api.nasa.gov key (optional, can also be set via NASA_API_KEY env var)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout; no timeout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path (~/.config/spaceapi/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spaceapi").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring unreadable config: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set the API key and save to config, returning where it was written
    pub fn set_api_key(&mut self, key: String) -> spaceapi_core::Result<PathBuf> {
        self.set_api_key_at(key, Self::config_path())
    }

    pub fn set_api_key_at(
        &mut self,
        key: String,
        path: Option<PathBuf>,
    ) -> spaceapi_core::Result<PathBuf> {
        let path =
            path.ok_or_else(|| SpaceApiError::Config("no config directory".to_string()))?;
        self.api_key = Some(key);
        self.save_to(&path).map_err(|e| {
            SpaceApiError::Config(format!("failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    /// Resolve the API key.
    /// Priority: 1. NASA_API_KEY env var, 2. config file, 3. DEMO_KEY
    pub fn resolve_api_key(&self, env_key: Option<String>) -> String {
        env_key
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
            .unwrap_or_else(|| DEMO_API_KEY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_wins_over_config() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_api_key(Some("from-env".to_string())), "from-env");
        assert_eq!(config.resolve_api_key(Some(String::new())), "from-file");
        assert_eq!(config.resolve_api_key(None), "from-file");
    }

    #[test]
    fn falls_back_to_demo_key() {
        assert_eq!(Config::default().resolve_api_key(None), "DEMO_KEY");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_key: Some("abc123".to_string()),
            timeout_secs: Some(15),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn set_api_key_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::default();

        let written = config
            .set_api_key_at("abc123".to_string(), Some(path.clone()))
            .unwrap();

        assert_eq!(written, path);
        assert_eq!(Config::load_from(&path).api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn set_api_key_without_config_dir_fails() {
        let mut config = Config::default();
        let err = config
            .set_api_key_at("abc123".to_string(), None)
            .unwrap_err();
        assert!(matches!(err, SpaceApiError::Config(_)));
    }

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path), Config::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
