use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Fixed key the configuration is persisted under.
pub const CONFIG_KEY: &str = "n8n_webhook_url";
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5678/webhook/video-analysis";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(alias = "url", default)]
    pub endpoint_url: String,
    /// When set, requests never leave the machine and `endpoint_url` is ignored.
    #[serde(alias = "useMock", default)]
    pub use_sample_data: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            use_sample_data: false,
        }
    }
}

/// Get the root config directory for clipsight
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("clipsight")
}

/// JSON file backing the configuration. Loaded once at startup and
/// rewritten after every change.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::at(get_config_dir().join(format!("{CONFIG_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration.
    ///
    /// A missing or unparseable record yields the defaults. A stored record
    /// with an empty endpoint is upgraded to the default endpoint.
    pub fn load(&self) -> Result<Configuration> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored configuration, using defaults");
            return Ok(Configuration::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut config = match serde_json::from_str::<Configuration>(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "stored configuration is corrupt, using defaults");
                return Ok(Configuration::default());
            }
        };

        if config.endpoint_url.trim().is_empty() {
            config.endpoint_url = DEFAULT_ENDPOINT_URL.to_string();
        }

        Ok(config)
    }

    pub fn save(&self, config: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::at(dir.path().join("nested").join(format!("{CONFIG_KEY}.json")))
    }

    #[test]
    fn missing_file_loads_defaults() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = store_in(&dir).load()?;
        assert_eq!(config, Configuration::default());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        let config = Configuration {
            endpoint_url: "https://hooks.example.com/analyze".to_string(),
            use_sample_data: true,
        };

        store.save(&config)?;
        assert_eq!(store.load()?, config);
        Ok(())
    }

    #[test]
    fn legacy_field_names_are_accepted() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap())?;
        fs::write(store.path(), r#"{"url":"https://legacy.example/hook","useMock":true}"#)?;

        let config = store.load()?;
        assert_eq!(config.endpoint_url, "https://legacy.example/hook");
        assert!(config.use_sample_data);
        Ok(())
    }

    #[test]
    fn empty_stored_endpoint_uses_default() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        store.save(&Configuration {
            endpoint_url: String::new(),
            use_sample_data: true,
        })?;

        let config = store.load()?;
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert!(config.use_sample_data);
        Ok(())
    }

    #[test]
    fn corrupt_file_loads_defaults() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap())?;
        fs::write(store.path(), "{not json")?;

        assert_eq!(store.load()?, Configuration::default());
        Ok(())
    }

    #[test]
    fn saved_file_uses_camel_case_keys() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        store.save(&Configuration::default())?;

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path())?)?;
        assert_eq!(raw["endpointUrl"], DEFAULT_ENDPOINT_URL);
        assert_eq!(raw["useSampleData"], false);
        Ok(())
    }
}
