use crate::constants::{API_KEY_ENV, DEFAULT_MODEL, GEMINI_API_BASE_URL};
use crate::errors::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub profile_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: GEMINI_API_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            profile_path: None,
        }
    }
}

impl Config {
    /// Loads the config file (if any), then `.env`, then the process
    /// environment. The file is never written.
    pub fn load() -> FolioResult<Self> {
        dotenv::dotenv().ok();
        let path = get_config_path();
        Self::from_sources(path.as_deref(), |key| env::var(key).ok())
    }

    pub fn from_sources<F>(file: Option<&Path>, lookup: F) -> FolioResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) if path.exists() => {
                let config_str = fs::read_to_string(path).map_err(|e| {
                    FolioError::config_error(format!("Failed to read config file: {}", e))
                })?;
                serde_json::from_str(&config_str).map_err(|e| {
                    FolioError::config_error(format!("Failed to parse config: {}", e))
                })?
            }
            _ => Config::default(),
        };

        if let Some(key) = lookup(API_KEY_ENV) {
            config.api_key = key;
        }
        if let Some(model) = lookup("FOLIO_MODEL") {
            config.model = model;
        }
        if let Some(url) = lookup("FOLIO_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(level) = lookup("FOLIO_LOG") {
            config.log_level = level;
        }
        if let Some(path) = lookup("FOLIO_PROFILE") {
            config.profile_path = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.model.trim().is_empty() {
            return Err(FolioError::config_error("Model name is required"));
        }

        reqwest::Url::parse(&self.api_base_url).map_err(|e| {
            FolioError::config_error(format!(
                "Invalid API base URL '{}': {}",
                self.api_base_url, e
            ))
        })?;

        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(FolioError::config_error(format!(
                "Unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("folio")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("folio").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_config_invalid_empty_model() {
        let config = Config {
            model: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_config_invalid_base_url() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_key_is_not_fatal() {
        let config = Config::from_sources(None, lookup_from(&[])).unwrap();
        assert!(!config.has_api_key());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "model": "gemini-from-file", "log_level": "debug", "api_key": "file-key" }}"#
        )
        .unwrap();

        let config = Config::from_sources(
            Some(file.path()),
            lookup_from(&[
                ("GEMINI_API_KEY", "env-key"),
                ("FOLIO_PROFILE", "/tmp/me.json"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.model, "gemini-from-file");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.profile_path, Some(PathBuf::from("/tmp/me.json")));
        assert_eq!(config.api_base_url, GEMINI_API_BASE_URL);
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "model = 'toml?'").unwrap();

        let err = Config::from_sources(Some(file.path()), lookup_from(&[])).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
