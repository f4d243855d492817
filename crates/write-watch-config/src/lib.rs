use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enhancement: EnhancementConfig,
    pub notes: NotesConfig,
}

/// Where the enhancement service lives and how to call it.
///
/// The API key is never stored here, only the name of the environment
/// variable that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    pub api_url: String,
    pub models_url: String,
    pub model: String,
    pub api_key_env: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Request timeout; `0` disables it.
    pub timeout_secs: u64,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            models_url: "https://api.groq.com/openai/v1/models".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            temperature: 0.3,
            max_tokens: 4000,
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub min_content_length: usize,
    pub export_dir: PathBuf,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            min_content_length: 10,
            export_dir: PathBuf::from("~/Documents/write-watch"),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the export directory
        config.notes.export_dir =
            Self::expand_path(&config.notes.export_dir).unwrap_or(config.notes.export_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/write-watch");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The API key from the configured environment variable, if set and
    /// non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.enhancement.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Export directory with `~` and `$VAR` expanded.
    pub fn export_dir(&self) -> PathBuf {
        Self::expand_path(&self.notes.export_dir).unwrap_or_else(|| self.notes.export_dir.clone())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/write-watch/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.enhancement.model, "llama-3.3-70b-versatile");
        assert_eq!(config.enhancement.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.enhancement.temperature, 0.3);
        assert_eq!(config.enhancement.max_tokens, 4000);
        assert_eq!(config.enhancement.timeout_secs, 60);
        assert_eq!(config.notes.min_content_length, 10);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config_content = r#"
[enhancement]
model = "llama-3.1-8b-instant"

[notes]
min_content_length = 25
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.enhancement.model, "llama-3.1-8b-instant");
        assert_eq!(
            config.enhancement.api_url,
            EnhancementConfig::default().api_url
        );
        assert_eq!(config.notes.min_content_length, 25);
        assert_eq!(config.notes.export_dir, NotesConfig::default().export_dir);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original.enhancement.model = "mixtral".to_string();
        original.notes.export_dir = PathBuf::from("/tmp/exports");

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_api_key_from_environment() {
        let mut config = Config::default();
        config.enhancement.api_key_env = "WRITE_WATCH_TEST_KEY_SET".to_string();
        unsafe {
            env::set_var("WRITE_WATCH_TEST_KEY_SET", "gsk_123");
        }

        assert_eq!(config.api_key().as_deref(), Some("gsk_123"));

        unsafe {
            env::remove_var("WRITE_WATCH_TEST_KEY_SET");
        }
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = Config::default();
        config.enhancement.api_key_env = "WRITE_WATCH_TEST_KEY_BLANK".to_string();
        unsafe {
            env::set_var("WRITE_WATCH_TEST_KEY_BLANK", "  ");
        }

        assert_eq!(config.api_key(), None);

        unsafe {
            env::remove_var("WRITE_WATCH_TEST_KEY_BLANK");
        }
    }

    #[test]
    fn test_unset_api_key() {
        let mut config = Config::default();
        config.enhancement.api_key_env = "WRITE_WATCH_TEST_KEY_UNSET".to_string();

        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[enhancement\nmodel = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::default();
        test_config.notes.export_dir = PathBuf::from("/tmp/test-exports");

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_export_dir_with_env_var_in_toml() {
        unsafe {
            env::set_var("WRITE_WATCH_TEST_EXPORT_ROOT", "/custom/exports");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "[notes]\nexport_dir = \"$WRITE_WATCH_TEST_EXPORT_ROOT/lectures\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.notes.export_dir,
            PathBuf::from("/custom/exports/lectures")
        );

        unsafe {
            env::remove_var("WRITE_WATCH_TEST_EXPORT_ROOT");
        }
    }
}
