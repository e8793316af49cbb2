use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Environment variable conventionally pointing at a WordNet `dict` directory.
pub const DATA_DIR_ENV: &str = "WNSEARCHDIR";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory holding `data.noun`, `data.verb`, `data.adj` and `data.adv`.
    pub data_dir: String,
    /// Where the compiler writes the artifact and the client reads it.
    pub lexicon_path: String,
    pub history_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "dict".to_string(),
            lexicon_path: "assets/lexicon.json".to_string(),
            history_capacity: 100,
        }
    }
}

impl Config {
    /// Reads `file_path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(file_path: &Path) -> Result<Config, ConfigError> {
        match fs::read_to_string(file_path) {
            Ok(contents) => toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
                path: file_path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No {} found, using default configuration", file_path.display());
                Ok(Config::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: file_path.to_path_buf(),
                source,
            }),
        }
    }

    /// `WNSEARCHDIR` wins over the configured `data_dir`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir_with_override(env::var(DATA_DIR_ENV).ok().as_deref())
    }

    /// Blank or whitespace-only overrides are ignored.
    fn data_dir_with_override(&self, override_dir: Option<&str>) -> PathBuf {
        match override_dir {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(&self.data_dir),
        }
    }

    pub fn lexicon_path(&self) -> PathBuf {
        PathBuf::from(&self.lexicon_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "lexicon_path = \"out/words.json\"\n").unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.lexicon_path, "out/words.json");
        assert_eq!(config.data_dir, "dict");
        assert_eq!(config.history_capacity, 100);
    }

    #[test]
    fn data_dir_override_ignores_blank_values() {
        let config = Config::default();
        assert_eq!(config.data_dir_with_override(None), PathBuf::from("dict"));
        assert_eq!(config.data_dir_with_override(Some("")), PathBuf::from("dict"));
        assert_eq!(config.data_dir_with_override(Some("  ")), PathBuf::from("dict"));
        assert_eq!(
            config.data_dir_with_override(Some("/usr/share/wordnet")),
            PathBuf::from("/usr/share/wordnet")
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_capacity = \"lots\"\n").unwrap();
        assert!(matches!(
            Config::load_or_default(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
