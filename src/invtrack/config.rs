//! # Configuration
//!
//! Settings live in `config.json` inside the user configuration directory
//! (located with the `directories` crate, or `$INVTRACK_CONFIG_DIR` when set).
//! A missing or unreadable file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | none | Inventory file to use when no `--file` / `$INVTRACK_FILE` is given |
//! | `max_prompt_attempts` | `5` | How many invalid answers the shell accepts before giving up on an operation |
//!
//! The inventory file itself is resolved in this order: `--file`,
//! `$INVTRACK_FILE`, `data_file`, then `inventory.json` in the current
//! directory.

use crate::error::{InvError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "INVTRACK_CONFIG_DIR";
pub const DATA_FILE_ENV: &str = "INVTRACK_FILE";
const DEFAULT_PROMPT_ATTEMPTS: u32 = 5;

fn default_prompt_attempts() -> u32 {
    DEFAULT_PROMPT_ATTEMPTS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_prompt_attempts")]
    pub max_prompt_attempts: u32,
}

impl Default for InvConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            max_prompt_attempts: DEFAULT_PROMPT_ATTEMPTS,
        }
    }
}

impl InvConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(InvError::Read {
                    path: config_path,
                    source,
                })
            }
        };
        serde_json::from_str(&content).map_err(|e| InvError::Parse {
            path: config_path,
            reason: e.to_string(),
        })
    }

    /// Picks the inventory file: explicit path, then `env_path`, then the
    /// configured `data_file`, then the default file name in `cwd`.
    pub fn resolve_data_file(
        &self,
        explicit: Option<&Path>,
        env_path: Option<&Path>,
        cwd: &Path,
    ) -> PathBuf {
        explicit
            .or(env_path)
            .or(self.data_file.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.join(DEFAULT_DATA_FILE))
    }

    /// At least one attempt is always allowed.
    pub fn prompt_attempts(&self) -> u32 {
        self.max_prompt_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = InvConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.max_prompt_attempts, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = InvConfig::load(dir.path()).unwrap();
        assert_eq!(config, InvConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "/tmp/stock.json", "max_prompt_attempts": 2}"#,
        )
        .unwrap();

        let loaded = InvConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            InvConfig {
                data_file: Some(PathBuf::from("/tmp/stock.json")),
                max_prompt_attempts: 2,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(InvConfig::load(dir.path()).unwrap(), InvConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            InvConfig::load(dir.path()),
            Err(InvError::Parse { .. })
        ));
    }

    #[test]
    fn test_resolve_data_file_precedence() {
        let cwd = Path::new("/work");
        let config = InvConfig {
            data_file: Some(PathBuf::from("/cfg/inv.json")),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_data_file(Some(Path::new("a.json")), Some(Path::new("b.json")), cwd),
            PathBuf::from("a.json")
        );
        assert_eq!(
            config.resolve_data_file(None, Some(Path::new("b.json")), cwd),
            PathBuf::from("b.json")
        );
        assert_eq!(
            config.resolve_data_file(None, None, cwd),
            PathBuf::from("/cfg/inv.json")
        );
        assert_eq!(
            InvConfig::default().resolve_data_file(None, None, cwd),
            PathBuf::from("/work/inventory.json")
        );
    }

    #[test]
    fn test_prompt_attempts_never_zero() {
        let config = InvConfig {
            max_prompt_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.prompt_attempts(), 1);
    }
}
