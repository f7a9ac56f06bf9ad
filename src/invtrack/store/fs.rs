use super::InventoryBackend;
use crate::error::{InvError, Result};
use crate::inventory::Inventory;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let stem = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_error(&self, source: std::io::Error) -> InvError {
        InvError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryBackend for FileBackend {
    fn load(&self) -> Result<Option<Inventory>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no inventory file");
                return Ok(None);
            }
            Err(source) => {
                return Err(InvError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let inventory: Inventory = serde_json::from_str(&content).map_err(|e| InvError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %self.path.display(), products = inventory.len(), "inventory loaded");
        Ok(Some(inventory))
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        let content = serde_json::to_string_pretty(inventory)?;
        let tmp_file = self.tmp_path();

        if let Err(source) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            warn!(path = %tmp_file.display(), error = %source, "could not write temp file");
            return Err(self.write_error(source));
        }
        if let Err(source) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            warn!(path = %self.path.display(), error = %source, "could not replace inventory file");
            return Err(self.write_error(source));
        }

        debug!(path = %self.path.display(), products = inventory.len(), "inventory written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
