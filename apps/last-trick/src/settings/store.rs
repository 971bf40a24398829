use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::Settings;
use crate::error::AppError;

/// Persistence port for `Settings`.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Settings>, AppError>;
    fn save(&self, settings: &Settings) -> Result<(), AppError>;
}

/// Settings kept as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "reading {}: {e}",
                    self.path.display()
                )))
            }
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, settings: &Settings) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::storage(format!("writing {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}

/// Settings held in memory as serialized JSON, for tests and headless runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    raw: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// A store pre-loaded with arbitrary (possibly malformed) content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }
}

impl SettingsStore for InMemoryStore {
    fn load(&self) -> Result<Option<Settings>, AppError> {
        match self.raw.lock().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), AppError> {
        *self.raw.lock() = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}
