//! Env file storage port definition.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing env files.
pub trait EnvFileStore {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<String, AppError>;

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}

/// In-memory store for testing without filesystem access.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvStore {
    files: std::collections::BTreeMap<std::path::PathBuf, String>,
}

impl MemoryEnvStore {
    pub fn with_file(path: impl Into<std::path::PathBuf>, content: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.files.insert(path.into(), content.into());
        store
    }
}

impl EnvFileStore for MemoryEnvStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::EnvFileNotFound(path.display().to_string()))
    }

    fn write(&self, _path: &Path, _content: &str) -> Result<(), AppError> {
        Err(AppError::config_error("MemoryEnvStore is read-only"))
    }
}
