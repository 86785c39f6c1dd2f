use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::EnvFileStore;

/// Filesystem-backed env file store.
#[derive(Debug, Clone, Default)]
pub struct FilesystemEnvStore;

impl FilesystemEnvStore {
    pub fn new() -> Self {
        Self
    }
}

impl EnvFileStore for FilesystemEnvStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::EnvFileNotFound(path.display().to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }
}

/// Process environment backed by `std::env`.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment;

impl crate::ports::ProcessEnvironment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
