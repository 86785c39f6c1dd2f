//! Init command implementation: scaffold a commented `.env` from the
//! embedded catalog.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::adapters::catalogs::load_catalog;
use crate::adapters::render_env_header;
use crate::domain::{AppError, scaffold};
use crate::ports::EnvFileStore;

use super::DEFAULT_ENV_FILE;

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing file.
    pub force: bool,
    pub output: Option<PathBuf>,
    /// `KEY=VALUE` overrides applied on top of catalog defaults.
    pub overrides: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub var_count: usize,
}

pub fn execute<S: EnvFileStore>(store: &S, options: InitOptions) -> Result<InitOutcome, AppError> {
    let path = options.output.unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    if store.exists(&path) && !options.force {
        return Err(AppError::EnvFileExists(path.display().to_string()));
    }

    let catalog = load_catalog()?;

    let mut overrides = BTreeMap::new();
    for (key, value) in &options.overrides {
        let Some((_, var)) = catalog.find(key) else {
            return Err(AppError::UnknownVariable { name: key.clone() });
        };
        if !value.is_empty() {
            if let Err(reason) = var.kind.check(value) {
                return Err(AppError::config_error(format!("{}: {}", key, reason)));
            }
        }
        overrides.insert(key.clone(), value.clone());
    }

    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let header = render_env_header(&generated_at)?;
    let content = scaffold::build_env_content(&header, &catalog, &overrides);
    store.write(&path, &content)?;

    Ok(InitOutcome { path, var_count: catalog.len() })
}
