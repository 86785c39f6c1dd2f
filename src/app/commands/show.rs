//! Show command implementation: render the effective configuration with
//! secrets redacted.

use std::path::PathBuf;

use serde::Serialize;

use crate::adapters::catalogs::load_catalog;
use crate::domain::{AppError, EffectiveConfig, EnvDocument, Secret};
use crate::ports::{EnvFileStore, ProcessEnvironment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
    Toml,
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub env_file: Option<PathBuf>,
    pub format: ShowFormat,
    /// Restrict output to a single catalog section.
    pub section: Option<String>,
    /// Print secret values instead of fingerprints.
    pub reveal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedVar {
    pub key: String,
    /// Display value; secrets are already redacted here unless revealed.
    pub value: Option<String>,
    pub origin: Option<String>,
    pub secret: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub name: String,
    pub title: String,
    pub vars: Vec<RenderedVar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedConfig {
    pub sections: Vec<RenderedSection>,
}

pub fn execute<S, E>(
    store: &S,
    process_env: &E,
    options: &ShowOptions,
) -> Result<RenderedConfig, AppError>
where
    S: EnvFileStore,
    E: ProcessEnvironment,
{
    let path =
        options.env_file.clone().unwrap_or_else(|| PathBuf::from(super::DEFAULT_ENV_FILE));
    if !store.exists(&path) {
        return Err(AppError::EnvFileNotFound(path.display().to_string()));
    }

    let catalog = load_catalog()?;
    if let Some(section) = &options.section {
        if catalog.section(section).is_none() {
            return Err(AppError::UnknownSection {
                name: section.clone(),
                available: catalog.section_names().join(", "),
            });
        }
    }

    let content = store.read(&path)?;
    let document = EnvDocument::parse(&content);
    let declared_keys: Vec<&str> = catalog.vars().map(|(_, var)| var.key.as_str()).collect();
    let overlay = process_env.collect(&declared_keys);
    let effective = EffectiveConfig::resolve(&catalog, &document, &overlay);

    let mut sections = Vec::new();
    for section in catalog.sections() {
        if let Some(filter) = &options.section {
            if &section.name != filter {
                continue;
            }
        }

        let vars = section
            .vars
            .iter()
            .map(|var| {
                let resolved = effective.get(var.key.as_str());
                let value = resolved.map(|resolved| {
                    display_value(&resolved.value, var.secret, options.reveal)
                });
                let origin = resolved.map(|resolved| resolved.origin.label().to_string());
                RenderedVar { key: var.key.to_string(), value, origin, secret: var.secret }
            })
            .collect();

        sections.push(RenderedSection {
            name: section.name.clone(),
            title: section.title.clone(),
            vars,
        });
    }

    Ok(RenderedConfig { sections })
}

fn display_value(value: &str, secret: bool, reveal: bool) -> String {
    if secret && !reveal && !value.is_empty() {
        Secret::new(value).fingerprint()
    } else {
        value.to_string()
    }
}

/// Render the configuration for terminal or machine consumption.
pub fn render(config: &RenderedConfig, format: ShowFormat) -> Result<String, AppError> {
    match format {
        ShowFormat::Text => Ok(render_text(config)),
        ShowFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| AppError::config_error(format!("JSON render failed: {}", e))),
        ShowFormat::Toml => render_toml(config),
    }
}

fn render_text(config: &RenderedConfig) -> String {
    let mut out = String::new();
    for section in &config.sections {
        out.push_str(&format!("[{}] {}\n", section.name, section.title));
        for var in &section.vars {
            match (&var.value, &var.origin) {
                (Some(value), Some(origin)) => {
                    out.push_str(&format!("  {}={}  [{}]\n", var.key, value, origin));
                }
                _ => out.push_str(&format!("  {}  [unset]\n", var.key)),
            }
        }
        out.push('\n');
    }
    out
}

fn render_toml(config: &RenderedConfig) -> Result<String, AppError> {
    let mut root = toml::Table::new();
    for section in &config.sections {
        let mut table = toml::Table::new();
        for var in &section.vars {
            if let Some(value) = &var.value {
                table.insert(var.key.clone(), toml::Value::String(value.clone()));
            }
        }
        root.insert(section.name.clone(), toml::Value::Table(table));
    }
    toml::to_string_pretty(&root)
        .map_err(|e| AppError::config_error(format!("TOML render failed: {}", e)))
}
