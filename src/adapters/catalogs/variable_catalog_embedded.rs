//! Variable catalog adapter - loads declared variables from embedded assets.

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, Catalog, EnvKey, SectionSpec, ValueKind, VarSpec};

/// Embedded catalog directory, one subdirectory per template section.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Metadata parsed from a section's meta.toml.
#[derive(Debug, Deserialize)]
struct SectionMeta {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub order: u32,
    #[serde(default)]
    pub vars: Vec<VarMeta>,
}

/// One `[[vars]]` entry.
#[derive(Debug, Deserialize)]
struct VarMeta {
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub secret: bool,
    pub default: Option<String>,
    #[serde(default)]
    pub schemes: Vec<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default)]
    pub values: Vec<String>,
}

fn default_kind() -> String {
    "text".to_string()
}

/// Load the embedded variable catalog.
pub fn load_catalog() -> Result<Catalog, AppError> {
    let mut sections = Vec::new();

    for entry in CATALOG_DIR.dirs() {
        let dir_name =
            entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("").to_string();

        let Some(meta_file) = entry.get_file(entry.path().join("meta.toml")) else {
            continue;
        };

        let meta_content =
            meta_file.contents_utf8().ok_or_else(|| AppError::InvalidCatalogMetadata {
                section: dir_name.clone(),
                reason: "meta.toml is not valid UTF-8".to_string(),
            })?;

        let meta: SectionMeta =
            toml::from_str(meta_content).map_err(|e| AppError::InvalidCatalogMetadata {
                section: dir_name.clone(),
                reason: e.to_string(),
            })?;

        let mut vars = Vec::new();
        for var_meta in &meta.vars {
            vars.push(convert_var(&dir_name, var_meta)?);
        }

        sections.push(SectionSpec {
            name: dir_name,
            title: meta.title,
            summary: meta.summary,
            order: meta.order,
            vars,
        });
    }

    Catalog::new(sections)
}

fn convert_var(section: &str, meta: &VarMeta) -> Result<VarSpec, AppError> {
    let key = EnvKey::new(&meta.key).map_err(|_| AppError::InvalidCatalogMetadata {
        section: section.to_string(),
        reason: format!("invalid variable key '{}'", meta.key),
    })?;

    let kind = convert_kind(section, meta)?;

    Ok(VarSpec {
        key,
        description: meta.description.clone(),
        kind,
        required: meta.required,
        secret: meta.secret,
        default: meta.default.clone(),
    })
}

fn convert_kind(section: &str, meta: &VarMeta) -> Result<ValueKind, AppError> {
    let invalid = |reason: String| AppError::InvalidCatalogMetadata {
        section: section.to_string(),
        reason: format!("variable '{}': {}", meta.key, reason),
    };

    let kind = match meta.kind.as_str() {
        "text" => ValueKind::Text,
        "port" => ValueKind::Port,
        "integer" => {
            ValueKind::Integer { min: meta.min.map(|v| v as i64), max: meta.max.map(|v| v as i64) }
        }
        "float" => ValueKind::Float { min: meta.min, max: meta.max },
        "bool" => ValueKind::Bool,
        "url" => {
            if meta.schemes.is_empty() {
                return Err(invalid("kind 'url' requires a schemes list".to_string()));
            }
            ValueKind::Url { schemes: meta.schemes.clone() }
        }
        "url-list" => {
            if meta.schemes.is_empty() {
                return Err(invalid("kind 'url-list' requires a schemes list".to_string()));
            }
            ValueKind::UrlList { schemes: meta.schemes.clone() }
        }
        "origin-list" => ValueKind::OriginList,
        "latitude" => ValueKind::Latitude,
        "longitude" => ValueKind::Longitude,
        "host" => ValueKind::Host,
        "path" => ValueKind::FilePath,
        "log-level" => ValueKind::LogLevel,
        "device-list" => ValueKind::DeviceList,
        "choice" => {
            if meta.values.is_empty() {
                return Err(invalid("kind 'choice' requires a values list".to_string()));
            }
            ValueKind::Choice { values: meta.values.clone() }
        }
        other => return Err(invalid(format!("unknown kind '{}'", other))),
    };

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.sections().len(), 12);
        assert_eq!(catalog.len(), 36);
    }

    #[test]
    fn sections_follow_template_order() {
        let catalog = load_catalog().unwrap();
        let names = catalog.section_names();
        assert_eq!(names.first(), Some(&"llm"));
        assert_eq!(names.last(), Some(&"logging"));
        let api_pos = names.iter().position(|n| *n == "api").unwrap();
        let mqtt_pos = names.iter().position(|n| *n == "mqtt").unwrap();
        assert!(mqtt_pos < api_pos);
    }

    #[test]
    fn defaults_satisfy_their_own_kinds() {
        let catalog = load_catalog().unwrap();
        for (section, var) in catalog.vars() {
            if let Some(default) = &var.default {
                if default.is_empty() {
                    continue;
                }
                assert!(
                    var.kind.check(default).is_ok(),
                    "default for {} in section '{}' violates its kind: {:?}",
                    var.key,
                    section.name,
                    var.kind.check(default)
                );
            }
        }
    }

    #[test]
    fn known_contract_keys_are_declared() {
        let catalog = load_catalog().unwrap();
        for key in [
            "LLM_MODEL",
            "HIP_VISIBLE_DEVICES",
            "QDRANT_COLLECTION",
            "MQTT_PASSWORD",
            "INFLUX_BUCKET",
            "CAMPUS_BOUNDS_LNG",
            "RTSP_STREAMS",
            "DATABASE_URL",
            "REDIS_URL",
            "CORS_ORIGINS",
            "MLFLOW_EXPERIMENT_NAME",
            "LOG_FILE",
        ] {
            assert!(catalog.contains(key), "missing {}", key);
        }
    }

    #[test]
    fn secrets_are_marked() {
        let catalog = load_catalog().unwrap();
        for key in ["LLM_API_KEY", "MQTT_PASSWORD", "INFLUX_TOKEN", "API_SECRET_KEY"] {
            let (_, var) = catalog.find(key).unwrap();
            assert!(var.secret, "{} should be secret", key);
        }
        let (_, host) = catalog.find("API_HOST").unwrap();
        assert!(!host.secret);
    }
}
