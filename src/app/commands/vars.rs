//! Vars command implementation: list and describe catalog entries.

use serde::Serialize;

use crate::adapters::catalogs::load_catalog;
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarsFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Serialize)]
pub struct VarSummary {
    pub key: String,
    pub section: String,
    pub kind: String,
    pub required: bool,
    pub secret: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VarDetail {
    #[serde(flatten)]
    pub summary: VarSummary,
    pub section_title: String,
    pub constraints: String,
    pub default: Option<String>,
}

pub fn list() -> Result<Vec<VarSummary>, AppError> {
    let catalog = load_catalog()?;
    Ok(catalog
        .vars()
        .map(|(section, var)| VarSummary {
            key: var.key.to_string(),
            section: section.name.clone(),
            kind: var.kind.name().to_string(),
            required: var.required,
            secret: var.secret,
            description: var.description.clone(),
        })
        .collect())
}

pub fn detail(key: &str) -> Result<VarDetail, AppError> {
    let catalog = load_catalog()?;
    let (section, var) =
        catalog.find(key).ok_or_else(|| AppError::UnknownVariable { name: key.to_string() })?;

    Ok(VarDetail {
        summary: VarSummary {
            key: var.key.to_string(),
            section: section.name.clone(),
            kind: var.kind.name().to_string(),
            required: var.required,
            secret: var.secret,
            description: var.description.clone(),
        },
        section_title: section.title.clone(),
        constraints: var.kind.describe(),
        default: var.default.clone(),
    })
}

pub fn render_list(summaries: &[VarSummary], format: VarsFormat) -> Result<String, AppError> {
    match format {
        VarsFormat::Text => {
            let mut out = String::new();
            let width = summaries.iter().map(|s| s.key.len()).max().unwrap_or(0);
            for summary in summaries {
                let mut flags = Vec::new();
                if summary.required {
                    flags.push("required");
                }
                if summary.secret {
                    flags.push("secret");
                }
                let flags =
                    if flags.is_empty() { String::new() } else { format!(" [{}]", flags.join(", ")) };
                out.push_str(&format!(
                    "{:width$}  {:<12}{}  {}\n",
                    summary.key,
                    summary.kind,
                    flags,
                    summary.description,
                    width = width
                ));
            }
            Ok(out)
        }
        VarsFormat::Json => serde_json::to_string_pretty(summaries)
            .map_err(|e| AppError::config_error(format!("JSON render failed: {}", e))),
        VarsFormat::Yaml => serde_yaml::to_string(summaries)
            .map_err(|e| AppError::config_error(format!("YAML render failed: {}", e))),
    }
}

pub fn render_detail(detail: &VarDetail, format: VarsFormat) -> Result<String, AppError> {
    match format {
        VarsFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("{}\n", detail.summary.key));
            out.push_str(&format!(
                "  section:     {} ({})\n",
                detail.summary.section, detail.section_title
            ));
            out.push_str(&format!("  kind:        {}\n", detail.summary.kind));
            out.push_str(&format!("  constraints: {}\n", detail.constraints));
            out.push_str(&format!("  required:    {}\n", detail.summary.required));
            out.push_str(&format!("  secret:      {}\n", detail.summary.secret));
            match &detail.default {
                Some(default) if !default.is_empty() => {
                    out.push_str(&format!("  default:     {}\n", default));
                }
                Some(_) => out.push_str("  default:     (empty)\n"),
                None => out.push_str("  default:     (none)\n"),
            }
            if !detail.summary.description.is_empty() {
                out.push_str(&format!("  {}\n", detail.summary.description));
            }
            Ok(out)
        }
        VarsFormat::Json => serde_json::to_string_pretty(detail)
            .map_err(|e| AppError::config_error(format!("JSON render failed: {}", e))),
        VarsFormat::Yaml => serde_yaml::to_string(detail)
            .map_err(|e| AppError::config_error(format!("YAML render failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_covers_the_whole_catalog_in_order() {
        let summaries = list().unwrap();
        assert_eq!(summaries.len(), 36);
        assert_eq!(summaries[0].key, "LLM_MODEL");
        assert_eq!(summaries.last().unwrap().key, "LOG_FILE");
    }

    #[test]
    fn detail_reports_constraints_and_default() {
        let detail = detail("QDRANT_PORT").unwrap();
        assert_eq!(detail.summary.kind, "port");
        assert_eq!(detail.default.as_deref(), Some("6333"));
        assert!(detail.constraints.contains("1-65535"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(detail("NOPE"), Err(AppError::UnknownVariable { .. })));
    }

    #[test]
    fn machine_formats_render() {
        let summaries = list().unwrap();
        let json = render_list(&summaries, VarsFormat::Json).unwrap();
        assert!(json.contains("\"LLM_MODEL\""));
        let yaml = render_list(&summaries, VarsFormat::Yaml).unwrap();
        assert!(yaml.contains("key: LLM_MODEL"));
    }
}
