//! Env file scaffold generation from the catalog.

use std::collections::BTreeMap;

use crate::domain::Catalog;

/// Build `.env` content: a pre-rendered header, then one block per catalog
/// section with each variable's description as a trailing comment.
///
/// `overrides` replaces catalog defaults per key; callers validate the keys
/// against the catalog before getting here.
pub fn build_env_content(
    header: &str,
    catalog: &Catalog,
    overrides: &BTreeMap<String, String>,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(header.trim_end().to_string());

    for section in catalog.sections() {
        lines.push(String::new());
        lines.push(format!("# === {} ===", section.title));
        for var in &section.vars {
            let value = overrides
                .get(var.key.as_str())
                .cloned()
                .or_else(|| var.default.clone())
                .unwrap_or_default();
            if var.description.is_empty() {
                lines.push(format!("{}={}", var.key, value));
            } else {
                lines.push(format!("{}={}  # {}", var.key, value, var.description));
            }
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
