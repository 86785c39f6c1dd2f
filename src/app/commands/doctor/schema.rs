//! Catalog-level checks: required keys present, no undeclared keys,
//! secrets not left at placeholder values.

use crate::app::commands::doctor::diagnostics::Diagnostics;
use crate::domain::{Catalog, EffectiveConfig, ValueOrigin};

const PLACEHOLDER_VALUES: [&str; 6] =
    ["changeme", "change-me", "changeit", "placeholder", "todo", "xxx"];

pub fn schema_checks(
    file: &str,
    catalog: &Catalog,
    effective: &EffectiveConfig,
    diagnostics: &mut Diagnostics,
) {
    for (_, var) in catalog.vars() {
        let key = var.key.as_str();
        match effective.get(key) {
            None => {
                if var.required {
                    diagnostics.push_error(
                        file,
                        None,
                        format!("required variable {} is not set", key),
                    );
                }
            }
            Some(resolved) => {
                let line = match resolved.origin {
                    ValueOrigin::File { line } => Some(line),
                    _ => None,
                };
                if var.required && resolved.value.is_empty() {
                    diagnostics.push_error(
                        file,
                        line,
                        format!("required variable {} is empty", key),
                    );
                }
                if var.secret && is_placeholder(&resolved.value) {
                    diagnostics.push_warning(
                        file,
                        line,
                        format!("{} looks like a placeholder secret", key),
                    );
                }
            }
        }
    }

    for unknown in effective.unknown() {
        diagnostics.push_warning(
            file,
            Some(unknown.line),
            format!("{} is not a declared variable", unknown.key),
        );
    }
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_VALUES.contains(&value.to_ascii_lowercase().as_str())
}
