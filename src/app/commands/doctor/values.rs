//! Typed value checks: every non-empty value must satisfy its catalog kind.

use crate::app::commands::doctor::diagnostics::Diagnostics;
use crate::domain::{Catalog, EffectiveConfig, ValueOrigin};

pub fn value_checks(
    file: &str,
    catalog: &Catalog,
    effective: &EffectiveConfig,
    diagnostics: &mut Diagnostics,
) {
    for (_, var) in catalog.vars() {
        let key = var.key.as_str();
        let Some(resolved) = effective.get_non_empty(key) else {
            continue;
        };

        if let Err(reason) = var.kind.check(&resolved.value) {
            let (line, message) = match resolved.origin {
                ValueOrigin::File { line } => (Some(line), format!("{}: {}", key, reason)),
                ValueOrigin::Process => {
                    (None, format!("{} (set in process environment): {}", key, reason))
                }
                ValueOrigin::Default => {
                    (None, format!("{} (catalog default): {}", key, reason))
                }
            };
            diagnostics.push_error(file, line, message);
        }
    }
}
