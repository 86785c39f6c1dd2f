//! Line-level checks: every line must be blank, comment, or `KEY=value`.

use crate::app::commands::doctor::diagnostics::Diagnostics;
use crate::domain::{EnvDocument, is_valid_key};

pub fn syntax_checks(file: &str, document: &EnvDocument, diagnostics: &mut Diagnostics) {
    for (line, raw, reason) in document.malformed() {
        diagnostics.push_error(
            file,
            Some(line),
            format!("malformed line ({}): '{}'", reason, raw.trim()),
        );
    }

    for (key, first, duplicate) in document.duplicates() {
        diagnostics.push_error(
            file,
            Some(duplicate),
            format!("duplicate declaration of {} (first declared at line {})", key, first),
        );
    }

    for entry in document.entries() {
        if !is_valid_key(&entry.key) {
            diagnostics.push_warning(
                file,
                Some(entry.number),
                format!("key '{}' is not UPPER_SNAKE_CASE", entry.key),
            );
        }
        if entry.exported {
            diagnostics.push_warning(
                file,
                Some(entry.number),
                format!("{}: 'export' prefix is ignored by dotenv loaders", entry.key),
            );
        }
    }
}
