//! Effective configuration: file values overlaid by the process
//! environment, with catalog defaults filling the remainder.

use std::collections::BTreeMap;

use crate::domain::{Catalog, EnvDocument};

/// Where an effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOrigin {
    File { line: u32 },
    Process,
    Default,
}

impl ValueOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            ValueOrigin::File { .. } => "file",
            ValueOrigin::Process => "process",
            ValueOrigin::Default => "default",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EffectiveValue {
    pub value: String,
    pub origin: ValueOrigin,
}

/// Keys present in the file but not declared in the catalog.
#[derive(Debug, Clone)]
pub struct UnknownEntry {
    pub key: String,
    pub line: u32,
}

/// Resolved configuration for every declared variable that has a value.
#[derive(Debug, Clone, Default)]
pub struct EffectiveConfig {
    values: BTreeMap<String, EffectiveValue>,
    unknown: Vec<UnknownEntry>,
}

impl EffectiveConfig {
    /// Overlay precedence: process environment > env file > catalog default.
    ///
    /// Only catalog-declared keys are consulted in `process_env`; the process
    /// environment is full of unrelated variables.
    pub fn resolve(
        catalog: &Catalog,
        document: &EnvDocument,
        process_env: &BTreeMap<String, String>,
    ) -> Self {
        let mut values = BTreeMap::new();

        for (_, var) in catalog.vars() {
            let key = var.key.as_str();
            let resolved = if let Some(value) = process_env.get(key) {
                Some(EffectiveValue { value: value.clone(), origin: ValueOrigin::Process })
            } else if let Some(entry) = document.get(key) {
                Some(EffectiveValue {
                    value: entry.value.clone(),
                    origin: ValueOrigin::File { line: entry.number },
                })
            } else {
                var.default.as_ref().map(|default| EffectiveValue {
                    value: default.clone(),
                    origin: ValueOrigin::Default,
                })
            };

            if let Some(resolved) = resolved {
                values.insert(key.to_string(), resolved);
            }
        }

        let unknown = document
            .entries()
            .filter(|entry| !catalog.contains(&entry.key))
            .map(|entry| UnknownEntry { key: entry.key.clone(), line: entry.number })
            .collect();

        Self { values, unknown }
    }

    pub fn get(&self, key: &str) -> Option<&EffectiveValue> {
        self.values.get(key)
    }

    /// Value lookup treating empty strings as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&EffectiveValue> {
        self.get(key).filter(|resolved| !resolved.value.is_empty())
    }

    pub fn unknown(&self) -> &[UnknownEntry] {
        &self.unknown
    }
}
