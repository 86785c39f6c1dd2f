//! Process environment port definition.

use std::collections::BTreeMap;

/// Port for reading the process environment.
pub trait ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String>;

    /// Values for the given keys, skipping unset ones.
    fn collect(&self, keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// Empty environment for tests and for ignoring the process overlay.
#[derive(Debug, Clone, Default)]
pub struct EmptyEnvironment;

impl ProcessEnvironment for EmptyEnvironment {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Fixed-map environment for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: BTreeMap<String, String>,
}

impl StaticEnvironment {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl ProcessEnvironment for StaticEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
