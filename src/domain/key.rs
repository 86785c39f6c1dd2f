use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Validated environment variable key.
///
/// Checks:
/// - Non-empty
/// - Starts with an ASCII uppercase letter
/// - Remaining characters are ASCII uppercase, digits, or '_'
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvKey(String);

impl EnvKey {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if is_valid_key(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidKey(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnvKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_valid_key(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(EnvKey::new("LLM_MODEL").is_ok());
        assert!(EnvKey::new("QDRANT_PORT").is_ok());
        assert!(EnvKey::new("HIP_VISIBLE_DEVICES").is_ok());
        assert!(EnvKey::new("X").is_ok());
    }

    #[test]
    fn invalid_keys() {
        assert!(EnvKey::new("").is_err());
        assert!(EnvKey::new("llm_model").is_err());
        assert!(EnvKey::new("1LLM").is_err());
        assert!(EnvKey::new("_LLM").is_err());
        assert!(EnvKey::new("LLM MODEL").is_err());
        assert!(EnvKey::new("LLM-MODEL").is_err());
    }
}
