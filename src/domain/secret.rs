use sha2::{Digest, Sha256};

/// Secret value wrapper. Debug and Display never print the content.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stable short fingerprint so operators can compare secrets across
    /// environments without revealing them.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let hex: String = digest.iter().map(|byte| format!("{:02x}", byte)).collect();
        format!("sha256:{}", &hex[..12])
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_leaks() {
        let secret = Secret::new("super-secret-token");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
    }

    #[test]
    fn fingerprint_is_stable_and_short() {
        let a = Secret::new("changeme");
        let b = Secret::new("changeme");
        let c = Secret::new("different");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert!(a.fingerprint().starts_with("sha256:"));
        assert_eq!(a.fingerprint().len(), "sha256:".len() + 12);
    }
}
