//! Service reachability probe port definition.

use url::Url;

/// Endpoint to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEndpoint {
    /// HTTP GET against a health-style path.
    Http(Url),
    /// Plain TCP connect.
    Tcp { host: String, port: u16 },
}

impl std::fmt::Display for ProbeEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeEndpoint::Http(url) => write!(f, "{}", url),
            ProbeEndpoint::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
        }
    }
}

/// A service endpoint derived from the effective configuration.
#[derive(Debug, Clone)]
pub struct ProbeTarget {
    /// Service label, e.g. `qdrant`.
    pub service: String,
    pub endpoint: ProbeEndpoint,
}

/// Probe verdict. Transport failure is a verdict, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable { detail: String },
    Unreachable { reason: String },
}

/// Port for endpoint reachability checks.
pub trait ServiceProbe {
    fn probe(&self, target: &ProbeTarget) -> ProbeOutcome;
}

/// Fixed-verdict probe for testing without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    unreachable: Vec<String>,
}

impl StaticProbe {
    /// Mark a service as unreachable; everything else reports reachable.
    pub fn failing(mut self, service: &str) -> Self {
        self.unreachable.push(service.to_string());
        self
    }
}

impl ServiceProbe for StaticProbe {
    fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        if self.unreachable.iter().any(|service| service == &target.service) {
            ProbeOutcome::Unreachable { reason: "static probe failure".to_string() }
        } else {
            ProbeOutcome::Reachable { detail: "static probe".to_string() }
        }
    }
}
