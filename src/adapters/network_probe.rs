//! Network reachability probe using reqwest for HTTP targets and plain
//! socket connects for TCP targets.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::ports::{ProbeEndpoint, ProbeOutcome, ProbeTarget, ServiceProbe};

const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Probe adapter performing real network I/O with bounded timeouts.
#[derive(Debug)]
pub struct NetworkProbe {
    client: Option<Client>,
    timeout: Duration,
}

impl NetworkProbe {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().ok();
        Self { client, timeout }
    }

    fn probe_http(&self, url: &url::Url) -> ProbeOutcome {
        let Some(client) = &self.client else {
            return ProbeOutcome::Unreachable { reason: "HTTP client unavailable".to_string() };
        };

        match client.get(url.clone()).send() {
            // Any HTTP response means the service answered; a health endpoint
            // returning 4xx/5xx still proves the listener is up, so report
            // the status and let the operator judge.
            Ok(response) => {
                ProbeOutcome::Reachable { detail: format!("HTTP {}", response.status().as_u16()) }
            }
            Err(err) => ProbeOutcome::Unreachable { reason: root_cause(&err) },
        }
    }

    fn probe_tcp(&self, host: &str, port: u16) -> ProbeOutcome {
        let addrs = match (host, port).to_socket_addrs() {
            Ok(addrs) => addrs.collect::<Vec<_>>(),
            Err(err) => {
                return ProbeOutcome::Unreachable {
                    reason: format!("address resolution failed: {}", err),
                };
            }
        };

        if addrs.is_empty() {
            return ProbeOutcome::Unreachable { reason: "no addresses resolved".to_string() };
        }

        let mut last_error = String::new();
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return ProbeOutcome::Reachable { detail: format!("connected {}", addr) },
                Err(err) => last_error = err.to_string(),
            }
        }
        ProbeOutcome::Unreachable { reason: last_error }
    }
}

impl Default for NetworkProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceProbe for NetworkProbe {
    fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        match &target.endpoint {
            ProbeEndpoint::Http(url) => self.probe_http(url),
            ProbeEndpoint::Tcp { host, port } => self.probe_tcp(host, *port),
        }
    }
}

fn root_cause(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "timed out".to_string();
    }
    if err.is_connect() {
        return "connection refused or unreachable".to_string();
    }
    err.to_string()
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    fn tcp_target(host: &str, port: u16) -> ProbeTarget {
        ProbeTarget {
            service: "test".to_string(),
            endpoint: ProbeEndpoint::Tcp { host: host.to_string(), port },
        }
    }

    #[test]
    fn tcp_probe_reaches_bound_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let probe = NetworkProbe::with_timeout(Duration::from_millis(500));
        let outcome = probe.probe(&tcp_target("127.0.0.1", port));
        assert!(matches!(outcome, ProbeOutcome::Reachable { .. }));
    }

    #[test]
    fn tcp_probe_reports_closed_port() {
        // Bind then drop to obtain a port that is very likely closed.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let probe = NetworkProbe::with_timeout(Duration::from_millis(500));
        let outcome = probe.probe(&tcp_target("127.0.0.1", port));
        assert!(matches!(outcome, ProbeOutcome::Unreachable { .. }));
    }

    #[test]
    fn tcp_probe_reports_unresolvable_host() {
        let probe = NetworkProbe::with_timeout(Duration::from_millis(500));
        let outcome = probe.probe(&tcp_target("host.invalid", 1883));
        assert!(matches!(outcome, ProbeOutcome::Unreachable { .. }));
    }
}
