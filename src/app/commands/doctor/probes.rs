//! Reachability probes for the services the configuration points at.

use url::Url;

use crate::app::commands::doctor::diagnostics::Diagnostics;
use crate::domain::Settings;
use crate::ports::{ProbeEndpoint, ProbeOutcome, ProbeTarget, ServiceProbe};

/// Derive probe targets from the typed settings. Unset or unparseable
/// settings simply produce no target.
pub fn probe_targets(settings: &Settings) -> Vec<ProbeTarget> {
    let mut targets = Vec::new();

    if let Some(base_url) = &settings.llm.base_url {
        if let Some(url) = join_path(base_url, "models") {
            targets.push(http_target("llm", url));
        }
    }

    if let (Some(host), Some(port)) = (&settings.qdrant.host, settings.qdrant.port) {
        if let Ok(url) = Url::parse(&format!("http://{}:{}/readyz", host, port)) {
            targets.push(http_target("qdrant", url));
        }
    }

    if let Some(url) = &settings.influx.url {
        if let Some(url) = join_path(url, "health") {
            targets.push(http_target("influxdb", url));
        }
    }

    if let Some(url) = &settings.mlflow.tracking_uri {
        if let Some(url) = join_path(url, "health") {
            targets.push(http_target("mlflow", url));
        }
    }

    if let (Some(broker), Some(port)) = (&settings.mqtt.broker, settings.mqtt.port) {
        targets.push(tcp_target("mqtt", broker, port));
    }

    if let Some(url) = &settings.database.url {
        if let Some(host) = url.host_str() {
            targets.push(tcp_target("postgres", host, url.port().unwrap_or(5432)));
        }
    }

    if let Some(url) = &settings.cache.redis_url {
        if let Some(host) = url.host_str() {
            targets.push(tcp_target("redis", host, url.port().unwrap_or(6379)));
        }
    }

    targets
}

/// Run every probe; unreachable services are warnings, since doctor may run
/// on a workstation with the stack down.
pub fn run_probes(
    file: &str,
    probe: &dyn ServiceProbe,
    targets: &[ProbeTarget],
    diagnostics: &mut Diagnostics,
) -> Vec<(ProbeTarget, ProbeOutcome)> {
    let mut results = Vec::new();
    for target in targets {
        let outcome = probe.probe(target);
        if let ProbeOutcome::Unreachable { reason } = &outcome {
            diagnostics.push_warning(
                file,
                None,
                format!("{} unreachable at {}: {}", target.service, target.endpoint, reason),
            );
        }
        results.push((target.clone(), outcome));
    }
    results
}

fn http_target(service: &str, url: Url) -> ProbeTarget {
    ProbeTarget { service: service.to_string(), endpoint: ProbeEndpoint::Http(url) }
}

fn tcp_target(service: &str, host: &str, port: u16) -> ProbeTarget {
    ProbeTarget {
        service: service.to_string(),
        endpoint: ProbeEndpoint::Tcp { host: host.to_string(), port },
    }
}

/// Join a path segment onto a base URL, tolerating a missing trailing slash.
fn join_path(base: &Url, segment: &str) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().ok()?;
        segments.pop_if_empty().push(segment);
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::adapters::catalogs::load_catalog;
    use crate::domain::{EffectiveConfig, EnvDocument};
    use crate::ports::StaticProbe;

    fn settings(content: &str) -> Settings {
        let catalog = load_catalog().unwrap();
        let document = EnvDocument::parse(content);
        let effective = EffectiveConfig::resolve(&catalog, &document, &BTreeMap::new());
        Settings::from_effective(&effective)
    }

    #[test]
    fn full_default_config_yields_all_targets() {
        // Empty file: catalog defaults fill everything.
        let targets = probe_targets(&settings(""));
        let services: Vec<&str> = targets.iter().map(|t| t.service.as_str()).collect();
        assert_eq!(
            services,
            vec!["llm", "qdrant", "influxdb", "mlflow", "mqtt", "postgres", "redis"]
        );
    }

    #[test]
    fn llm_probe_hits_the_models_route() {
        let targets = probe_targets(&settings("LLM_BASE_URL=http://localhost:8001/v1\n"));
        let llm = targets.iter().find(|t| t.service == "llm").unwrap();
        assert_eq!(llm.endpoint.to_string(), "http://localhost:8001/v1/models");
    }

    #[test]
    fn database_probe_uses_url_port() {
        let targets =
            probe_targets(&settings("DATABASE_URL=postgresql://u:p@db.internal:6432/urbanai\n"));
        let postgres = targets.iter().find(|t| t.service == "postgres").unwrap();
        assert_eq!(
            postgres.endpoint,
            ProbeEndpoint::Tcp { host: "db.internal".to_string(), port: 6432 }
        );
    }

    #[test]
    fn unreachable_services_become_warnings() {
        let targets = probe_targets(&settings(""));
        let probe = StaticProbe::default().failing("qdrant").failing("redis");
        let mut diagnostics = Diagnostics::default();
        let results = run_probes(".env", &probe, &targets, &mut diagnostics);

        assert_eq!(results.len(), targets.len());
        assert_eq!(diagnostics.warning_count(), 2);
        assert_eq!(diagnostics.error_count(), 0);
    }
}
