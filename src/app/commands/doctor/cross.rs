//! Cross-key checks spanning more than one variable.

use crate::app::commands::doctor::diagnostics::Diagnostics;
use crate::domain::{EffectiveConfig, Settings};

pub fn cross_checks(
    file: &str,
    effective: &EffectiveConfig,
    settings: &Settings,
    diagnostics: &mut Diagnostics,
) {
    coordinate_pair(file, effective, diagnostics);
    mqtt_credentials(file, effective, diagnostics);
    port_collisions(file, settings, diagnostics);
    log_file_directory(file, settings, diagnostics);
}

fn coordinate_pair(file: &str, effective: &EffectiveConfig, diagnostics: &mut Diagnostics) {
    let lat = effective.get_non_empty("CAMPUS_BOUNDS_LAT").is_some();
    let lng = effective.get_non_empty("CAMPUS_BOUNDS_LNG").is_some();
    match (lat, lng) {
        (true, false) => diagnostics.push_error(
            file,
            None,
            "CAMPUS_BOUNDS_LAT is set but CAMPUS_BOUNDS_LNG is missing",
        ),
        (false, true) => diagnostics.push_error(
            file,
            None,
            "CAMPUS_BOUNDS_LNG is set but CAMPUS_BOUNDS_LAT is missing",
        ),
        _ => {}
    }
}

fn mqtt_credentials(file: &str, effective: &EffectiveConfig, diagnostics: &mut Diagnostics) {
    let username = effective.get_non_empty("MQTT_USERNAME").is_some();
    let password = effective.get_non_empty("MQTT_PASSWORD").is_some();
    if username && !password {
        diagnostics.push_warning(
            file,
            None,
            "MQTT_USERNAME is set without MQTT_PASSWORD; the broker will reject the connection",
        );
    }
}

fn port_collisions(file: &str, settings: &Settings, diagnostics: &mut Diagnostics) {
    let mut local_services: Vec<(&str, u16)> = Vec::new();

    if let (Some(host), Some(port)) = (&settings.api.host, settings.api.port) {
        if is_local(host) {
            local_services.push(("API_PORT", port));
        }
    }
    if let (Some(host), Some(port)) = (&settings.qdrant.host, settings.qdrant.port) {
        if is_local(host) {
            local_services.push(("QDRANT_PORT", port));
        }
    }
    if let (Some(broker), Some(port)) = (&settings.mqtt.broker, settings.mqtt.port) {
        if is_local(broker) {
            local_services.push(("MQTT_PORT", port));
        }
    }

    for (index, (name, port)) in local_services.iter().enumerate() {
        for (other_name, other_port) in &local_services[index + 1..] {
            if port == other_port {
                diagnostics.push_warning(
                    file,
                    None,
                    format!("{} and {} both bind local port {}", name, other_name, port),
                );
            }
        }
    }
}

fn log_file_directory(file: &str, settings: &Settings, diagnostics: &mut Diagnostics) {
    let Some(log_file) = &settings.log.file else {
        return;
    };
    // Relative paths resolve against the service working directory, which is
    // not knowable here; only absolute parents are checked.
    let Some(parent) = log_file.parent().filter(|parent| parent.is_absolute()) else {
        return;
    };
    if !parent.is_dir() {
        diagnostics.push_warning(
            file,
            None,
            format!("LOG_FILE directory {} does not exist", parent.display()),
        );
    }
}

fn is_local(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "127.0.0.1" | "localhost" | "::1")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Catalog, EnvDocument, EnvKey, SectionSpec, ValueKind, VarSpec};

    fn catalog() -> Catalog {
        let var = |key: &str| VarSpec {
            key: EnvKey::new(key).unwrap(),
            description: String::new(),
            kind: ValueKind::Text,
            required: false,
            secret: false,
            default: None,
        };
        Catalog::new(vec![SectionSpec {
            name: "all".to_string(),
            title: "All".to_string(),
            summary: String::new(),
            order: 1,
            vars: vec![
                var("CAMPUS_BOUNDS_LAT"),
                var("CAMPUS_BOUNDS_LNG"),
                var("MQTT_USERNAME"),
                var("MQTT_PASSWORD"),
                var("MQTT_BROKER"),
                var("MQTT_PORT"),
                var("API_HOST"),
                var("API_PORT"),
                var("QDRANT_HOST"),
                var("QDRANT_PORT"),
                var("LOG_FILE"),
            ],
        }])
        .unwrap()
    }

    fn run(content: &str) -> Diagnostics {
        let catalog = catalog();
        let document = EnvDocument::parse(content);
        let effective = EffectiveConfig::resolve(&catalog, &document, &BTreeMap::new());
        let settings = Settings::from_effective(&effective);
        let mut diagnostics = Diagnostics::default();
        cross_checks(".env", &effective, &settings, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn lone_latitude_is_an_error() {
        let diagnostics = run("CAMPUS_BOUNDS_LAT=28.6140\n");
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.errors()[0].message.contains("CAMPUS_BOUNDS_LNG"));
    }

    #[test]
    fn complete_pair_passes() {
        let diagnostics = run("CAMPUS_BOUNDS_LAT=28.6140\nCAMPUS_BOUNDS_LNG=77.2090\n");
        assert_eq!(diagnostics.error_count(), 0);
    }

    #[test]
    fn username_without_password_warns() {
        let diagnostics = run("MQTT_USERNAME=urbanai\n");
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.warnings()[0].message.contains("MQTT_PASSWORD"));
    }

    #[test]
    fn local_port_collision_warns() {
        let diagnostics =
            run("API_HOST=0.0.0.0\nAPI_PORT=6333\nQDRANT_HOST=localhost\nQDRANT_PORT=6333\n");
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.warnings()[0].message.contains("6333"));
    }

    #[test]
    fn remote_hosts_do_not_collide() {
        let diagnostics =
            run("API_HOST=0.0.0.0\nAPI_PORT=6333\nQDRANT_HOST=qdrant.internal\nQDRANT_PORT=6333\n");
        assert_eq!(diagnostics.warning_count(), 0);
    }

    #[test]
    fn missing_absolute_log_directory_warns() {
        let diagnostics = run("LOG_FILE=/nonexistent/urbanenv-test/urbanai.log\n");
        assert_eq!(diagnostics.warning_count(), 1);
        let relative = run("LOG_FILE=logs/urbanai.log\n");
        assert_eq!(relative.warning_count(), 0);
    }
}
