//! Typed settings tree built from the effective configuration.
//!
//! Construction is lenient: a value that fails to parse for its field is
//! left unset here and reported by the doctor's value checks instead. This
//! keeps `show` and the probes usable against a partially broken file.

use std::path::PathBuf;

use url::Url;

use crate::domain::{EffectiveConfig, Secret};

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub accelerator: AcceleratorSettings,
    pub qdrant: QdrantSettings,
    pub mqtt: MqttSettings,
    pub influx: InfluxSettings,
    pub gis: GisSettings,
    pub cameras: CameraSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    pub api: ApiSettings,
    pub mlflow: MlflowSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default)]
pub struct LlmSettings {
    pub model: Option<String>,
    pub base_url: Option<Url>,
    pub api_key: Option<Secret>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AcceleratorSettings {
    pub visible_devices: Vec<u32>,
    pub rocm_home: Option<PathBuf>,
    pub quark_quantize: Option<bool>,
    pub quark_dtype: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct QdrantSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub collection: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MqttSettings {
    pub broker: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<Secret>,
}

#[derive(Debug, Clone, Default)]
pub struct InfluxSettings {
    pub url: Option<Url>,
    pub token: Option<Secret>,
    pub org: Option<String>,
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GisSettings {
    pub arcgis_api_key: Option<Secret>,
    pub mapbox_token: Option<Secret>,
    pub campus_lat: Option<f64>,
    pub campus_lng: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct CameraSettings {
    pub rtsp_streams: Vec<Url>,
    pub footfall_model_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct DatabaseSettings {
    pub url: Option<Url>,
}

#[derive(Debug, Clone, Default)]
pub struct CacheSettings {
    pub redis_url: Option<Url>,
}

#[derive(Debug, Clone, Default)]
pub struct ApiSettings {
    pub secret_key: Option<Secret>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MlflowSettings {
    pub tracking_uri: Option<Url>,
    pub experiment_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl Settings {
    pub fn from_effective(config: &EffectiveConfig) -> Self {
        let text = |key: &str| config.get_non_empty(key).map(|v| v.value.clone());
        let secret = |key: &str| config.get_non_empty(key).map(|v| Secret::new(v.value.clone()));
        let url = |key: &str| text(key).and_then(|v| Url::parse(&v).ok());
        let port = |key: &str| text(key).and_then(|v| v.parse::<u16>().ok());
        let path = |key: &str| text(key).map(PathBuf::from);

        Self {
            llm: LlmSettings {
                model: text("LLM_MODEL"),
                base_url: url("LLM_BASE_URL"),
                api_key: secret("LLM_API_KEY"),
                max_tokens: text("LLM_MAX_TOKENS").and_then(|v| v.parse().ok()),
                temperature: text("LLM_TEMPERATURE").and_then(|v| v.parse().ok()),
            },
            accelerator: AcceleratorSettings {
                visible_devices: text("HIP_VISIBLE_DEVICES")
                    .map(|v| v.split(',').filter_map(|item| item.trim().parse().ok()).collect())
                    .unwrap_or_default(),
                rocm_home: path("ROCM_HOME"),
                quark_quantize: text("AMD_QUARK_QUANTIZE").and_then(|v| parse_bool(&v)),
                quark_dtype: text("AMD_QUARK_DTYPE"),
            },
            qdrant: QdrantSettings {
                host: text("QDRANT_HOST"),
                port: port("QDRANT_PORT"),
                collection: text("QDRANT_COLLECTION"),
            },
            mqtt: MqttSettings {
                broker: text("MQTT_BROKER"),
                port: port("MQTT_PORT"),
                username: text("MQTT_USERNAME"),
                password: secret("MQTT_PASSWORD"),
            },
            influx: InfluxSettings {
                url: url("INFLUX_URL"),
                token: secret("INFLUX_TOKEN"),
                org: text("INFLUX_ORG"),
                bucket: text("INFLUX_BUCKET"),
            },
            gis: GisSettings {
                arcgis_api_key: secret("ARCGIS_API_KEY"),
                mapbox_token: secret("MAPBOX_TOKEN"),
                campus_lat: text("CAMPUS_BOUNDS_LAT").and_then(|v| v.parse().ok()),
                campus_lng: text("CAMPUS_BOUNDS_LNG").and_then(|v| v.parse().ok()),
            },
            cameras: CameraSettings {
                rtsp_streams: text("RTSP_STREAMS")
                    .map(|v| {
                        v.split(',').filter_map(|item| Url::parse(item.trim()).ok()).collect()
                    })
                    .unwrap_or_default(),
                footfall_model_path: path("FOOTFALL_MODEL_PATH"),
            },
            database: DatabaseSettings { url: url("DATABASE_URL") },
            cache: CacheSettings { redis_url: url("REDIS_URL") },
            api: ApiSettings {
                secret_key: secret("API_SECRET_KEY"),
                host: text("API_HOST"),
                port: port("API_PORT"),
                cors_origins: text("CORS_ORIGINS")
                    .map(|v| v.split(',').map(|item| item.trim().to_string()).collect())
                    .unwrap_or_default(),
            },
            mlflow: MlflowSettings {
                tracking_uri: url("MLFLOW_TRACKING_URI"),
                experiment_name: text("MLFLOW_EXPERIMENT_NAME"),
            },
            log: LogSettings {
                level: text("LOG_LEVEL").map(|v| v.to_ascii_uppercase()),
                file: path("LOG_FILE"),
            },
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
