//! urbanenv: scaffold and validate UrbanAI platform environment configuration.
//!
//! The embedded variable catalog is the source of truth for the platform's
//! environment contract. The library layers a `.env` file under the process
//! environment, builds a typed settings tree, and exposes the same
//! operations the `urbanenv` binary offers: `init`, `doctor`, `show`, and
//! `vars`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::PathBuf;

use adapters::{FilesystemEnvStore, NetworkProbe, SystemEnvironment};
use app::commands::{doctor, init, show, vars};

pub use app::commands::DEFAULT_ENV_FILE;
pub use app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use app::commands::init::{InitOptions, InitOutcome};
pub use app::commands::show::{RenderedConfig, RenderedSection, RenderedVar, ShowFormat, ShowOptions};
pub use app::commands::vars::{VarDetail, VarSummary, VarsFormat};
pub use domain::{AppError, Catalog, EffectiveConfig, EnvDocument, Settings};

/// Write a `.env` scaffold populated with catalog defaults.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    let store = FilesystemEnvStore::new();
    init::execute(&store, options)
}

/// Validate an env file against the declared variable contract.
///
/// Returns a `DoctorOutcome` with error/warning counts and the process exit
/// code the CLI would use.
pub fn doctor(options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let store = FilesystemEnvStore::new();
    doctor::execute(&store, &SystemEnvironment, &NetworkProbe::new(), options)
}

/// Resolve and render the effective configuration (secrets redacted unless
/// `options.reveal` is set).
pub fn show(options: &ShowOptions) -> Result<RenderedConfig, AppError> {
    let store = FilesystemEnvStore::new();
    show::execute(&store, &SystemEnvironment, options)
}

/// List every declared variable.
pub fn vars_list() -> Result<Vec<VarSummary>, AppError> {
    vars::list()
}

/// Describe a single declared variable.
pub fn vars_detail(key: &str) -> Result<VarDetail, AppError> {
    vars::detail(key)
}

/// The embedded variable catalog.
pub fn catalog() -> Result<Catalog, AppError> {
    adapters::catalogs::load_catalog()
}

/// Load the typed settings tree for an env file, overlaying the process
/// environment. Intended for platform services embedding this crate.
pub fn load_settings(env_file: Option<PathBuf>) -> Result<Settings, AppError> {
    use ports::{EnvFileStore, ProcessEnvironment};

    let store = FilesystemEnvStore::new();
    let path = env_file.unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

    let catalog = adapters::catalogs::load_catalog()?;
    let document = if store.exists(&path) {
        EnvDocument::parse(&store.read(&path)?)
    } else {
        EnvDocument::default()
    };

    let declared_keys: Vec<&str> = catalog.vars().map(|(_, var)| var.key.as_str()).collect();
    let overlay = SystemEnvironment.collect(&declared_keys);
    let effective = EffectiveConfig::resolve(&catalog, &document, &overlay);
    Ok(Settings::from_effective(&effective))
}
