pub mod catalogs;
mod filesystem_env_store;
mod network_probe;
mod template;

pub use filesystem_env_store::{FilesystemEnvStore, SystemEnvironment};
pub use network_probe::NetworkProbe;
pub use template::{render_env_header, render_template};
