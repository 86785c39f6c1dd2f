pub mod catalog;
pub mod effective;
pub mod env_file;
pub mod error;
pub mod key;
pub mod scaffold;
pub mod secret;
pub mod settings;
pub mod value;

pub use catalog::{Catalog, SectionSpec, VarSpec};
pub use effective::{EffectiveConfig, EffectiveValue, UnknownEntry, ValueOrigin};
pub use env_file::{EnvDocument, Entry, Line};
pub use error::AppError;
pub use key::{EnvKey, is_valid_key};
pub use secret::Secret;
pub use settings::Settings;
pub use value::{LOG_LEVELS, ValueKind};
