mod env_store;
mod probe;
mod process_env;

pub use env_store::{EnvFileStore, MemoryEnvStore};
pub use probe::{ProbeEndpoint, ProbeOutcome, ProbeTarget, ServiceProbe, StaticProbe};
pub use process_env::{EmptyEnvironment, ProcessEnvironment, StaticEnvironment};
