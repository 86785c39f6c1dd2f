//! Doctor command CLI handler.

use std::path::PathBuf;

use crate::adapters::{FilesystemEnvStore, NetworkProbe, SystemEnvironment};
use crate::app::commands::doctor::{self, DoctorOptions};
use crate::domain::AppError;

pub fn run_doctor(
    strict: bool,
    probe: bool,
    env_file: Option<PathBuf>,
) -> Result<i32, AppError> {
    let store = FilesystemEnvStore::new();
    let process_env = SystemEnvironment;
    let network_probe = NetworkProbe::new();

    let outcome = doctor::execute(
        &store,
        &process_env,
        &network_probe,
        DoctorOptions { strict, probe, env_file },
    )?;

    Ok(outcome.exit_code)
}
