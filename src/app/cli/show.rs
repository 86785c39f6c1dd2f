//! Show command CLI handler.

use std::path::PathBuf;

use crate::adapters::{FilesystemEnvStore, SystemEnvironment};
use crate::app::commands::show::{self, ShowFormat, ShowOptions};
use crate::domain::AppError;

pub fn run_show(
    env_file: Option<PathBuf>,
    format: ShowFormat,
    section: Option<String>,
    reveal: bool,
) -> Result<(), AppError> {
    let store = FilesystemEnvStore::new();
    let process_env = SystemEnvironment;

    let options = ShowOptions { env_file, format, section, reveal };
    let config = show::execute(&store, &process_env, &options)?;
    print!("{}", show::render(&config, format)?);
    Ok(())
}
