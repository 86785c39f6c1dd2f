//! Init command CLI handler, including interactive secret prompts.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Error as DialoguerError, Input};

use crate::adapters::FilesystemEnvStore;
use crate::adapters::catalogs::load_catalog;
use crate::app::commands::init::{self, InitOptions};
use crate::domain::AppError;

pub fn run_init(
    force: bool,
    interactive: bool,
    output: Option<PathBuf>,
    set: Vec<String>,
) -> Result<(), AppError> {
    let mut overrides = parse_overrides(set)?;

    if interactive {
        match prompt_secrets(&mut overrides)? {
            PromptOutcome::Completed => {}
            PromptOutcome::Cancelled => {
                println!("Aborted.");
                return Ok(());
            }
        }
    }

    let store = FilesystemEnvStore::new();
    let outcome = init::execute(&store, InitOptions { force, output, overrides })?;

    println!("✅ Wrote {} with {} variables", outcome.path.display(), outcome.var_count);
    Ok(())
}

fn parse_overrides(set: Vec<String>) -> Result<Vec<(String, String)>, AppError> {
    set.into_iter()
        .map(|raw| {
            raw.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or(AppError::MalformedOverride(raw))
        })
        .collect()
}

enum PromptOutcome {
    Completed,
    Cancelled,
}

/// Ask for each secret variable not already overridden via `--set`.
fn prompt_secrets(overrides: &mut Vec<(String, String)>) -> Result<PromptOutcome, AppError> {
    let catalog = load_catalog()?;

    for (_, var) in catalog.vars() {
        if !var.secret {
            continue;
        }
        if overrides.iter().any(|(key, _)| key == var.key.as_str()) {
            continue;
        }

        let prompt = if var.description.is_empty() {
            var.key.to_string()
        } else {
            format!("{} ({})", var.key, var.description)
        };

        let mut input = Input::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = var.default.clone().filter(|default| !default.is_empty()) {
            input = input.default(default);
        }

        match input.interact_text() {
            Ok(value) => overrides.push((var.key.to_string(), value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                return Ok(PromptOutcome::Cancelled);
            }
            Err(err) => {
                return Err(AppError::PromptError(format!(
                    "failed to read {}: {}",
                    var.key, err
                )));
            }
        }
    }

    Ok(PromptOutcome::Completed)
}
