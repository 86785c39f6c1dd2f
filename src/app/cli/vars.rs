//! Vars command CLI handler.

use crate::app::commands::vars::{self, VarsFormat};
use crate::domain::AppError;

pub fn run_vars(key: Option<String>, format: VarsFormat) -> Result<(), AppError> {
    let output = match key {
        Some(key) => {
            let detail = vars::detail(&key)?;
            vars::render_detail(&detail, format)?
        }
        None => {
            let summaries = vars::list()?;
            vars::render_list(&summaries, format)?
        }
    };
    print!("{}", output);
    Ok(())
}
