use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

static ENV_HEADER_TEMPLATE: &str = include_str!("../assets/templates/env_header.j2");

#[derive(Serialize)]
struct HeaderContext<'a> {
    version: &'a str,
    generated_at: &'a str,
}

/// Render the scaffold header for `init`.
pub fn render_env_header(generated_at: &str) -> Result<String, AppError> {
    render_template(
        ENV_HEADER_TEMPLATE,
        "env_header",
        HeaderContext { version: env!("CARGO_PKG_VERSION"), generated_at },
    )
}

/// Render an embedded template with strict undefined-variable handling.
pub fn render_template(
    template: &str,
    template_name: &str,
    context: impl Serialize,
) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, context).map_err(|err| AppError::TemplateRenderError {
        template: template_name.to_string(),
        reason: err.to_string(),
    })
}
