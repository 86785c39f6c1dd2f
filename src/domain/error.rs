use std::io;

use thiserror::Error;

/// Library-wide error type for urbanenv operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Env file already exists at the target location.
    #[error("Env file already exists: {0} (use --force to overwrite)")]
    EnvFileExists(String),

    /// No env file found at the expected location.
    #[error("Env file not found: {0}")]
    EnvFileNotFound(String),

    /// Variable key is invalid.
    #[error("Invalid variable key '{0}': must be UPPER_SNAKE_CASE starting with a letter")]
    InvalidKey(String),

    /// Variable not declared in the catalog.
    #[error("Unknown variable '{name}'. Run 'urbanenv vars' to list declared variables.")]
    UnknownVariable { name: String },

    /// Section not declared in the catalog.
    #[error("Unknown section '{name}'. Available: {available}")]
    UnknownSection { name: String, available: String },

    /// Malformed `--set` override argument.
    #[error("Invalid override '{0}': expected KEY=VALUE")]
    MalformedOverride(String),

    /// Embedded catalog asset is corrupt.
    #[error("Invalid catalog metadata for section '{section}': {reason}")]
    InvalidCatalogMetadata { section: String, reason: String },

    /// Scaffold template failed to render.
    #[error("Template render error in '{template}': {reason}")]
    TemplateRenderError { template: String, reason: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidKey(_)
            | AppError::UnknownVariable { .. }
            | AppError::UnknownSection { .. }
            | AppError::MalformedOverride(_)
            | AppError::InvalidCatalogMetadata { .. }
            | AppError::TemplateRenderError { .. }
            | AppError::PromptError(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::EnvFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::EnvFileExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
