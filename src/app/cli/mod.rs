//! CLI Adapter.

mod doctor;
mod init;
mod show;
mod vars;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::commands::show::ShowFormat;
use crate::app::commands::vars::VarsFormat;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "urbanenv")]
#[command(version)]
#[command(
    about = "Scaffold and validate UrbanAI environment configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a .env file populated with catalog defaults
    #[clap(visible_alias = "i")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
        /// Prompt for secret values instead of writing defaults
        #[arg(long)]
        interactive: bool,
        /// Write to a custom path instead of ./.env
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Override a default, e.g. --set MQTT_BROKER=10.40.0.5 (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Validate a .env file against the declared variable contract
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
        /// Probe declared service endpoints for reachability
        #[arg(long)]
        probe: bool,
        /// Env file to validate (default: ./.env)
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
    },
    /// Print the effective configuration with secrets redacted
    #[clap(visible_alias = "sh")]
    Show {
        /// Env file to read (default: ./.env)
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: ShowFormatArg,
        /// Limit output to one section
        #[arg(long)]
        section: Option<String>,
        /// Print secret values instead of fingerprints
        #[arg(long)]
        reveal: bool,
    },
    /// List declared variables, or describe one
    #[clap(visible_alias = "v")]
    Vars {
        /// Variable to describe in detail
        key: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: VarsFormatArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShowFormatArg {
    Text,
    Json,
    Toml,
}

impl From<ShowFormatArg> for ShowFormat {
    fn from(arg: ShowFormatArg) -> Self {
        match arg {
            ShowFormatArg::Text => ShowFormat::Text,
            ShowFormatArg::Json => ShowFormat::Json,
            ShowFormatArg::Toml => ShowFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VarsFormatArg {
    Text,
    Json,
    Yaml,
}

impl From<VarsFormatArg> for VarsFormat {
    fn from(arg: VarsFormatArg) -> Self {
        match arg {
            VarsFormatArg::Text => VarsFormat::Text,
            VarsFormatArg::Json => VarsFormat::Json,
            VarsFormatArg::Yaml => VarsFormat::Yaml,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { force, interactive, output, set } => {
            init::run_init(force, interactive, output, set).map(|_| 0)
        }
        Commands::Doctor { strict, probe, env_file } => doctor::run_doctor(strict, probe, env_file),
        Commands::Show { env_file, format, section, reveal } => {
            show::run_show(env_file, format.into(), section, reveal).map(|_| 0)
        }
        Commands::Vars { key, format } => vars::run_vars(key, format.into()).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
