//! CLI command definitions and dispatch.

pub mod access;
pub mod config;
pub mod password;
pub mod policy;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use budgetkeep_core::config::AppConfig;
use budgetkeep_core::error::AppError;

/// BudgetKeep: token and access-policy administration
#[derive(Debug, Parser)]
#[command(name = "budgetkeep", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the BudgetKeep server
    Serve(serve::ServeArgs),
    /// Hash a password for a seed user entry
    HashPassword(password::HashPasswordArgs),
    /// Evaluate the access policy for a URI
    CheckAccess(access::CheckAccessArgs),
    /// Inspect the access policy
    Policy(policy::PolicyArgs),
    /// Issue or inspect tokens
    Token(token::TokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::HashPassword(args) => password::execute(args),
            Commands::CheckAccess(args) => access::execute(args, &self.config, self.format),
            Commands::Policy(args) => policy::execute(args, &self.config, self.format),
            Commands::Token(args) => token::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}
