//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use budgetkeep_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration (secrets and password hashes omitted)
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            // JSON only: the Debug form would include the signing secret.
            output::print_item(&config, OutputFormat::Json);
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Access TTL (ms)", &config.tokens.access_ttl_ms.to_string());
                output::print_kv("Refresh TTL (ms)", &config.tokens.refresh_ttl_ms.to_string());
                output::print_kv(
                    "Signing secret",
                    if config.tokens.secret.is_some() {
                        "configured"
                    } else {
                        "generated per process"
                    },
                );
                output::print_kv("Seed users", &config.users.len().to_string());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
