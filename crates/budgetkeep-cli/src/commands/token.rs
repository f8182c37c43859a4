//! Token issuance and inspection against the configured key.

use std::sync::Arc;

use clap::{Args, Subcommand};

use budgetkeep_auth::jwt::{SigningKey, TokenCodec};
use budgetkeep_core::config::AppConfig;
use budgetkeep_core::error::AppError;
use budgetkeep_core::traits::{Clock, ManualClock, SystemClock};
use budgetkeep_entity::user::Credentials;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Log in as a seed user and print the token pair
    Issue {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password (prompted for when omitted, keeping it out of shell history)
        #[arg(short, long)]
        password: Option<String>,
        /// Pretend the current time is this epoch millisecond
        #[arg(long)]
        at: Option<i64>,
    },
    /// Exchange a refresh token for a new pair
    Refresh {
        /// Refresh token
        token: String,
        /// Pretend the current time is this epoch millisecond
        #[arg(long)]
        at: Option<i64>,
    },
    /// Verify a token's signature and print its claims
    Inspect {
        /// Token
        token: String,
    },
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    require_secret(&config)?;

    match &args.command {
        TokenCommand::Issue {
            username,
            password,
            at,
        } => {
            let password = resolve_password(password.as_deref(), prompt_password)?;
            let state = budgetkeep_api::app::build_state_with_clock(config, clock(*at))?;
            let pair = state
                .token_service
                .issue(&Credentials::new(username.as_str(), password.as_str()))
                .await?;
            output::print_item(&pair, format);
        }
        TokenCommand::Refresh { token, at } => {
            let state = budgetkeep_api::app::build_state_with_clock(config, clock(*at))?;
            let pair = state.token_service.refresh(token)?;
            output::print_item(&pair, format);
        }
        TokenCommand::Inspect { token } => {
            let key = SigningKey::from_config(config.tokens.secret.as_deref())?;
            let claims = TokenCodec::new(&key).verify(token)?;
            output::print_item(&claims, format);
        }
    }

    Ok(())
}

/// Tokens from a per-process key are useless once the command exits.
fn require_secret(config: &AppConfig) -> Result<(), AppError> {
    if config.tokens.secret.is_none() {
        return Err(AppError::configuration(
            "tokens.secret must be configured to issue or inspect tokens from the CLI",
        ));
    }
    Ok(())
}

fn resolve_password(
    given: Option<&str>,
    prompt: impl FnOnce() -> Result<String, AppError>,
) -> Result<String, AppError> {
    match given {
        Some(password) => Ok(password.to_string()),
        None => prompt(),
    }
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))
}

fn clock(at: Option<i64>) -> Arc<dyn Clock> {
    match at {
        Some(now) => Arc::new(ManualClock::new(now)),
        None => Arc::new(SystemClock),
    }
}
