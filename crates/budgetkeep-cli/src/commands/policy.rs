//! Access policy inspection.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use budgetkeep_auth::rbac::{AuthorizationPolicy, UriPattern};
use budgetkeep_core::error::AppError;
use budgetkeep_entity::user::AuthorizationRole;

use crate::output::{self, OutputFormat};

/// Arguments for policy commands
#[derive(Debug, Args)]
pub struct PolicyArgs {
    /// Policy subcommand
    #[command(subcommand)]
    pub command: PolicyCommand,
}

/// Policy subcommands
#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// List every configured pattern
    Show,
}

/// One pattern row.
#[derive(Debug, Serialize, Tabled)]
pub struct PatternRow {
    /// Bucket name.
    pub bucket: String,
    /// Pattern as configured.
    pub pattern: String,
    /// `prefix` or `exact`.
    pub kind: &'static str,
    /// Whether `{id}` is substituted.
    pub templated: bool,
}

impl PatternRow {
    fn new(bucket: &str, pattern: &UriPattern) -> Self {
        Self {
            bucket: bucket.to_string(),
            pattern: pattern.as_str().to_string(),
            kind: if pattern.is_prefix() { "prefix" } else { "exact" },
            templated: pattern.is_templated(),
        }
    }
}

/// Execute policy commands
pub fn execute(args: &PolicyArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        PolicyCommand::Show => {
            let config = super::load_config(config_path)?;
            let policy = AuthorizationPolicy::from_config(&config.authorization);
            output::print_list(&rows(&policy), format);
            output::print_kv("Refresh endpoint", policy.refresh_uri());
            output::print_kv("Error prefix", policy.error_prefix());
        }
    }
    Ok(())
}

fn rows(policy: &AuthorizationPolicy) -> Vec<PatternRow> {
    let public = policy
        .public_patterns()
        .iter()
        .map(|p| PatternRow::new("PUBLIC", p));
    let roles = AuthorizationRole::ALL.into_iter().flat_map(|role| {
        policy
            .patterns(role)
            .iter()
            .map(move |p| PatternRow::new(role.as_str(), p))
    });
    public.chain(roles).collect()
}
