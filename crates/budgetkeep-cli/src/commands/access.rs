//! Offline evaluation of the access policy.
//!
//! Mirrors the request filter without signing anything: the caller names
//! the identity a token would resolve to, or none for an anonymous request.

use clap::Args;
use serde::Serialize;

use budgetkeep_auth::rbac::AuthorizationPolicy;
use budgetkeep_core::error::AppError;
use budgetkeep_entity::user::{Identity, Role};

use crate::output::{self, OutputFormat};

/// Arguments for the check-access command
#[derive(Debug, Args)]
pub struct CheckAccessArgs {
    /// Request path to evaluate
    pub uri: String,

    /// Role of the token holder; omit for an anonymous request
    #[arg(long, requires = "id")]
    pub role: Option<Role>,

    /// User id of the token holder
    #[arg(long, requires = "role")]
    pub id: Option<i64>,
}

/// Outcome of one evaluation.
#[derive(Debug, Serialize)]
pub struct AccessDecision {
    /// Path evaluated.
    pub uri: String,
    /// `anonymous` or `ROLE#id`.
    pub subject: String,
    /// Whether the request would proceed.
    pub permitted: bool,
    /// Which rule decided.
    pub reason: &'static str,
}

/// Execute the check-access command
pub fn execute(
    args: &CheckAccessArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let policy = AuthorizationPolicy::from_config(&config.authorization);

    let identity = match (args.role, args.id) {
        (Some(role), Some(id)) => Some(Identity { id, role }),
        _ => None,
    };
    let decision = evaluate(&policy, identity, &args.uri);

    output::print_item(&decision, format);
    if !decision.permitted {
        output::print_warning("Request would be halted with 403");
    }
    Ok(())
}

/// Applies the filter's decision order to a resolved identity.
pub fn evaluate(policy: &AuthorizationPolicy, identity: Option<Identity>, uri: &str) -> AccessDecision {
    let (subject, permitted, reason) = match identity {
        None => {
            let public = policy.is_public(uri);
            let reason = if public { "public pattern" } else { "no token" };
            ("anonymous".to_string(), public, reason)
        }
        Some(identity) => {
            let subject = format!("{}#{}", identity.role, identity.id);
            if policy.is_always_allowed(uri) {
                (subject, true, "refresh endpoint or error page")
            } else if policy.permits(&identity, uri) {
                (subject, true, "role pattern")
            } else {
                (subject, false, "no matching pattern")
            }
        }
    };

    AccessDecision {
        uri: uri.to_string(),
        subject,
        permitted,
        reason,
    }
}
