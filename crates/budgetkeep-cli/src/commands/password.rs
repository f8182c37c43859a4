//! Password hashing for seed user entries.

use clap::Args;

use budgetkeep_auth::password::PasswordHasher;
use budgetkeep_core::error::AppError;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash; prompted for when omitted
    #[arg(long)]
    pub password: Option<String>,
}

/// Execute the hash-password command
pub fn execute(args: &HashPasswordArgs) -> Result<(), AppError> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))?,
    };

    if password.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    let hash = PasswordHasher::new().hash_password(&password)?;
    println!("{}", hash);
    Ok(())
}
