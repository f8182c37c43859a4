//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use budgetkeep_core::error::AppError;
use budgetkeep_core::result::AppResult;
use budgetkeep_core::traits::PasswordEncoder;

/// Argon2id digests in PHC string form.
///
/// Parameters are the `argon2` crate defaults; they are encoded in each
/// digest, so changing them later does not invalidate stored passwords.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a hasher with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes `password` under a fresh random salt.
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Checks `password` against a stored digest.
    ///
    /// A mismatch is `Ok(false)`; an unparseable digest is an error.
    pub fn verify_password(&self, password: &str, digest: &str) -> AppResult<bool> {
        let parsed = parse(digest)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Rejects a digest that could never verify, so bad seed data fails at
    /// startup instead of at login.
    pub fn check_digest(&self, digest: &str) -> AppResult<()> {
        parse(digest)
            .map(|_| ())
            .map_err(|e| AppError::configuration(e.message))
    }
}

fn parse(digest: &str) -> AppResult<PasswordHash<'_>> {
    PasswordHash::new(digest)
        .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))
}

impl PasswordEncoder for PasswordHasher {
    fn hash(&self, raw: &str) -> AppResult<String> {
        self.hash_password(raw)
    }

    fn matches(&self, raw: &str, digest: &str) -> AppResult<bool> {
        self.verify_password(raw, digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_match() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash("correct horse").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.matches("correct horse", &digest).unwrap());
        assert!(!hasher.matches("battery staple", &digest).unwrap());
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();
        assert_ne!(hasher.hash("pw").unwrap(), hasher.hash("pw").unwrap());
    }

    #[test]
    fn test_check_digest() {
        let hasher = PasswordHasher::new();
        let digest = hasher.hash_password("pw").unwrap();
        assert!(hasher.check_digest(&digest).is_ok());
        assert!(hasher.check_digest("plaintext").is_err());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.matches("pw", "not-a-phc-string").is_err());
    }
}
