//! HMAC signing key.

use std::fmt;

use argon2::password_hash::rand_core::{OsRng, RngCore};

use budgetkeep_core::config::MIN_SECRET_BYTES;
use budgetkeep_core::error::AppError;

/// Symmetric key shared by the token encoder and decoder.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Draws a fresh 512-bit key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; MIN_SECRET_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Uses a configured secret as the key.
    pub fn from_secret(secret: &str) -> Result<Self, AppError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(AppError::configuration(format!(
                "Signing secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        Ok(Self {
            bytes: secret.as_bytes().to_vec(),
        })
    }

    /// The configured secret if any, otherwise a generated key.
    pub fn from_config(secret: Option<&str>) -> Result<Self, AppError> {
        match secret {
            Some(secret) => Self::from_secret(secret),
            None => {
                tracing::warn!("No token secret configured; tokens will not survive a restart");
                Ok(Self::generate())
            }
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish()
    }
}
