//! JWT token signing.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use super::claims::Claims;
use super::key::SigningKey;
use crate::error::AuthError;

/// Signs claims into HS512 JWTs.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Header stamped on every token.
    header: Header,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("alg", &self.header.alg)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates an encoder for the given key.
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            header: Header::new(Algorithm::HS512),
        }
    }

    /// Signs `claims`.
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&self.header, claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}
