//! Compact signed tokens: claims, signing key, and the HS512 codec.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod key;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use key::SigningKey;

use crate::error::AuthError;

/// Stateless signer/verifier: a pure function of the key and the payload.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Builds a codec that signs and verifies with `key`.
    pub fn new(key: &SigningKey) -> Self {
        Self {
            encoder: JwtEncoder::new(key),
            decoder: JwtDecoder::new(key),
        }
    }

    /// Signs `claims` into a compact token string.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        self.encoder.encode(claims)
    }

    /// Verifies the signature of `token` and returns its claims.
    ///
    /// Expiry is not checked here; callers judge `exp` against their clock.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.decoder.decode(token)
    }
}
