//! Password digest primitive.

use crate::result::AppResult;

/// One-way password encoding.
///
/// The authentication core only needs to produce a digest for a new
/// password and to check a raw password against a stored digest.
pub trait PasswordEncoder: Send + Sync + 'static {
    /// Hash a raw password into a storable digest.
    fn hash(&self, raw: &str) -> AppResult<String>;

    /// Check a raw password against a stored digest.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the digest itself is
    /// unusable.
    fn matches(&self, raw: &str, digest: &str) -> AppResult<bool>;
}
