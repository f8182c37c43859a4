//! # budgetkeep-auth
//!
//! Authentication and authorization core for BudgetKeep.
//!
//! ## Modules
//!
//! - `jwt`: HS512 token signing and verification
//! - `token`: token pair issuance, validation, and refresh
//! - `rbac`: URI-pattern authorization policy and engine
//! - `password`: Argon2id password hashing
//! - `directory`: user lookup by id or username
//! - `error`: the authentication/authorization failure taxonomy

pub mod directory;
pub mod error;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod token;

pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use error::{AuthError, CredentialFailure};
pub use jwt::{Claims, SigningKey, TokenCodec};
pub use password::PasswordHasher;
pub use rbac::{Access, AuthorizationEngine, AuthorizationPolicy, UriPattern};
pub use token::{TokenPair, TokenService};
