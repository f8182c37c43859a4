//! # budgetkeep-entity
//!
//! Domain entities shared by the authentication core and the HTTP boundary.

pub mod user;

pub use user::{AuthorizationRole, Credentials, Identity, Role, User};
