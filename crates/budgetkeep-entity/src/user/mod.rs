//! User entity, roles, and the identity resolved from a token.

pub mod credentials;
pub mod identity;
pub mod model;
pub mod role;

pub use credentials::Credentials;
pub use identity::Identity;
pub use model::User;
pub use role::{AuthorizationRole, Role};
