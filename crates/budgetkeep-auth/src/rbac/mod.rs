//! URI-pattern role-based access control.

pub mod enforcer;
pub mod pattern;
pub mod policies;

pub use enforcer::{Access, AuthorizationEngine};
pub use pattern::UriPattern;
pub use policies::{AuthorizationPolicy, PolicyBuilder};
