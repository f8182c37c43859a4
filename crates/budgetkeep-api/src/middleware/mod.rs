//! Request middleware.

pub mod authorize;
pub mod logging;
