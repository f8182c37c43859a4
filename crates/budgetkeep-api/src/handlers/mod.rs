//! Route handlers.

pub mod auth;
pub mod error;
pub mod info;
