//! Token lifecycle: issue, validate, refresh.

pub mod service;

pub use service::{TokenPair, TokenService};
