//! # budgetkeep-core
//!
//! Core crate for BudgetKeep. Contains configuration schemas, the narrow
//! collaborator traits the authentication core depends on (password
//! encoding, wall clock), and the unified error system.
//!
//! This crate has **no** internal dependencies on other BudgetKeep crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
