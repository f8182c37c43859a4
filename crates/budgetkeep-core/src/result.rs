//! Convenience result type alias for BudgetKeep.

use crate::error::AppError;

/// A specialized `Result` type for BudgetKeep operations.
pub type AppResult<T> = Result<T, AppError>;
