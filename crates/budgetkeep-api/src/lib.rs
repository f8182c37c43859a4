//! # budgetkeep-api
//!
//! HTTP boundary for BudgetKeep built on Axum.
//!
//! Every request passes the authorization filter before routing. The
//! `/auth` endpoints issue and refresh token pairs and deliver them both in
//! the response body and as HTTP-only cookies.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
