//! Request handlers.
//!
//! Handlers parse query parameters with the rules in `salesboard_core`,
//! delegate to the repositories in `salesboard_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod reports;
pub mod transactions;
