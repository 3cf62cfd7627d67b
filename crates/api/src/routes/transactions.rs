//! Route definitions for the transaction listing and seed load.

use axum::routing::get;
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

/// Transaction routes mounted under `/api`.
///
/// ```text
/// GET  /transactions/init   -> initialize_database
/// GET  /transactions        -> list_transactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transactions/init", get(transactions::initialize_database))
        .route("/transactions", get(transactions::list_transactions))
}
