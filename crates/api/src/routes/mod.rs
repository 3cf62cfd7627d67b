pub mod health;
pub mod reports;
pub mod transactions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /transactions/init                               seed load (GET)
/// /transactions                                    paginated listing (GET)
///
/// /statistics                                      monthly sales totals (GET)
/// /bar-chart                                       monthly price histogram (GET)
/// /pie-chart                                       monthly category counts (GET)
/// /combined-data                                   all three reports (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(transactions::router())
        .merge(reports::router())
}
