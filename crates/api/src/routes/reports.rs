//! Route definitions for the month-scoped reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted under `/api`.
///
/// ```text
/// GET  /statistics      -> get_statistics
/// GET  /bar-chart       -> get_bar_chart
/// GET  /pie-chart       -> get_pie_chart
/// GET  /combined-data   -> get_combined_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(reports::get_statistics))
        .route("/bar-chart", get(reports::get_bar_chart))
        .route("/pie-chart", get(reports::get_pie_chart))
        .route("/combined-data", get(reports::get_combined_data))
}
