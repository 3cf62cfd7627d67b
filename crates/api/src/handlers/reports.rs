//! Handlers for the month-scoped report endpoints.
//!
//! Every report requires a `month` parameter (1-12) and rejects a missing or
//! malformed one with 400 before querying the store.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use futures::future::try_join_all;
use salesboard_core::price_bucket::PRICE_BUCKETS;
use salesboard_core::report_month::{MonthRange, ReportMonth};
use salesboard_db::models::report::{CombinedReport, PriceRangeCount};
use salesboard_db::repositories::ReportRepo;
use salesboard_db::DbPool;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct MonthParams {
    pub month: Option<String>,
}

impl MonthParams {
    fn range(&self, report_year: i32) -> AppResult<MonthRange> {
        let month = ReportMonth::require(self.month.as_deref())?;
        Ok(month.range(report_year)?)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/statistics?month=
///
/// Total sale amount, sold count and unsold count for the month.
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let range = params.range(state.config.report_year)?;
    let summary = ReportRepo::sales_summary(&state.pool, range).await?;
    Ok(Json(summary))
}

/// GET /api/bar-chart?month=
///
/// Ten price buckets with the number of the month's records in each.
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let range = params.range(state.config.report_year)?;
    let histogram = price_histogram(&state.pool, range).await?;
    Ok(Json(histogram))
}

/// GET /api/pie-chart?month=
///
/// Number of the month's records per category.
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let range = params.range(state.config.report_year)?;
    let categories = ReportRepo::category_counts(&state.pool, range).await?;
    Ok(Json(categories))
}

/// GET /api/combined-data?month=
///
/// Statistics, bar chart and pie chart for the same month in one response.
pub async fn get_combined_data(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let range = params.range(state.config.report_year)?;

    let (statistics, bar_chart, pie_chart) = tokio::try_join!(
        ReportRepo::sales_summary(&state.pool, range),
        price_histogram(&state.pool, range),
        ReportRepo::category_counts(&state.pool, range),
    )?;

    Ok(Json(CombinedReport {
        statistics,
        bar_chart,
        pie_chart,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Count the month's records in every price bucket.
///
/// The bucket queries run concurrently; results keep the fixed bucket order.
pub async fn price_histogram(
    pool: &DbPool,
    range: MonthRange,
) -> Result<Vec<PriceRangeCount>, sqlx::Error> {
    let counts = try_join_all(
        PRICE_BUCKETS
            .iter()
            .map(|bucket| ReportRepo::count_in_price_bucket(pool, range, *bucket)),
    )
    .await?;

    Ok(PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| PriceRangeCount {
            range: bucket.label(),
            count,
        })
        .collect())
}
