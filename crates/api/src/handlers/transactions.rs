//! Handlers for seeding and listing transactions.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use salesboard_core::listing::{PageRequest, SearchTerm};
use salesboard_core::report_month::ReportMonth;
use salesboard_db::models::transaction::{TransactionFilter, TransactionPage};
use salesboard_db::repositories::TransactionRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Message returned after a successful seed load.
pub const SEED_SUCCESS_MESSAGE: &str = "Database initialized with seed data";

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Raw listing parameters. Kept as strings so malformed paging values can
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsParams {
    pub month: Option<String>,
    pub search_text: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub inserted: u64,
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// GET /api/transactions/init
///
/// Fetches the seed dataset and replaces every stored transaction with it.
/// Nothing is deleted if the fetch or decode fails; a failed insert after
/// the delete leaves the table empty.
pub async fn initialize_database(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dataset = state.seed_client.fetch().await?;
    tracing::info!(
        url = state.seed_client.url(),
        count = dataset.len(),
        "Fetched seed dataset"
    );

    let inserted = TransactionRepo::replace_all(&state.pool, &dataset).await?;
    tracing::info!(inserted, "Transactions replaced with seed data");

    Ok(Json(SeedResponse {
        message: SEED_SUCCESS_MESSAGE,
        inserted,
    }))
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/transactions?month=&searchText=&page=&perPage=
///
/// Lists one page of transactions, optionally restricted to a month of the
/// report year and to a text/price search.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListTransactionsParams>,
) -> AppResult<impl IntoResponse> {
    let month = ReportMonth::parse_optional(params.month.as_deref())?;
    let date_range = month
        .map(|m| m.range(state.config.report_year))
        .transpose()?;

    let filter = TransactionFilter {
        date_range,
        search: SearchTerm::parse(params.search_text.as_deref()),
    };
    let page = PageRequest::from_params(params.page.as_deref(), params.per_page.as_deref());

    let (transactions, total) = tokio::try_join!(
        TransactionRepo::list(&state.pool, &filter, page),
        TransactionRepo::count(&state.pool, &filter),
    )?;

    Ok(Json(TransactionPage {
        transactions,
        total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages(total),
    }))
}
