//! Transaction entity model and DTOs.

use salesboard_core::listing::SearchTerm;
use salesboard_core::report_month::MonthRange;
use salesboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub date_of_sale: Timestamp,
    pub sold: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a transaction, as it appears in the seed dataset.
///
/// Unknown fields (including any upstream `id`) are ignored; the store
/// assigns its own ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    pub date_of_sale: Timestamp,
    #[serde(default)]
    pub sold: bool,
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filters for listing and counting transactions. Active filters are ANDed.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub date_range: Option<MonthRange>,
    pub search: Option<SearchTerm>,
}

/// One page of the transaction listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}
