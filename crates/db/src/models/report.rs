//! Aggregate report rows for the statistics and chart endpoints.

use serde::Serialize;
use sqlx::FromRow;

/// Sales totals for one month.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Sum of `price` over sold records; 0 when nothing sold.
    pub total_sale_amount: f64,
    pub total_sold_items: i64,
    pub total_not_sold_items: i64,
}

/// Number of records in one histogram bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: i64,
}

/// Number of records in one category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Statistics, histogram and category breakdown for the same month.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub statistics: SalesSummary,
    pub bar_chart: Vec<PriceRangeCount>,
    pub pie_chart: Vec<CategoryCount>,
}
