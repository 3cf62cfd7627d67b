//! Aggregate queries over the `transactions` table for one report month.

use salesboard_core::price_bucket::PriceBucket;
use salesboard_core::report_month::MonthRange;
use sqlx::PgPool;

use crate::models::report::{CategoryCount, SalesSummary};

/// Provides the aggregate reports behind the statistics and chart endpoints.
pub struct ReportRepo;

impl ReportRepo {
    /// Sold total and sold/unsold counts for records in `range`.
    ///
    /// `total_sale_amount` is 0 when no record in the range is sold.
    pub async fn sales_summary(
        pool: &PgPool,
        range: MonthRange,
    ) -> Result<SalesSummary, sqlx::Error> {
        sqlx::query_as::<_, SalesSummary>(
            "SELECT \
                 COALESCE(SUM(price) FILTER (WHERE sold), 0)::DOUBLE PRECISION AS total_sale_amount, \
                 COUNT(*) FILTER (WHERE sold)::BIGINT AS total_sold_items, \
                 COUNT(*) FILTER (WHERE NOT sold)::BIGINT AS total_not_sold_items \
             FROM transactions \
             WHERE date_of_sale >= $1 AND date_of_sale < $2",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_one(pool)
        .await
    }

    /// Count records in `range` whose price lies in `bucket`.
    pub async fn count_in_price_bucket(
        pool: &PgPool,
        range: MonthRange,
        bucket: PriceBucket,
    ) -> Result<i64, sqlx::Error> {
        if let Some(max) = bucket.max {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*)::BIGINT FROM transactions \
                 WHERE date_of_sale >= $1 AND date_of_sale < $2 \
                   AND price >= $3 AND price < $4",
            )
            .bind(range.start)
            .bind(range.end)
            .bind(bucket.min)
            .bind(max)
            .fetch_one(pool)
            .await
        } else {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*)::BIGINT FROM transactions \
                 WHERE date_of_sale >= $1 AND date_of_sale < $2 \
                   AND price >= $3",
            )
            .bind(range.start)
            .bind(range.end)
            .bind(bucket.min)
            .fetch_one(pool)
            .await
        }
    }

    /// Record count per distinct category in `range`, ordered by category.
    pub async fn category_counts(
        pool: &PgPool,
        range: MonthRange,
    ) -> Result<Vec<CategoryCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryCount>(
            "SELECT category, COUNT(*)::BIGINT AS count FROM transactions \
             WHERE date_of_sale >= $1 AND date_of_sale < $2 \
             GROUP BY category \
             ORDER BY category ASC",
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(pool)
        .await
    }
}
