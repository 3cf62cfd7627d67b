//! Integration tests for the month-scoped aggregate reports.

use chrono::{TimeZone, Utc};
use salesboard_core::price_bucket::PRICE_BUCKETS;
use salesboard_core::report_month::{MonthRange, ReportMonth};
use salesboard_db::models::transaction::CreateTransaction;
use salesboard_db::repositories::{ReportRepo, TransactionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sale(price: f64, category: &str, month: u32, sold: bool) -> CreateTransaction {
    CreateTransaction {
        title: format!("{category} at {price}"),
        description: String::new(),
        price,
        category: category.to_string(),
        image: None,
        date_of_sale: Utc.with_ymd_and_hms(2022, month, 15, 9, 30, 0).unwrap(),
        sold,
    }
}

fn march() -> MonthRange {
    ReportMonth::new(3).unwrap().range(2022).unwrap()
}

async fn load(pool: &PgPool, entries: &[CreateTransaction]) {
    TransactionRepo::replace_all(pool, entries).await.unwrap();
}

// ---------------------------------------------------------------------------
// Sales summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_totals_sold_records(pool: PgPool) {
    load(
        &pool,
        &[
            sale(100.5, "a", 3, true),
            sale(20.25, "a", 3, true),
            sale(999.0, "b", 3, false),
            sale(50.0, "b", 4, true),
        ],
    )
    .await;

    let summary = ReportRepo::sales_summary(&pool, march()).await.unwrap();
    assert!((summary.total_sale_amount - 120.75).abs() < 1e-9);
    assert_eq!(summary.total_sold_items, 2);
    assert_eq!(summary.total_not_sold_items, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_with_nothing_sold_is_zero(pool: PgPool) {
    load(&pool, &[sale(10.0, "a", 3, false)]).await;

    let summary = ReportRepo::sales_summary(&pool, march()).await.unwrap();
    assert_eq!(summary.total_sale_amount, 0.0);
    assert_eq!(summary.total_sold_items, 0);
    assert_eq!(summary.total_not_sold_items, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_of_empty_month(pool: PgPool) {
    let summary = ReportRepo::sales_summary(&pool, march()).await.unwrap();
    assert_eq!(summary.total_sale_amount, 0.0);
    assert_eq!(summary.total_sold_items, 0);
    assert_eq!(summary.total_not_sold_items, 0);
}

// ---------------------------------------------------------------------------
// Price buckets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bucket_counts_respect_boundary_gap(pool: PgPool) {
    let prices = [0.0, 99.99, 100.0, 100.5, 101.0, 200.0, 450.0, 900.0, 901.0, 5000.0];
    let entries: Vec<CreateTransaction> = prices.iter().map(|p| sale(*p, "x", 3, false)).collect();
    load(&pool, &entries).await;

    let mut counts = Vec::new();
    for bucket in PRICE_BUCKETS {
        counts.push(
            ReportRepo::count_in_price_bucket(&pool, march(), bucket)
                .await
                .unwrap(),
        );
    }

    assert_eq!(counts, vec![2, 1, 0, 0, 1, 0, 0, 0, 0, 2]);

    // 100.0, 100.5, 200.0 and 900.0 sit in the gaps and are never counted.
    assert_eq!(counts.iter().sum::<i64>(), 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bucket_counts_ignore_other_months(pool: PgPool) {
    load(&pool, &[sale(50.0, "x", 3, true), sale(50.0, "x", 4, true)]).await;

    let count = ReportRepo::count_in_price_bucket(&pool, march(), PRICE_BUCKETS[0])
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Category counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_counts_sum_to_month_total(pool: PgPool) {
    load(
        &pool,
        &[
            sale(10.0, "electronics", 3, true),
            sale(20.0, "electronics", 3, false),
            sale(30.0, "jewelery", 3, false),
            sale(40.0, "men's clothing", 3, true),
            sale(50.0, "jewelery", 5, true),
        ],
    )
    .await;

    let counts = ReportRepo::category_counts(&pool, march()).await.unwrap();
    let pairs: Vec<(&str, i64)> = counts.iter().map(|c| (c.category.as_str(), c.count)).collect();
    assert_eq!(
        pairs,
        vec![("electronics", 2), ("jewelery", 1), ("men's clothing", 1)]
    );
    assert_eq!(counts.iter().map(|c| c.count).sum::<i64>(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_counts_empty_month(pool: PgPool) {
    let counts = ReportRepo::category_counts(&pool, march()).await.unwrap();
    assert!(counts.is_empty());
}
