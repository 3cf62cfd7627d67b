//! Repository for the `transactions` table.

use salesboard_core::listing::PageRequest;
use salesboard_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction, TransactionFilter};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Column list for `transactions` SELECT queries.
const COLUMNS: &str = "\
    id, title, description, price, category, image, \
    date_of_sale, sold, created_at";

/// Column list for INSERT (excludes auto-generated `id` and timestamps).
const INSERT_COLUMNS: &str = "title, description, price, category, image, date_of_sale, sold";

/// Number of bound parameters per inserted row.
const PARAMS_PER_ROW: usize = 7;

/// Rows per INSERT statement. Keeps each statement well under PostgreSQL's
/// 65535 bind-parameter limit.
const INSERT_BATCH_SIZE: usize = 500;

// ---------------------------------------------------------------------------
// TransactionRepo
// ---------------------------------------------------------------------------

/// Provides listing and bulk-load operations for transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Delete every transaction. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM transactions")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Insert transactions using multi-row INSERT statements.
    ///
    /// Returns the number of rows inserted.
    pub async fn batch_insert(
        pool: &PgPool,
        entries: &[CreateTransaction],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for chunk in entries.chunks(INSERT_BATCH_SIZE) {
            let query = build_insert(chunk.len());

            let mut q = sqlx::query(&query);
            for entry in chunk {
                q = q
                    .bind(&entry.title)
                    .bind(&entry.description)
                    .bind(entry.price)
                    .bind(&entry.category)
                    .bind(&entry.image)
                    .bind(entry.date_of_sale)
                    .bind(entry.sold);
            }

            inserted += q.execute(pool).await?.rows_affected();
        }

        Ok(inserted)
    }

    /// Replace the whole table with `entries`.
    ///
    /// The delete and the inserts are separate statements with no enclosing
    /// transaction: if an insert fails the table is left partially loaded
    /// (or empty), and concurrent readers may observe the intermediate state.
    pub async fn replace_all(
        pool: &PgPool,
        entries: &[CreateTransaction],
    ) -> Result<u64, sqlx::Error> {
        let deleted = Self::delete_all(pool).await?;
        tracing::debug!(deleted, "Cleared transactions table");

        let inserted = Self::batch_insert(pool, entries).await?;
        tracing::debug!(inserted, "Inserted seed transactions");

        Ok(inserted)
    }

    /// List one page of transactions matching `filter`, ordered by id.
    pub async fn list(
        pool: &PgPool,
        filter: &TransactionFilter,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_transaction_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM transactions {where_clause} \
             ORDER BY id ASC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_transaction_values(sqlx::query_as::<_, Transaction>(&query), &bind_values);
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count transactions matching `filter`, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &TransactionFilter) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_transaction_filter(filter);

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM transactions {where_clause}");

        let q = bind_transaction_values_scalar(sqlx::query_scalar::<_, i64>(&query), &bind_values);
        q.fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built transaction queries.
enum BindValue {
    Text(String),
    Float(f64),
    Timestamp(Timestamp),
}

/// Build `INSERT ... VALUES ($1, ..., $7), ($8, ...)` for `rows` rows.
fn build_insert(rows: usize) -> String {
    let mut query = format!("INSERT INTO transactions ({INSERT_COLUMNS}) VALUES ");
    let mut param_idx = 1usize;

    for row in 0..rows {
        if row > 0 {
            query.push_str(", ");
        }
        query.push('(');
        for i in 0..PARAMS_PER_ROW {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str(&format!("${param_idx}"));
            param_idx += 1;
        }
        query.push(')');
    }

    query
}

/// Build a WHERE clause and bind values from a [`TransactionFilter`].
///
/// Returns `(where_clause, bind_values, next_bind_index)`.
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_transaction_filter(filter: &TransactionFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(range) = filter.date_range {
        conditions.push(format!(
            "date_of_sale >= ${bind_idx} AND date_of_sale < ${}",
            bind_idx + 1
        ));
        bind_idx += 2;
        bind_values.push(BindValue::Timestamp(range.start));
        bind_values.push(BindValue::Timestamp(range.end));
    }

    if let Some(ref search) = filter.search {
        // The same pattern parameter is referenced for both text columns.
        let mut clause = format!("(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx}");
        bind_idx += 1;
        bind_values.push(BindValue::Text(search.like_pattern()));

        if let Some(price) = search.price {
            clause.push_str(&format!(" OR price = ${bind_idx}"));
            bind_idx += 1;
            bind_values.push(BindValue::Float(price));
        }

        clause.push(')');
        conditions.push(clause);
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_transaction_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Float(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_transaction_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Float(v) => q = q.bind(*v),
            BindValue::Timestamp(v) => q = q.bind(*v),
        }
    }
    q
}
