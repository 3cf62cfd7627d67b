//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod report_repo;
pub mod transaction_repo;

pub use report_repo::ReportRepo;
pub use transaction_repo::TransactionRepo;
