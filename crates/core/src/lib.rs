//! Domain logic for the salesboard reporting API.
//!
//! This crate has no I/O: it holds the rules the database and HTTP layers
//! share (month ranges, listing filters, price buckets) so they can be unit
//! tested in isolation.

pub mod error;
pub mod listing;
pub mod price_bucket;
pub mod report_month;
pub mod types;
