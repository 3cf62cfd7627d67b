//! Row models and DTOs.
//!
//! JSON field names are camelCase on the wire (`dateOfSale`, `totalPages`).

pub mod report;
pub mod transaction;
