//! FinPal Types - canonical domain types for the personal finance tracker
//!
//! This crate contains the foundational types for FinPal with zero
//! dependencies on other finpal crates:
//!
//! - The closed expense [`Category`] enumeration with legacy alias resolution
//! - The static budget-allocation table used by the recommendation engine
//! - Domain records (users, expenses, income, recommendation snapshots)
//!
//! All money values use [`rust_decimal::Decimal`]; calendar values use
//! [`chrono::NaiveDate`] (dates and month keys) and [`chrono::DateTime<Utc>`]
//! (record timestamps).

pub mod budget;
pub mod category;
pub mod records;

pub use budget::*;
pub use category::*;
pub use records::*;

/// Maximum length of an expense description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Default source label for income records.
pub const DEFAULT_INCOME_SOURCE: &str = "Salary";
