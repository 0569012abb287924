//! FinPal Core
//!
//! The business logic of the finance tracker, independent of any transport
//! or storage technology:
//!
//! - [`aggregate`]: pure aggregation functions (category totals, percentages)
//! - [`period`]: calendar-month interval arithmetic
//! - [`store`]: the [`FinanceStore`] trait the persistence layer implements
//! - [`summary`]: period summaries with month-over-month comparison
//! - [`recommend`]: budget-table recommendations with persisted snapshots
//!
//! Services hold an `Arc<dyn FinanceStore>` and never touch a transport
//! stream; callers pass an explicit user id into every operation.

pub mod aggregate;
pub mod error;
pub mod period;
pub mod recommend;
pub mod store;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::{category_totals, percentage, round_whole};
pub use error::{Error, Result};
pub use period::{floor_to_month, last_day_of_month, Period};
pub use recommend::{RecommendationReport, RecommendationService};
pub use store::{validate_income_amount, validate_new_expense, FinanceStore};
pub use summary::{Comparison, FinancialSummary, SummaryService};
