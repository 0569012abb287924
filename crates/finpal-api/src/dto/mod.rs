//! Request and response DTOs

pub mod common;
pub mod expense;
pub mod income;

pub use common::ApiData;
pub use expense::{CreateExpenseRequest, ExpenseListQuery, ExpenseResponse};
pub use income::{IncomeProfile, IncomeQuery, IncomeUpsertRequest};
