//! Repository layer
//!
//! One repository per aggregate, each owning its SQL.

pub mod expense;
pub mod income;
pub mod recommendation;
pub mod user;

pub use expense::ExpenseRepo;
pub use income::IncomeRepo;
pub use recommendation::RecommendationRepo;
pub use user::UserRepo;
