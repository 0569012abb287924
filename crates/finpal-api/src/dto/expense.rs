//! Expense DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use finpal_types::{Category, Expense};

/// Create expense request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub user_id: Uuid,
    #[schema(value_type = f64)]
    pub amount: Decimal,
    /// Canonical category label; legacy labels are accepted as aliases
    #[schema(value_type = String)]
    pub category: Category,
    /// Defaults to today when omitted
    pub date: Option<NaiveDate>,
    #[validate(length(max = 200))]
    pub description: Option<String>,
}

/// Expense list filters
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Category label filter
    pub category: Option<String>,
}

/// Expense as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    #[schema(value_type = String)]
    pub category: Category,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            amount: decimal_to_f64(e.amount),
            category: e.category,
            date: e.date,
            description: e.description,
            created_at: e.created_at,
        }
    }
}

fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpal_types::MAX_DESCRIPTION_LEN;
    use rust_decimal_macros::dec;

    #[test]
    fn long_description_is_rejected() {
        let req = CreateExpenseRequest {
            user_id: Uuid::new_v4(),
            amount: dec!(10),
            category: Category::Other,
            date: None,
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn legacy_category_alias_deserializes() {
        let req: CreateExpenseRequest = serde_json::from_value(serde_json::json!({
            "userId": Uuid::new_v4(),
            "amount": 42.5,
            "category": "Food",
            "date": "2026-03-05"
        }))
        .unwrap();
        assert_eq!(req.category, Category::FoodAndDining);
    }

    #[test]
    fn response_serializes_plain_numbers() {
        let expense = Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount: dec!(19.99),
            category: Category::Entertainment,
            date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            description: None,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(ExpenseResponse::from(expense)).unwrap();
        assert_eq!(body["amount"], 19.99);
        assert_eq!(body["category"], "Entertainment");
        assert!(body.get("description").is_none());
    }
}
