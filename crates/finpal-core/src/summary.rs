//! Summary service
//!
//! Produces a financial summary for a date range plus a month-over-month
//! comparison against the single calendar month preceding the range's start.

use crate::aggregate::{category_totals, percentage, round_whole};
use crate::period::{floor_to_month, last_day_of_month, Period};
use crate::{Error, FinanceStore, Result};
use chrono::NaiveDate;
use finpal_types::{Category, Income, User};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Month-over-month comparison block. All figures are whole-unit rounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub previous_total_expenses: f64,
    pub expense_change: f64,
    pub income_change: f64,
    pub savings_change: f64,
}

/// Financial summary for one period.
///
/// Monetary totals are whole-unit rounded for display; `savings_rate` keeps
/// 2-decimal precision. `remaining_balance` may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub monthly_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    pub savings_rate: f64,
    pub category_breakdown: BTreeMap<Category, f64>,
    pub expense_count: usize,
    pub period: Period,
    pub comparison: Comparison,
}

/// Orchestrates expense/income reads and the aggregation engine.
pub struct SummaryService {
    store: Arc<dyn FinanceStore>,
}

impl SummaryService {
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self { store }
    }

    /// Build the summary for `[start, end]`, defaulting to the calendar
    /// month containing `today` when no range is given.
    pub async fn summary(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<FinancialSummary> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(Error::UserNotFound(user_id))?;

        let period = resolve_period(start, end, today)?;
        let comparison_period = Period::month_before(period.start);

        debug!(
            %user_id,
            start = %period.start,
            end = %period.end,
            "building summary"
        );

        let expenses = self
            .store
            .find_expenses(user_id, Some(period), None)
            .await?;
        let incomes = self.store.find_income(user_id, period.month_keys()).await?;
        let current_income = effective_income(&incomes, &user);

        let previous_expenses = self
            .store
            .find_expenses(user_id, Some(comparison_period), None)
            .await?;
        let previous_incomes = self
            .store
            .find_income(user_id, comparison_period.month_keys())
            .await?;
        let previous_income = effective_income(&previous_incomes, &user);

        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
        let previous_total: Decimal = previous_expenses.iter().map(|e| e.amount).sum();
        let remaining = current_income - total_expenses;

        let breakdown = category_totals(&expenses)
            .into_iter()
            .map(|(category, total)| (category, money(total)))
            .collect();

        // Net = income - expenses for the respective period.
        let savings_change = (current_income - total_expenses) - (previous_income - previous_total);

        Ok(FinancialSummary {
            monthly_income: money(current_income),
            total_expenses: money(round_whole(total_expenses)),
            remaining_balance: money(round_whole(remaining)),
            savings_rate: money(percentage(remaining, current_income)),
            category_breakdown: breakdown,
            expense_count: expenses.len(),
            period,
            comparison: Comparison {
                previous_total_expenses: money(round_whole(previous_total)),
                expense_change: money(round_whole(total_expenses - previous_total)),
                income_change: money(round_whole(current_income - previous_income)),
                savings_change: money(round_whole(savings_change)),
            },
        })
    }
}

/// Resolve the primary period from optional range endpoints.
///
/// - neither given: calendar month of `today`
/// - start only: through the last day of the start's month
/// - end only: from the first day of the end's month
fn resolve_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Period> {
    let period = match (start, end) {
        (None, None) => Period::month_of(today),
        (Some(s), None) => Period::new(s, last_day_of_month(s)),
        (None, Some(e)) => Period::new(floor_to_month(e), e),
        (Some(s), Some(e)) => Period::new(s, e),
    };
    if period.start > period.end {
        return Err(Error::Validation(format!(
            "startDate {} is after endDate {}",
            period.start, period.end
        )));
    }
    Ok(period)
}

/// Sum of the period's income records, or the user's baseline if none exist.
fn effective_income(incomes: &[Income], user: &User) -> Decimal {
    if incomes.is_empty() {
        user.monthly_income
    } else {
        incomes.iter().map(|i| i.amount).sum()
    }
}

fn money(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}
