//! Client-side aggregation over a snapshot of expenses.
//!
//! The backend also aggregates (`/insights/`); those numbers are consumed
//! as-is and only replaced by the local ones here when missing. Growth has no
//! backend counterpart and is always computed locally.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Expense, Insights};

#[derive(Clone, Debug, PartialEq)]
pub struct InsightsSummary {
    pub total_spent: f64,
    pub category_totals: HashMap<String, f64>,
    pub growth_percent: i64,
}

/// One slice of the category doughnut.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySegment {
    pub category: String,
    pub total: f64,
    /// Share of the overall sum, 0..=100.
    pub share: f64,
    /// Sum of the shares of all preceding segments.
    pub offset: f64,
}

pub fn compute_total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Groups by the exact category string. `"Food"` and `"food"` stay separate.
pub fn compute_category_totals(expenses: &[Expense]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Percentage change between the newer and older halves of the history.
///
/// Expenses are ordered newest first (stable for equal dates) and split after
/// `ceil(n / 2)` records. This is a coarse, order-based trend and deliberately
/// not a calendar month comparison. Returns 0 when there is no older spend to
/// compare against.
pub fn compute_growth(expenses: &[Expense]) -> i64 {
    if expenses.is_empty() {
        return 0;
    }

    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let split = (sorted.len() + 1) / 2;
    let (recent, older) = sorted.split_at(split);
    let recent_total: f64 = recent.iter().map(|e| e.amount).sum();
    let older_total: f64 = older.iter().map(|e| e.amount).sum();

    if older_total == 0.0 {
        return 0;
    }
    round_half_up((recent_total - older_total) / older_total * 100.0)
}

/// What the dashboard shows: backend totals where present, local ones
/// otherwise, growth always local.
pub fn resolve_summary(insights: &Insights, expenses: &[Expense]) -> InsightsSummary {
    let total_spent = insights
        .total_spent
        .unwrap_or_else(|| compute_total_spent(expenses));
    let category_totals = insights
        .category_totals
        .clone()
        .unwrap_or_else(|| compute_category_totals(expenses));

    InsightsSummary {
        total_spent,
        category_totals,
        growth_percent: compute_growth(expenses),
    }
}

/// Largest categories first, ties broken by name so the chart is stable
/// between refreshes.
pub fn category_breakdown(category_totals: &HashMap<String, f64>) -> Vec<CategorySegment> {
    let mut entries: Vec<(&String, f64)> = category_totals.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let sum: f64 = entries.iter().map(|(_, v)| *v).sum();
    let mut offset = 0.0;
    entries
        .into_iter()
        .map(|(category, total)| {
            let share = if sum > 0.0 { total / sum * 100.0 } else { 0.0 };
            let segment = CategorySegment {
                category: category.clone(),
                total,
                share,
                offset,
            };
            offset += share;
            segment
        })
        .collect()
}

// Halves go toward positive infinity: 2.5 -> 3, -2.5 -> -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
