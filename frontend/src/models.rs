use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PAYMENT_METHOD: &str = "Card";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "flexible_datetime")]
    pub date: NaiveDateTime,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /expenses/`. A missing category lets the backend pick one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Aggregates computed server-side. Either field may be missing, in which
/// case the dashboard falls back to local aggregation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub total_spent: Option<f64>,
    #[serde(default)]
    pub category_totals: Option<HashMap<String, f64>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetRecommendation {
    pub recommended_monthly_budget: f64,
    pub breakdown: BudgetBreakdown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetBreakdown {
    pub essentials: f64,
    pub savings: f64,
    pub discretionary: f64,
}

/// Everything fetched in one refresh cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub expenses: Vec<Expense>,
    pub insights: Insights,
    pub budget: Option<BudgetRecommendation>,
}

fn default_payment_method() -> String {
    DEFAULT_PAYMENT_METHOD.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// The backend emits `2024-01-03T00:00:00` (sometimes with fractions or an
// offset); hand-entered data may be a bare `2024-01-03`.
fn flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expense_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid expense date: {}", raw)))
}

pub fn parse_expense_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn deserializes_backend_expense() {
        let json = r#"{
            "id": 7,
            "description": "coffee shop",
            "amount": 4.5,
            "category": "dining",
            "date": "2024-01-03T00:00:00",
            "payment_method": "Card",
            "notes": ""
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.category, "dining");
        assert_eq!(
            expense.date.date(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
        assert_eq!(expense.notes.as_deref(), Some(""));
    }

    #[test]
    fn fills_defaults_for_sparse_expense() {
        let json = r#"{"id": 1, "description": "bus", "amount": 2.0, "category": null, "date": "2024-02-10"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, "");
        assert_eq!(expense.payment_method, "Card");
        assert_eq!(expense.notes, None);
    }

    #[test]
    fn rejects_garbage_date() {
        let json = r#"{"id": 1, "description": "bus", "amount": 2.0, "category": "x", "date": "yesterday"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn parses_date_variants() {
        let with_fraction = parse_expense_date("2024-03-01T12:30:15.123456").unwrap();
        assert_eq!(with_fraction.hour(), 12);
        let with_zone = parse_expense_date("2024-03-01T12:30:15Z").unwrap();
        assert_eq!(with_zone.minute(), 30);
        let spaced = parse_expense_date("2024-03-01 08:00:00").unwrap();
        assert_eq!(spaced.hour(), 8);
        assert!(parse_expense_date("").is_none());
    }

    #[test]
    fn new_expense_body_matches_backend_schema() {
        let body = NewExpense {
            description: "groceries".to_string(),
            amount: 12.5,
            date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            payment_method: "Card".to_string(),
            notes: String::new(),
            category: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "groceries",
                "amount": 12.5,
                "date": "2024-05-09",
                "payment_method": "Card",
                "notes": ""
            })
        );
    }

    #[test]
    fn new_expense_keeps_explicit_category() {
        let body = NewExpense {
            description: "gym".to_string(),
            amount: 30.0,
            date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            payment_method: "Cash".to_string(),
            notes: "monthly".to_string(),
            category: Some("fitness".to_string()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["category"], "fitness");
    }

    #[test]
    fn insights_tolerate_missing_fields() {
        let insights: Insights = serde_json::from_str("{}").unwrap();
        assert_eq!(insights, Insights::default());

        let insights: Insights =
            serde_json::from_str(r#"{"total_spent": 12.0, "category_totals": {"Food": 12.0}}"#)
                .unwrap();
        assert_eq!(insights.total_spent, Some(12.0));
        assert_eq!(
            insights.category_totals.unwrap().get("Food").copied(),
            Some(12.0)
        );
    }
}
