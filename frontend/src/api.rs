use gloo_net::http::{Request, Response};
use log::{debug, info, warn};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::models::{BudgetRecommendation, DashboardSnapshot, Expense, Insights, NewExpense};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn fetch_expenses(&self) -> Result<Vec<Expense>> {
        let url = self.config.endpoint("/expenses/");
        let resp = Request::get(&url).send().await?;
        ensure_ok("Expenses", &resp)?;
        let body = resp.json::<Value>().await?;
        parse_expense_list(body)
    }

    pub async fn fetch_insights(&self) -> Result<Insights> {
        let url = self.config.endpoint("/insights/");
        let resp = Request::get(&url).send().await?;
        ensure_ok("Insights", &resp)?;
        let body = resp.json::<Value>().await?;
        parse_insights(body)
    }

    pub async fn fetch_budget_recommendation(&self) -> Result<BudgetRecommendation> {
        let url = self.config.endpoint("/budget-recommendations/");
        let resp = Request::get(&url).send().await?;
        ensure_ok("Budget", &resp)?;
        Ok(resp.json::<BudgetRecommendation>().await?)
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> Result<()> {
        let url = self.config.endpoint("/expenses/");
        debug!("submitting expense: {:?}", expense);
        let resp = Request::post(&url).json(expense)?.send().await?;
        ensure_ok("Expenses", &resp)?;
        info!("expense saved: {}", expense.description);
        Ok(())
    }

    /// One refresh cycle. Insights are only requested once expenses loaded;
    /// the budget recommendation is best effort and never fails the cycle.
    pub async fn load_dashboard(&self) -> Result<DashboardSnapshot> {
        let expenses = self.fetch_expenses().await?;
        let insights = self.fetch_insights().await?;
        let budget = match self.fetch_budget_recommendation().await {
            Ok(budget) => Some(budget),
            Err(e) => {
                warn!("budget recommendation unavailable: {}", e);
                None
            }
        };
        debug!("loaded {} expenses", expenses.len());
        Ok(DashboardSnapshot {
            expenses,
            insights,
            budget,
        })
    }
}

fn ensure_ok(endpoint: &'static str, resp: &Response) -> Result<()> {
    check_status(endpoint, resp.ok(), resp.status(), resp.status_text())
}

fn check_status(endpoint: &'static str, ok: bool, status: u16, status_text: String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status {
            endpoint,
            status,
            status_text,
        })
    }
}

pub fn parse_expense_list(body: Value) -> Result<Vec<Expense>> {
    if !body.is_array() {
        return Err(ApiError::InvalidPayload("expense"));
    }
    Ok(serde_json::from_value(body)?)
}

pub fn parse_insights(body: Value) -> Result<Insights> {
    if !body.is_object() {
        return Err(ApiError::InvalidPayload("insights"));
    }
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expense_list_from_array() {
        let body = json!([
            {"id": 1, "description": "bus", "amount": 2.5, "category": "transportation",
             "date": "2024-01-02T00:00:00", "payment_method": "Card", "notes": ""},
            {"id": 2, "description": "rent", "amount": 900.0, "category": "rent",
             "date": "2024-01-01T00:00:00", "payment_method": "Card", "notes": null}
        ]);
        let expenses = parse_expense_list(body).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[1].category, "rent");
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(parse_expense_list(json!([])).unwrap().is_empty());
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let err = parse_expense_list(json!({"detail": "oops"})).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload("expense")));
        assert_eq!(err.to_string(), "Invalid expense data format");
    }

    #[test]
    fn malformed_entry_is_decode_error() {
        let err = parse_expense_list(json!([{"id": "x"}])).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn insights_payload() {
        let insights =
            parse_insights(json!({"total_spent": 10.0, "category_totals": {"A": 10.0}})).unwrap();
        assert_eq!(insights.total_spent, Some(10.0));
        assert!(parse_insights(json!([1, 2])).is_err());
    }

    #[test]
    fn status_check() {
        assert!(check_status("Expenses", true, 200, "OK".to_string()).is_ok());
        let err = check_status("Insights", false, 503, "Service Unavailable".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Insights API error: 503 Service Unavailable");
    }
}
