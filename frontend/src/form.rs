//! Expense form state and validation. Nothing here touches the network: a
//! form only becomes a [`NewExpense`] once every field checks out.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::NewExpense;

/// Known categories with examples, shown in the form's help panel.
pub const CATEGORY_EXAMPLES: &[(&str, &str)] = &[
    ("groceries", "e.g., supermarket, fruits, vegetables, meat, dairy"),
    ("dining", "e.g., restaurants, cafes, takeout, delivery"),
    ("transportation", "e.g., gas, bus tickets, taxi, car maintenance"),
    ("shopping", "e.g., clothing, retail stores, online shopping"),
    ("entertainment", "e.g., movies, concerts, streaming services"),
    ("utilities", "e.g., electricity, water, gas, internet bills"),
    ("healthcare", "e.g., doctor visits, medicine, dental care"),
    ("education", "e.g., tuition, textbooks, courses"),
    ("rent", "e.g., rent payment, housing maintenance"),
    ("fitness", "e.g., gym membership, sports equipment"),
    ("electronics", "e.g., gadgets, computer accessories"),
    ("travel", "e.g., flights, hotels, vacation packages"),
    ("insurance", "e.g., car, health, home insurance"),
    ("subscriptions", "e.g., digital services, memberships"),
    ("gifts", "e.g., presents, donations, gift cards"),
];

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add expense";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Date is required")]
    MissingDate,
    #[error("Please enter a valid date")]
    InvalidDate,
}

impl FieldError {
    fn is_missing(self) -> bool {
        matches!(
            self,
            FieldError::MissingDescription | FieldError::MissingAmount | FieldError::MissingDate
        )
    }
}

/// Per-field problems, rendered inline under each input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub description: Option<FieldError>,
    pub amount: Option<FieldError>,
    pub date: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.date.is_none()
    }

    fn fields(&self) -> impl Iterator<Item = FieldError> + '_ {
        [self.description, self.amount, self.date].into_iter().flatten()
    }

    /// The single line shown below the form.
    pub fn summary(&self) -> Option<String> {
        if self.fields().any(FieldError::is_missing) {
            return Some(MISSING_FIELDS_MESSAGE.to_string());
        }
        self.fields().next().map(|e| e.to_string())
    }
}

/// Raw input values as typed by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseFormInput {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub category: String,
    pub payment_method: String,
    pub notes: String,
}

impl ExpenseFormInput {
    pub fn new(today: NaiveDate, payment_method: &str) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            category: String::new(),
            payment_method: payment_method.to_string(),
            notes: String::new(),
        }
    }

    pub fn validate(&self, default_payment_method: &str) -> Result<NewExpense, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(FieldError::MissingDescription);
        }

        let amount = match parse_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(e) => {
                errors.amount = Some(e);
                None
            }
        };

        let date = match parse_date(&self.date) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.date = Some(e);
                None
            }
        };

        let (Some(amount), Some(date)) = (amount, date) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let category = self.category.trim();
        let payment_method = match self.payment_method.trim() {
            "" => default_payment_method,
            method => method,
        };

        Ok(NewExpense {
            description: description.to_string(),
            amount,
            date,
            payment_method: payment_method.to_string(),
            notes: self.notes.trim().to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
        })
    }
}

fn parse_amount(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::MissingAmount);
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FieldError::InvalidAmount),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::MissingDate);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError::InvalidDate)
}
