//! Request DTOs for the sweep endpoints
//!
//! Parameters arrive from the query string, a JSON body, or both. Every field
//! is optional at the serde level so the two sources can be overlaid before
//! validation decides what is actually required.

use std::borrow::Cow;

use chrono::NaiveDate;
use credit_core::{Amount, DomainError};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Date format accepted for the reward reference date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Amount as sent by the caller, a JSON number or any text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountParam {
    Number(f64),
    Text(String),
}

impl AmountParam {
    /// Numeric amount; text that does not start with a number counts as zero
    pub fn to_amount(&self) -> Amount {
        match self {
            Self::Number(n) => Amount::new(*n),
            Self::Text(s) => Amount::from_text(s),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

/// Flat credit grant to every balance holder
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FlatAddRequest {
    #[validate(
        required(message = "amount is required"),
        custom(function = "validate_amount")
    )]
    pub amount: Option<AmountParam>,
}

impl FlatAddRequest {
    pub fn new(amount: impl Into<AmountParam>) -> Self {
        Self {
            amount: Some(amount.into()),
        }
    }

    /// Fields present in `body` replace those from the query string
    #[must_use]
    pub fn overlay(self, body: Self) -> Self {
        Self {
            amount: body.amount.or(self.amount),
        }
    }

    /// Parsed amount
    ///
    /// # Errors
    /// `MissingParameter` when the amount is absent or blank
    pub fn amount(&self) -> Result<Amount, DomainError> {
        required_amount(self.amount.as_ref())
    }
}

/// Activity reward sweep
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RewardRequest {
    #[validate(
        required(message = "amount is required"),
        custom(function = "validate_amount")
    )]
    pub amount: Option<AmountParam>,

    /// Reference date (`YYYY-MM-DD`); yesterday when absent
    #[validate(custom(function = "validate_date"))]
    pub date: Option<String>,
}

impl RewardRequest {
    pub fn new(amount: impl Into<AmountParam>, date: Option<NaiveDate>) -> Self {
        Self {
            amount: Some(amount.into()),
            date: date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }

    /// Fields present in `body` replace those from the query string
    #[must_use]
    pub fn overlay(self, body: Self) -> Self {
        Self {
            amount: body.amount.or(self.amount),
            date: body.date.or(self.date),
        }
    }

    /// Parsed amount
    ///
    /// # Errors
    /// `MissingParameter` when the amount is absent or blank
    pub fn amount(&self) -> Result<Amount, DomainError> {
        required_amount(self.amount.as_ref())
    }

    /// Parsed reference date, `None` when the caller left it out
    ///
    /// # Errors
    /// `InvalidDate` when the text is not a `YYYY-MM-DD` calendar date
    pub fn reference_date(&self) -> Result<Option<NaiveDate>, DomainError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(|_| DomainError::InvalidDate(text.to_string())),
        }
    }
}

impl From<f64> for AmountParam {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn required_amount(amount: Option<&AmountParam>) -> Result<Amount, DomainError> {
    match amount {
        Some(param) if !param.is_blank() => Ok(param.to_amount()),
        _ => Err(DomainError::MissingParameter("amount")),
    }
}

fn validate_amount(amount: &AmountParam) -> Result<(), ValidationError> {
    if amount.is_blank() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("amount is required"));
        return Err(err);
    }
    Ok(())
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    let date = date.trim();
    if date.is_empty() || NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok() {
        return Ok(());
    }
    let mut err = ValidationError::new("date");
    err.message = Some(Cow::Borrowed("date must be formatted as YYYY-MM-DD"));
    Err(err)
}
