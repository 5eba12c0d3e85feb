use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

pub const CURRENCY_CODE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_positive_amount(amount: &BigDecimal) -> ValidationResult {
    if amount <= &BigDecimal::from(0) {
        return Err(ValidationError::new("amount", "must be greater than zero"));
    }

    Ok(())
}

pub fn validate_currency_code(currency: &str) -> ValidationResult {
    validate_required("currency", currency)?;

    if currency.len() != CURRENCY_CODE_LEN
        || !currency.chars().all(|ch| ch.is_ascii_uppercase())
    {
        return Err(ValidationError::new(
            "currency",
            format!("must be a {}-letter uppercase ISO code", CURRENCY_CODE_LEN),
        ));
    }

    Ok(())
}

pub fn validate_not_future(field: &'static str, value: DateTime<Utc>) -> ValidationResult {
    if value > Utc::now() {
        return Err(ValidationError::new(field, "must not be in the future"));
    }

    Ok(())
}

pub fn validate_distinct_cards(card_id: &str, to_card_id: Option<&str>) -> ValidationResult {
    if to_card_id == Some(card_id) {
        return Err(ValidationError::new(
            "toCardId",
            "sender and receiver cannot be the same",
        ));
    }

    Ok(())
}
