use std::fmt;

use super::volunteer::FormField;

/// Local validation failure; no request is issued when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Required volunteer fields left blank, in form order.
    MissingFields(Vec<FormField>),
    /// Donation input was empty.
    EmptyAmount,
    /// Donation input was not a finite decimal.
    InvalidAmount(String),
    /// Donation amount was zero or negative.
    NonPositiveAmount(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                write!(f, "missing required fields: {}", names.join(", "))
            }
            Self::EmptyAmount => write!(f, "enter a donation amount"),
            Self::InvalidAmount(raw) => write!(f, "'{raw}' is not a valid amount"),
            Self::NonPositiveAmount(raw) => write!(f, "amount must be greater than zero, got {raw}"),
        }
    }
}

impl std::error::Error for FormError {}
