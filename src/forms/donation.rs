use super::error::FormError;

/// Accepted donation: the amount and the text the user typed (trimmed).
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    /// Parsed amount in rupees.
    pub amount: f64,
    /// Trimmed input as typed, echoed back in the confirmation.
    pub display: String,
}

/// What: Validate the donation input box.
///
/// Output:
/// - `Ok(Donation)` for a finite amount greater than zero.
///
/// # Errors
/// - `EmptyAmount` for blank input, `InvalidAmount` for unparsable or non-finite text,
///   `NonPositiveAmount` for `<= 0`.
pub fn parse_donation(input: &str) -> Result<Donation, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FormError::EmptyAmount);
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| FormError::InvalidAmount(trimmed.to_string()))?;
    if !amount.is_finite() {
        return Err(FormError::InvalidAmount(trimmed.to_string()));
    }
    if amount <= 0.0 {
        return Err(FormError::NonPositiveAmount(trimmed.to_string()));
    }
    Ok(Donation {
        amount,
        display: trimmed.to_string(),
    })
}
