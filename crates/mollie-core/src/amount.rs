//! # Amount
//!
//! Monetary amounts as the API encodes them: an ISO 4217 currency code and a
//! decimal string value (`{"currency": "EUR", "value": "10.00"}`).

use crate::error::{MollieError, MollieResult};
use serde::{Deserialize, Serialize};

/// Amount with a decimal string value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code, upper case
    pub currency: String,
    /// Decimal value, e.g. `"10.00"`
    pub value: String,
}

impl Amount {
    /// Create an amount from a currency code and a decimal string
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }

    /// Create an amount from the smallest currency unit (cents, etc.)
    pub fn from_minor(currency: impl Into<String>, minor: i64) -> Self {
        let currency = currency.into().to_uppercase();
        let places = decimal_places(&currency);
        let value = if places == 0 {
            minor.to_string()
        } else {
            let divisor = 10_i64.pow(places);
            let sign = if minor < 0 { "-" } else { "" };
            format!(
                "{}{}.{:0width$}",
                sign,
                (minor / divisor).abs(),
                (minor % divisor).abs(),
                width = places as usize
            )
        };
        Self { currency, value }
    }

    /// Convert back to the smallest currency unit
    pub fn to_minor(&self) -> Option<i64> {
        let places = decimal_places(&self.currency);
        let (negative, digits) = match self.value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.value.as_str()),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if fraction.len() > places as usize {
            return None;
        }
        let whole: i64 = whole.parse().ok()?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", fraction, width = places as usize)
                .parse()
                .ok()?
        };
        let minor = whole.checked_mul(10_i64.pow(places))?.checked_add(fraction)?;
        Some(if negative { -minor } else { minor })
    }

    /// Reject amounts the API would refuse for their shape alone.
    ///
    /// `field` names the request parameter in the resulting error.
    pub fn validate(&self, field: &str) -> MollieResult<()> {
        let currency_ok =
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase());
        if !currency_ok {
            return Err(MollieError::invalid_field(
                field,
                format!("The {} currency must be a three-letter ISO 4217 code", field),
            ));
        }

        if !is_decimal(&self.value) {
            return Err(MollieError::invalid_field(
                field,
                format!("The {} value must be a decimal string such as \"10.00\"", field),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.value)
    }
}

fn is_decimal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction.map_or(true, |f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))
}

/// Number of decimal places used by a currency
/// (JPY and ISK have none, most others have 2)
fn decimal_places(currency: &str) -> u32 {
    match currency {
        "JPY" | "ISK" | "HUF" => 0,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        assert_eq!(Amount::from_minor("eur", 1050).value, "10.50");
        assert_eq!(Amount::from_minor("EUR", 5).value, "0.05");
        assert_eq!(Amount::from_minor("EUR", -250).value, "-2.50");
        assert_eq!(Amount::from_minor("JPY", 1200).value, "1200");
        assert_eq!(Amount::from_minor("eur", 100).currency, "EUR");
    }

    #[test]
    fn test_to_minor() {
        assert_eq!(Amount::new("EUR", "10.00").to_minor(), Some(1000));
        assert_eq!(Amount::new("EUR", "10.5").to_minor(), Some(1050));
        assert_eq!(Amount::new("EUR", "-0.99").to_minor(), Some(-99));
        assert_eq!(Amount::new("EUR", "1.999").to_minor(), None);
        assert_eq!(Amount::new("JPY", "500").to_minor(), Some(500));
    }

    #[test]
    fn test_validate() {
        assert!(Amount::new("EUR", "10.00").validate("amount").is_ok());

        let err = Amount::new("euro", "10.00").validate("amount").unwrap_err();
        assert_eq!(err.field(), Some("amount"));

        assert!(Amount::new("EUR", "10,00").validate("amount").is_err());
        assert!(Amount::new("EUR", "").validate("amount").is_err());
        assert!(Amount::new("EUR", "10.").validate("amount").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new("EUR", "10.00").to_string(), "EUR 10.00");
    }
}
