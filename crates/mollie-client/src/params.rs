//! # Shared Request Parameters
//!
//! Query and body parameters used by more than one resource. Entity
//! specific parameters live next to their resource in [`crate::resources`].

use mollie_core::{MollieError, MollieResult};
use serde::Serialize;

/// Query parameters accepted by single-entity `get` operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetParams {
    /// Extra data to include, e.g. `details.qrCode`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Related entities to embed, e.g. `refunds`, `chargebacks`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embed: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl GetParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: include extra data
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include.push(include.into());
        self
    }

    /// Builder: embed a related collection
    pub fn with_embed(mut self, embed: impl Into<String>) -> Self {
        self.embed.push(embed.into());
        self
    }

    /// Builder: set the locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builder: address test mode (OAuth only)
    pub fn with_testmode(mut self, testmode: bool) -> Self {
        self.testmode = Some(testmode);
        self
    }
}

/// Body of `DELETE` requests and other calls that only carry `testmode`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TestmodeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl TestmodeParams {
    pub fn testmode(testmode: bool) -> Self {
        Self {
            testmode: Some(testmode),
        }
    }
}

/// Check a subscription interval such as `"14 days"`, `"1 week"` or
/// `"3 months"`.
pub fn validate_interval(interval: &str) -> MollieResult<()> {
    let valid = match interval.trim().split_once(' ') {
        Some((count, unit)) => {
            !count.is_empty()
                && count.chars().all(|c| c.is_ascii_digit())
                && count.parse::<u32>().map_or(false, |n| n > 0)
                && matches!(unit, "day" | "days" | "week" | "weeks" | "month" | "months")
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(MollieError::invalid_field(
            "interval",
            format!(
                "The interval {:?} is invalid, expected e.g. \"1 month\" or \"14 days\"",
                interval
            ),
        ))
    }
}

/// Reject blank required strings
pub(crate) fn require(field: &str, value: &str) -> MollieResult<()> {
    if value.trim().is_empty() {
        return Err(MollieError::invalid_field(
            field,
            format!("The {} is required", field),
        ));
    }
    Ok(())
}
