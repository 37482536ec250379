//! # Payment Link
//!
//! Shareable, reusable payment pages identified by a `pl_` id.

use crate::amount::Amount;
use crate::model::{Links, Mode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A payment link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub amount: Amount,
    pub description: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(PaymentLink, "payment-link", "payment_links", Some("pl_"));

impl PaymentLink {
    /// URL to share with the customer
    pub fn payment_url(&self) -> Option<&str> {
        self.links.href("paymentLink")
    }

    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }

    /// Whether the link has passed its expiry date
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp <= Utc::now()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_payment_link() {
        let link: PaymentLink = serde_json::from_value(json!({
            "resource": "payment-link",
            "id": "pl_4Y0eZitmBnQ6IDoMqZQKh",
            "mode": "test",
            "profileId": "pfl_QkEhN94Ba",
            "createdAt": "2021-03-20T09:13:37+00:00",
            "paidAt": null,
            "updatedAt": null,
            "expiresAt": "2099-06-06T11:00:00+00:00",
            "amount": { "value": "24.95", "currency": "EUR" },
            "description": "Bicycle tires",
            "redirectUrl": "https://webshop.example.org/thanks",
            "webhookUrl": "https://webshop.example.org/payment-links/webhook/",
            "_links": {
                "paymentLink": { "href": "https://useplink.com/payment/4Y0eZitmBnQ6IDoMqZQKh/", "type": "text/html" }
            }
        }))
        .unwrap();

        assert_eq!(
            link.payment_url(),
            Some("https://useplink.com/payment/4Y0eZitmBnQ6IDoMqZQKh/")
        );
        assert!(!link.is_paid());
        assert!(!link.is_expired());
    }
}
