//! # Payment
//!
//! A single payment attempt, identified by a `tr_` id.

use crate::amount::Amount;
use crate::model::{Links, Mode};
use crate::models::refund::{Capture, Chargeback, Refund};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Created, awaiting the customer
    Open,
    /// Customer canceled
    Canceled,
    /// Awaiting confirmation from the payment method
    Pending,
    /// Authorized, awaiting capture
    Authorized,
    /// Customer did not complete in time
    Expired,
    /// Payment method refused
    Failed,
    /// Paid
    Paid,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Position of a payment in a recurring sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceType {
    Oneoff,
    First,
    Recurring,
}

impl Default for SequenceType {
    fn default() -> Self {
        SequenceType::Oneoff
    }
}

/// Application fee charged on a payment created through OAuth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFee {
    pub amount: Amount,
    pub description: String,
}

/// Sub-resources embedded with `embed=refunds,chargebacks,captures`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargebacks: Option<Vec<Chargeback>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captures: Option<Vec<Capture>>,
}

/// A payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
    #[serde(default)]
    pub authorized_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed_at: Option<DateTime<Utc>>,
    pub amount: Amount,
    #[serde(default)]
    pub amount_refunded: Option<Amount>,
    #[serde(default)]
    pub amount_remaining: Option<Amount>,
    #[serde(default)]
    pub amount_captured: Option<Amount>,
    #[serde(default)]
    pub amount_charged_back: Option<Amount>,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub description: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub cancel_url: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub restrict_payment_methods_to_country: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub settlement_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub sequence_type: SequenceType,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub application_fee: Option<ApplicationFee>,
    /// Method specific details (card holder, consumer account, QR code, ...)
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<PaymentEmbedded>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Payment, "payment", "payments", Some("tr_"));

impl Payment {
    pub fn is_open(&self) -> bool {
        self.status == PaymentStatus::Open
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_authorized(&self) -> bool {
        self.status == PaymentStatus::Authorized
    }

    /// Paid at some point, even when refunded or charged back afterwards
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }

    pub fn is_canceled(&self) -> bool {
        self.status == PaymentStatus::Canceled
    }

    pub fn is_expired(&self) -> bool {
        self.status == PaymentStatus::Expired
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }

    /// Hosted checkout URL the customer should be redirected to
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.href("checkout")
    }

    /// True when some of the amount can still be refunded
    pub fn has_refundable_amount(&self) -> bool {
        self.amount_remaining
            .as_ref()
            .and_then(Amount::to_minor)
            .map(|minor| minor > 0)
            .unwrap_or(false)
    }

    /// Embedded refunds, empty unless requested with `embed=refunds`
    pub fn refunds(&self) -> &[Refund] {
        self.embedded
            .as_ref()
            .and_then(|e| e.refunds.as_deref())
            .unwrap_or(&[])
    }

    /// Embedded chargebacks, empty unless requested with `embed=chargebacks`
    pub fn chargebacks(&self) -> &[Chargeback] {
        self.embedded
            .as_ref()
            .and_then(|e| e.chargebacks.as_deref())
            .unwrap_or(&[])
    }

    /// Embedded captures, empty unless requested with `embed=captures`
    pub fn captures(&self) -> &[Capture] {
        self.embedded
            .as_ref()
            .and_then(|e| e.captures.as_deref())
            .unwrap_or(&[])
    }

    pub fn has_refunds(&self) -> bool {
        self.links.get("refunds").is_some()
    }

    pub fn has_chargebacks(&self) -> bool {
        self.links.get("chargebacks").is_some()
    }

    pub fn has_sequence_type_first(&self) -> bool {
        self.sequence_type == SequenceType::First
    }

    pub fn has_sequence_type_recurring(&self) -> bool {
        self.sequence_type == SequenceType::Recurring
    }
}
