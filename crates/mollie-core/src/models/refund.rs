//! # Refund, Capture, Chargeback
//!
//! Money movements attached to a payment.

use crate::amount::Amount;
use crate::model::{Links, Mode};
use crate::models::payment::Payment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a refund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundStatus {
    /// Waiting for a positive balance
    Queued,
    /// Will be processed with the next settlement
    Pending,
    Processing,
    Refunded,
    Failed,
    Canceled,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// The parent payment, embedded with `embed=payment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedPayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Box<Payment>>,
}

/// A refund of (part of) a payment, identified by a `re_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub status: RefundStatus,
    pub created_at: DateTime<Utc>,
    pub payment_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub settlement_id: Option<String>,
    /// Order lines refunded, for order refunds
    #[serde(default)]
    pub lines: Option<Vec<serde_json::Value>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedPayment>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Refund, "refund", "refunds", Some("re_"));

impl Refund {
    /// The refunded payment, when requested with `embed=payment`
    pub fn payment(&self) -> Option<&Payment> {
        self.embedded.as_ref().and_then(|e| e.payment.as_deref())
    }

    /// Refunds can be canceled until they are sent to the bank
    pub fn is_cancelable(&self) -> bool {
        matches!(self.status, RefundStatus::Queued | RefundStatus::Pending)
    }

    pub fn is_refunded(&self) -> bool {
        self.status == RefundStatus::Refunded
    }

    pub fn is_failed(&self) -> bool {
        self.status == RefundStatus::Failed
    }
}

/// A capture of an authorized payment, identified by a `cpt_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub payment_id: String,
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub settlement_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedPayment>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Capture, "capture", "captures", Some("cpt_"));

/// Reason given by the bank for a chargeback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackReason {
    pub code: String,
    pub description: String,
}

/// A chargeback of a payment, identified by a `chb_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub amount: Amount,
    #[serde(default)]
    pub settlement_amount: Option<Amount>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<ChargebackReason>,
    #[serde(default)]
    pub reversed_at: Option<DateTime<Utc>>,
    pub payment_id: String,
    #[serde(default)]
    pub settlement_id: Option<String>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedPayment>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Chargeback, "chargeback", "chargebacks", Some("chb_"));

impl Chargeback {
    pub fn is_reversed(&self) -> bool {
        self.reversed_at.is_some()
    }
}
