//! # Customer, Mandate, Subscription
//!
//! Customers hold mandates, which authorize recurring payments, and
//! subscriptions, which schedule them.

use crate::amount::Amount;
use crate::model::{Links, Mode};
use crate::models::payment::ApplicationFee;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A customer, identified by a `cst_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Customer, "customer", "customers", Some("cst_"));

/// Status of a mandate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MandateStatus {
    Valid,
    Invalid,
    Pending,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// A mandate, identified by a `mdt_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mandate {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub status: MandateStatus,
    pub method: String,
    /// Consumer account or card details, depending on the method
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub mandate_reference: Option<String>,
    #[serde(default)]
    pub signature_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Mandate, "mandate", "mandates", Some("mdt_"));

impl Mandate {
    pub fn is_valid(&self) -> bool {
        self.status == MandateStatus::Valid
    }
}

/// Status of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Pending,
    Active,
    Canceled,
    Suspended,
    Completed,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// A subscription, identified by a `sub_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub created_at: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub amount: Amount,
    /// Total number of charges, `None` for an ongoing subscription
    #[serde(default)]
    pub times: Option<u32>,
    #[serde(default)]
    pub times_remaining: Option<u32>,
    /// Interval between charges, e.g. `"3 months"`
    pub interval: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub next_payment_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub mandate_id: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub application_fee: Option<ApplicationFee>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Subscription, "subscription", "subscriptions", Some("sub_"));

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    pub fn is_canceled(&self) -> bool {
        self.status == SubscriptionStatus::Canceled
    }

    pub fn is_completed(&self) -> bool {
        self.status == SubscriptionStatus::Completed
    }
}
