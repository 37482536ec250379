//! # Profile, Organization, Permission, Onboarding
//!
//! Account level entities, mostly relevant to OAuth applications.

use crate::model::{Links, Mode};
use crate::models::order::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification status of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Unverified,
    Verified,
    Blocked,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// A website profile, identified by a `pfl_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub mode: Mode,
    pub name: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub business_category: Option<String>,
    #[serde(default)]
    pub category_code: Option<u32>,
    pub status: ProfileStatus,
    /// Pending review of changes, if any
    #[serde(default)]
    pub review: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Profile, "profile", "profiles", Some("pfl_"));

impl Profile {
    pub fn is_verified(&self) -> bool {
        self.status == ProfileStatus::Verified
    }

    pub fn is_blocked(&self) -> bool {
        self.status == ProfileStatus::Blocked
    }
}

/// An organization, identified by an `org_` id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub vat_regulation: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Organization, "organization", "organizations", Some("org_"));

/// An OAuth permission such as `payments.read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub description: String,
    pub granted: bool,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Permission, "permission", "permissions", None);

/// Onboarding progress of the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStatus {
    NeedsData,
    InReview,
    Completed,
    /// A status this client does not know yet
    #[serde(other)]
    Unknown,
}

/// Onboarding status; a singleton without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub name: String,
    pub signed_up_at: DateTime<Utc>,
    pub status: OnboardingStatus,
    pub can_receive_payments: bool,
    pub can_receive_settlements: bool,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

impl Onboarding {
    pub fn is_completed(&self) -> bool {
        self.status == OnboardingStatus::Completed
    }
}
