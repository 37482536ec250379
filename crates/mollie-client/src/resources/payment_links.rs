//! # Payment Links
//!
//! Shareable links that open a Mollie checkout for a fixed amount.

use crate::network::NetworkClient;
use crate::params::{require, GetParams};
use crate::resource::Resource;
use chrono::{DateTime, Utc};
use mollie_core::{Amount, List, ListParams, MollieResult, PaymentLink};
use serde::Serialize;
use tracing::instrument;

/// Parameters for creating a payment link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentLinkParams {
    pub amount: Amount,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreatePaymentLinkParams {
    pub fn new(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            redirect_url: None,
            webhook_url: None,
            expires_at: None,
            profile_id: None,
            testmode: None,
        }
    }

    /// Builder: where the customer lands after paying
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Builder: set the webhook URL
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Builder: the link stops working after `expires_at`
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn validate(&self) -> MollieResult<()> {
        self.amount.validate("amount")?;
        require("description", &self.description)
    }
}

/// `payment-links`
#[derive(Debug, Clone)]
pub struct PaymentLinksResource {
    inner: Resource<PaymentLink>,
}

impl PaymentLinksResource {
    const PATH: &'static str = "payment-links";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params), fields(amount = %params.amount))]
    pub async fn create(&self, params: &CreatePaymentLinkParams) -> MollieResult<PaymentLink> {
        params.validate()?;
        self.inner.create(Self::PATH, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<PaymentLink> {
        self.inner.get(Self::PATH, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<PaymentLink>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(
        &self,
        page: &List<PaymentLink>,
    ) -> MollieResult<Option<List<PaymentLink>>> {
        self.inner.next_page(Self::PATH, page).await
    }
}
