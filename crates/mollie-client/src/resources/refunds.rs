//! # Refunds, Captures, Chargebacks
//!
//! Money flowing back from a payment. Everything except the top-level
//! listings lives below `payments/{tr_id}`.

use crate::network::NetworkClient;
use crate::params::{GetParams, TestmodeParams};
use crate::resource::Resource;
use mollie_core::{
    validate_parent_id, Amount, Capture, Chargeback, List, ListParams, MollieResult, Payment,
    Refund,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Parameters for refunding (part of) a payment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundParams {
    pub amount: Amount,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreateRefundParams {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            description: None,
            metadata: None,
            testmode: None,
        }
    }

    /// Builder: set the description shown on the bank statement
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn validate(&self) -> MollieResult<()> {
        self.amount.validate("amount")
    }
}

fn payment_path(payment_id: &str, collection: &str) -> MollieResult<String> {
    validate_parent_id::<Payment>(payment_id, "paymentId")?;
    Ok(format!("payments/{}/{}", payment_id, collection))
}

/// `payments/{tr_id}/refunds`
#[derive(Debug, Clone)]
pub struct PaymentRefundsResource {
    inner: Resource<Refund>,
}

impl PaymentRefundsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Refund a payment
    #[instrument(skip(self, params), fields(amount = %params.amount))]
    pub async fn create(
        &self,
        payment_id: &str,
        params: &CreateRefundParams,
    ) -> MollieResult<Refund> {
        params.validate()?;
        let path = payment_path(payment_id, "refunds")?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        payment_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Refund> {
        let path = payment_path(payment_id, "refunds")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, payment_id: &str, params: &ListParams) -> MollieResult<List<Refund>> {
        let path = payment_path(payment_id, "refunds")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        payment_id: &str,
        page: &List<Refund>,
    ) -> MollieResult<Option<List<Refund>>> {
        let path = payment_path(payment_id, "refunds")?;
        self.inner.next_page(&path, page).await
    }

    /// Cancel a refund that is still `queued` or `pending`
    #[instrument(skip(self, params))]
    pub async fn cancel(
        &self,
        payment_id: &str,
        id: &str,
        params: &TestmodeParams,
    ) -> MollieResult<()> {
        let path = payment_path(payment_id, "refunds")?;
        self.inner.delete(&path, id, params).await
    }
}

/// `payments/{tr_id}/captures`
#[derive(Debug, Clone)]
pub struct PaymentCapturesResource {
    inner: Resource<Capture>,
}

impl PaymentCapturesResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        payment_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Capture> {
        let path = payment_path(payment_id, "captures")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, payment_id: &str, params: &ListParams) -> MollieResult<List<Capture>> {
        let path = payment_path(payment_id, "captures")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        payment_id: &str,
        page: &List<Capture>,
    ) -> MollieResult<Option<List<Capture>>> {
        let path = payment_path(payment_id, "captures")?;
        self.inner.next_page(&path, page).await
    }
}

/// `payments/{tr_id}/chargebacks`
#[derive(Debug, Clone)]
pub struct PaymentChargebacksResource {
    inner: Resource<Chargeback>,
}

impl PaymentChargebacksResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        payment_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Chargeback> {
        let path = payment_path(payment_id, "chargebacks")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        payment_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Chargeback>> {
        let path = payment_path(payment_id, "chargebacks")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        payment_id: &str,
        page: &List<Chargeback>,
    ) -> MollieResult<Option<List<Chargeback>>> {
        let path = payment_path(payment_id, "chargebacks")?;
        self.inner.next_page(&path, page).await
    }
}

/// `refunds`: every refund of the account
#[derive(Debug, Clone)]
pub struct RefundsResource {
    inner: Resource<Refund>,
}

impl RefundsResource {
    const PATH: &'static str = "refunds";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Refund>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(&self, page: &List<Refund>) -> MollieResult<Option<List<Refund>>> {
        self.inner.next_page(Self::PATH, page).await
    }
}

/// `chargebacks`: every chargeback of the account
#[derive(Debug, Clone)]
pub struct ChargebacksResource {
    inner: Resource<Chargeback>,
}

impl ChargebacksResource {
    const PATH: &'static str = "chargebacks";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Chargeback>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(
        &self,
        page: &List<Chargeback>,
    ) -> MollieResult<Option<List<Chargeback>>> {
        self.inner.next_page(Self::PATH, page).await
    }
}
