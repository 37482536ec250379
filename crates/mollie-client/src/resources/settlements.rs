//! # Settlements, Invoices
//!
//! Payouts and the invoices for Mollie's fees. Besides `stl_` ids, the
//! settlements endpoint knows the aliases `next` (the upcoming payout)
//! and `open` (funds not yet scheduled).

use crate::network::NetworkClient;
use crate::params::GetParams;
use crate::resource::Resource;
use mollie_core::{
    validate_parent_id, Capture, Chargeback, Invoice, List, ListParams, Model, MollieResult,
    Payment, Refund, Settlement,
};
use tracing::instrument;

/// `settlements`
#[derive(Debug, Clone)]
pub struct SettlementsResource {
    inner: Resource<Settlement>,
}

impl SettlementsResource {
    const PATH: &'static str = "settlements";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Settlement> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// The settlement that will be paid out next
    #[instrument(skip(self))]
    pub async fn get_next(&self) -> MollieResult<Settlement> {
        self.inner.network().get("settlements/next", &()).await
    }

    /// Funds collected but not yet scheduled for payout
    #[instrument(skip(self))]
    pub async fn get_open(&self) -> MollieResult<Settlement> {
        self.inner.network().get("settlements/open", &()).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Settlement>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(
        &self,
        page: &List<Settlement>,
    ) -> MollieResult<Option<List<Settlement>>> {
        self.inner.next_page(Self::PATH, page).await
    }

    /// Payments included in a settlement
    #[instrument(skip(self))]
    pub async fn list_payments(
        &self,
        settlement_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Payment>> {
        self.nested(settlement_id, "payments", params).await
    }

    /// Refunds deducted from a settlement
    #[instrument(skip(self))]
    pub async fn list_refunds(
        &self,
        settlement_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Refund>> {
        self.nested(settlement_id, "refunds", params).await
    }

    /// Chargebacks deducted from a settlement
    #[instrument(skip(self))]
    pub async fn list_chargebacks(
        &self,
        settlement_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Chargeback>> {
        self.nested(settlement_id, "chargebacks", params).await
    }

    /// Captures included in a settlement
    #[instrument(skip(self))]
    pub async fn list_captures(
        &self,
        settlement_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Capture>> {
        self.nested(settlement_id, "captures", params).await
    }

    async fn nested<M: Model>(
        &self,
        settlement_id: &str,
        collection: &str,
        params: &ListParams,
    ) -> MollieResult<List<M>> {
        validate_parent_id::<Settlement>(settlement_id, "settlementId")?;
        let path = format!("{}/{}/{}", Self::PATH, settlement_id, collection);
        Resource::<M>::new(self.inner.network().clone())
            .list(&path, params)
            .await
    }
}

/// `invoices`
#[derive(Debug, Clone)]
pub struct InvoicesResource {
    inner: Resource<Invoice>,
}

impl InvoicesResource {
    const PATH: &'static str = "invoices";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Invoice> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// Filter with `reference` or `year` through [`ListParams::with_filter`]
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Invoice>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(&self, page: &List<Invoice>) -> MollieResult<Option<List<Invoice>>> {
        self.inner.next_page(Self::PATH, page).await
    }
}
