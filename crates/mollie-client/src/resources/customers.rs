//! # Customers
//!
//! Customers and everything hanging off them: their payments, mandates
//! and subscriptions.

use crate::network::NetworkClient;
use crate::params::{require, validate_interval, GetParams, TestmodeParams};
use crate::resource::Resource;
use crate::resources::payments::CreatePaymentParams;
use chrono::NaiveDate;
use mollie_core::{
    validate_parent_id, Amount, ApplicationFee, Customer, List, ListParams, Mandate, MollieError,
    MollieResult, Payment, Subscription,
};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

/// Parameters for creating or updating a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CustomerParams {
    /// Builder: set the full name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder: set the preferred locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Parameters for creating a mandate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMandateParams {
    /// `directdebit` or `paypal`
    pub method: String,
    pub consumer_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_bic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_billing_agreement_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreateMandateParams {
    /// A SEPA Direct Debit mandate on `consumer_account` (an IBAN)
    pub fn direct_debit(
        consumer_name: impl Into<String>,
        consumer_account: impl Into<String>,
    ) -> Self {
        Self {
            method: "directdebit".to_string(),
            consumer_name: consumer_name.into(),
            consumer_account: Some(consumer_account.into()),
            consumer_bic: None,
            consumer_email: None,
            signature_date: None,
            mandate_reference: None,
            paypal_billing_agreement_id: None,
            testmode: None,
        }
    }

    /// Builder: set the BIC of the consumer's bank
    pub fn with_consumer_bic(mut self, bic: impl Into<String>) -> Self {
        self.consumer_bic = Some(bic.into());
        self
    }

    /// Builder: set the date the mandate was signed
    pub fn with_signature_date(mut self, date: NaiveDate) -> Self {
        self.signature_date = Some(date);
        self
    }

    /// Builder: set the merchant's own mandate reference
    pub fn with_mandate_reference(mut self, reference: impl Into<String>) -> Self {
        self.mandate_reference = Some(reference.into());
        self
    }

    pub fn validate(&self) -> MollieResult<()> {
        require("method", &self.method)?;
        require("consumerName", &self.consumer_name)?;
        if self.method == "directdebit"
            && self.consumer_account.as_deref().map_or(true, str::is_empty)
        {
            return Err(MollieError::invalid_field(
                "consumerAccount",
                "The consumerAccount is required for directdebit mandates",
            ));
        }
        Ok(())
    }
}

/// Parameters for creating a subscription
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionParams {
    pub amount: Amount,

    /// Total number of charges; unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,

    /// `"N days"`, `"N weeks"` or `"N months"`
    pub interval: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<ApplicationFee>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl CreateSubscriptionParams {
    pub fn new(
        amount: Amount,
        interval: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            times: None,
            interval: interval.into(),
            start_date: None,
            description: description.into(),
            method: None,
            mandate_id: None,
            webhook_url: None,
            metadata: None,
            application_fee: None,
            testmode: None,
        }
    }

    /// Builder: stop after `times` charges
    pub fn with_times(mut self, times: u32) -> Self {
        self.times = Some(times);
        self
    }

    /// Builder: first charge date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Builder: set the webhook URL
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Builder: charge a specific mandate
    pub fn with_mandate_id(mut self, mandate_id: impl Into<String>) -> Self {
        self.mandate_id = Some(mandate_id.into());
        self
    }

    pub fn validate(&self) -> MollieResult<()> {
        self.amount.validate("amount")?;
        validate_interval(&self.interval)?;
        require("description", &self.description)?;
        validate_times(self.times)
    }
}

/// Parameters for updating a subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl UpdateSubscriptionParams {
    pub fn validate(&self) -> MollieResult<()> {
        if let Some(amount) = &self.amount {
            amount.validate("amount")?;
        }
        if let Some(interval) = &self.interval {
            validate_interval(interval)?;
        }
        validate_times(self.times)
    }
}

fn validate_times(times: Option<u32>) -> MollieResult<()> {
    if times == Some(0) {
        return Err(MollieError::invalid_field("times", "The times must be at least 1"));
    }
    Ok(())
}

fn customer_path(customer_id: &str, collection: &str) -> MollieResult<String> {
    validate_parent_id::<Customer>(customer_id, "customerId")?;
    Ok(format!("customers/{}/{}", customer_id, collection))
}

/// `customers`
#[derive(Debug, Clone)]
pub struct CustomersResource {
    inner: Resource<Customer>,
}

impl CustomersResource {
    const PATH: &'static str = "customers";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create(&self, params: &CustomerParams) -> MollieResult<Customer> {
        self.inner.create(Self::PATH, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Customer> {
        self.inner.get(Self::PATH, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Customer>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(&self, page: &List<Customer>) -> MollieResult<Option<List<Customer>>> {
        self.inner.next_page(Self::PATH, page).await
    }

    #[instrument(skip(self, params))]
    pub async fn update(&self, id: &str, params: &CustomerParams) -> MollieResult<Customer> {
        self.inner.update(Self::PATH, id, params).await
    }

    /// Delete a customer. Its mandates are revoked and its subscriptions
    /// canceled.
    #[instrument(skip(self, params))]
    pub async fn delete(&self, id: &str, params: &TestmodeParams) -> MollieResult<()> {
        self.inner.delete(Self::PATH, id, params).await
    }
}

/// `customers/{cst_id}/payments`
#[derive(Debug, Clone)]
pub struct CustomerPaymentsResource {
    inner: Resource<Payment>,
}

impl CustomerPaymentsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Create a payment linked to the customer
    #[instrument(skip(self, params), fields(amount = %params.amount))]
    pub async fn create(
        &self,
        customer_id: &str,
        params: &CreatePaymentParams,
    ) -> MollieResult<Payment> {
        let path = customer_path(customer_id, "payments")?;
        params.validate()?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Payment>> {
        let path = customer_path(customer_id, "payments")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        customer_id: &str,
        page: &List<Payment>,
    ) -> MollieResult<Option<List<Payment>>> {
        let path = customer_path(customer_id, "payments")?;
        self.inner.next_page(&path, page).await
    }
}

/// `customers/{cst_id}/mandates`
#[derive(Debug, Clone)]
pub struct CustomerMandatesResource {
    inner: Resource<Mandate>,
}

impl CustomerMandatesResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn create(
        &self,
        customer_id: &str,
        params: &CreateMandateParams,
    ) -> MollieResult<Mandate> {
        let path = customer_path(customer_id, "mandates")?;
        params.validate()?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        customer_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Mandate> {
        let path = customer_path(customer_id, "mandates")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Mandate>> {
        let path = customer_path(customer_id, "mandates")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        customer_id: &str,
        page: &List<Mandate>,
    ) -> MollieResult<Option<List<Mandate>>> {
        let path = customer_path(customer_id, "mandates")?;
        self.inner.next_page(&path, page).await
    }

    /// Revoke a mandate; subscriptions charging it stop
    #[instrument(skip(self, params))]
    pub async fn revoke(
        &self,
        customer_id: &str,
        id: &str,
        params: &TestmodeParams,
    ) -> MollieResult<()> {
        let path = customer_path(customer_id, "mandates")?;
        self.inner.delete(&path, id, params).await
    }
}

/// `customers/{cst_id}/subscriptions`
#[derive(Debug, Clone)]
pub struct CustomerSubscriptionsResource {
    inner: Resource<Subscription>,
}

impl CustomerSubscriptionsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params), fields(interval = %params.interval))]
    pub async fn create(
        &self,
        customer_id: &str,
        params: &CreateSubscriptionParams,
    ) -> MollieResult<Subscription> {
        let path = customer_path(customer_id, "subscriptions")?;
        params.validate()?;
        self.inner.create(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(
        &self,
        customer_id: &str,
        id: &str,
        params: &GetParams,
    ) -> MollieResult<Subscription> {
        let path = customer_path(customer_id, "subscriptions")?;
        self.inner.get(&path, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        customer_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Subscription>> {
        let path = customer_path(customer_id, "subscriptions")?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        customer_id: &str,
        page: &List<Subscription>,
    ) -> MollieResult<Option<List<Subscription>>> {
        let path = customer_path(customer_id, "subscriptions")?;
        self.inner.next_page(&path, page).await
    }

    #[instrument(skip(self, params))]
    pub async fn update(
        &self,
        customer_id: &str,
        id: &str,
        params: &UpdateSubscriptionParams,
    ) -> MollieResult<Subscription> {
        let path = customer_path(customer_id, "subscriptions")?;
        params.validate()?;
        self.inner.update(&path, id, params).await
    }

    /// Cancel a subscription, returning it with status `canceled`
    #[instrument(skip(self, params))]
    pub async fn cancel(
        &self,
        customer_id: &str,
        id: &str,
        params: &TestmodeParams,
    ) -> MollieResult<Subscription> {
        let path = customer_path(customer_id, "subscriptions")?;
        self.inner.cancel(&path, id, params).await
    }
}

/// `subscriptions`: every subscription of the account
#[derive(Debug, Clone)]
pub struct SubscriptionsResource {
    inner: Resource<Subscription>,
}

impl SubscriptionsResource {
    const PATH: &'static str = "subscriptions";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Subscription>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(
        &self,
        page: &List<Subscription>,
    ) -> MollieResult<Option<List<Subscription>>> {
        self.inner.next_page(Self::PATH, page).await
    }
}

/// `customers/{cst_id}/subscriptions/{sub_id}/payments`
#[derive(Debug, Clone)]
pub struct SubscriptionPaymentsResource {
    inner: Resource<Payment>,
}

impl SubscriptionPaymentsResource {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Payments charged by a subscription
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        customer_id: &str,
        subscription_id: &str,
        params: &ListParams,
    ) -> MollieResult<List<Payment>> {
        let path = Self::path(customer_id, subscription_id)?;
        self.inner.list(&path, params).await
    }

    pub async fn next_page(
        &self,
        customer_id: &str,
        subscription_id: &str,
        page: &List<Payment>,
    ) -> MollieResult<Option<List<Payment>>> {
        let path = Self::path(customer_id, subscription_id)?;
        self.inner.next_page(&path, page).await
    }

    fn path(customer_id: &str, subscription_id: &str) -> MollieResult<String> {
        validate_parent_id::<Subscription>(subscription_id, "subscriptionId")?;
        customer_path(customer_id, &format!("subscriptions/{}/payments", subscription_id))
    }
}
