//! # Payments
//!
//! `payments` and the payment parameters shared with customer and order
//! payments.

use crate::network::NetworkClient;
use crate::params::{require, GetParams, TestmodeParams};
use crate::resource::Resource;
use mollie_core::{
    Amount, ApplicationFee, List, ListParams, MollieError, MollieResult, Payment, SequenceType,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

/// Parameters for creating a payment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentParams {
    pub amount: Amount,
    pub description: String,

    /// Where the customer lands after checkout; required unless recurring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Restrict checkout to these methods
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub method: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_payment_methods_to_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,

    /// Required with OAuth tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee: Option<ApplicationFee>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,

    /// Method specific parameters such as `issuer` or `billingEmail`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatePaymentParams {
    /// A one-off payment redirecting the customer to `redirect_url`
    pub fn new(
        amount: Amount,
        description: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            redirect_url: Some(redirect_url.into()),
            ..Self::bare(amount, description)
        }
    }

    /// A recurring payment charged on a mandate of `customer_id`
    pub fn recurring(
        amount: Amount,
        description: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            sequence_type: Some(SequenceType::Recurring),
            customer_id: Some(customer_id.into()),
            ..Self::bare(amount, description)
        }
    }

    fn bare(amount: Amount, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            redirect_url: None,
            cancel_url: None,
            webhook_url: None,
            locale: None,
            method: Vec::new(),
            restrict_payment_methods_to_country: None,
            metadata: None,
            sequence_type: None,
            customer_id: None,
            mandate_id: None,
            profile_id: None,
            application_fee: None,
            testmode: None,
            extra: Map::new(),
        }
    }

    /// Builder: set the webhook URL
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Builder: set the cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Builder: offer a payment method (repeat for several)
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method.push(method.into());
        self
    }

    /// Builder: set the checkout locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Builder: attach metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Builder: set the sequence type
    pub fn with_sequence_type(mut self, sequence_type: SequenceType) -> Self {
        self.sequence_type = Some(sequence_type);
        self
    }

    /// Builder: link the payment to a customer
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Builder: charge a specific mandate
    pub fn with_mandate_id(mut self, mandate_id: impl Into<String>) -> Self {
        self.mandate_id = Some(mandate_id.into());
        self
    }

    /// Builder: set the profile (OAuth)
    pub fn with_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    /// Builder: address test mode (OAuth)
    pub fn with_testmode(mut self, testmode: bool) -> Self {
        self.testmode = Some(testmode);
        self
    }

    /// Builder: add a method specific parameter
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.sequence_type == Some(SequenceType::Recurring)
    }

    /// Check the parameters that do not depend on where the payment is
    /// created.
    pub fn validate(&self) -> MollieResult<()> {
        self.amount.validate("amount")?;
        require("description", &self.description)?;
        if !self.is_recurring() && self.redirect_url.as_deref().map_or(true, str::is_empty) {
            return Err(MollieError::invalid_field(
                "redirectUrl",
                "The redirectUrl is required for payments that are not recurring",
            ));
        }
        if let Some(fee) = &self.application_fee {
            fee.amount.validate("applicationFee.amount")?;
        }
        Ok(())
    }
}

/// Parameters for updating a payment
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict_payment_methods_to_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

/// `payments`
#[derive(Debug, Clone)]
pub struct PaymentsResource {
    inner: Resource<Payment>,
}

impl PaymentsResource {
    const PATH: &'static str = "payments";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Create a payment
    #[instrument(skip(self, params), fields(amount = %params.amount))]
    pub async fn create(&self, params: &CreatePaymentParams) -> MollieResult<Payment> {
        params.validate()?;
        if params.is_recurring() && params.customer_id.is_none() {
            return Err(MollieError::invalid_field(
                "customerId",
                "The customerId is required for recurring payments",
            ));
        }
        self.inner.create(Self::PATH, params).await
    }

    /// Fetch a payment by its `tr_` id
    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Payment> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// Fetch one page of payments
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Payment>> {
        self.inner.list(Self::PATH, params).await
    }

    /// Fetch the page after `page`
    pub async fn next_page(&self, page: &List<Payment>) -> MollieResult<Option<List<Payment>>> {
        self.inner.next_page(Self::PATH, page).await
    }

    /// Fetch the page before `page`
    pub async fn previous_page(&self, page: &List<Payment>) -> MollieResult<Option<List<Payment>>> {
        self.inner.previous_page(Self::PATH, page).await
    }

    /// Update a payment
    #[instrument(skip(self, params))]
    pub async fn update(&self, id: &str, params: &UpdatePaymentParams) -> MollieResult<Payment> {
        self.inner.update(Self::PATH, id, params).await
    }

    /// Cancel a payment. Only payments whose `is_cancelable` is set can be
    /// canceled.
    #[instrument(skip(self, params))]
    pub async fn cancel(&self, id: &str, params: &TestmodeParams) -> MollieResult<Payment> {
        self.inner.cancel(Self::PATH, id, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockTransport};
    use reqwest::Method;
    use serde_json::json;

    fn params() -> CreatePaymentParams {
        CreatePaymentParams::new(
            Amount::new("EUR", "10.00"),
            "Order #12345",
            "https://webshop.example.org/order/12345/",
        )
    }

    #[test]
    fn test_create_params_body() {
        let body = serde_json::to_value(
            params()
                .with_webhook_url("https://webshop.example.org/payments/webhook/")
                .with_method("ideal")
                .with_param("issuer", json!("ideal_INGBNL2A"))
                .with_metadata(json!({ "order_id": "12345" })),
        )
        .unwrap();

        assert_eq!(
            body,
            json!({
                "amount": { "currency": "EUR", "value": "10.00" },
                "description": "Order #12345",
                "redirectUrl": "https://webshop.example.org/order/12345/",
                "webhookUrl": "https://webshop.example.org/payments/webhook/",
                "method": ["ideal"],
                "metadata": { "order_id": "12345" },
                "issuer": "ideal_INGBNL2A"
            })
        );
    }

    #[test]
    fn test_validation() {
        assert!(params().validate().is_ok());

        let mut missing_redirect = params();
        missing_redirect.redirect_url = None;
        assert_eq!(missing_redirect.validate().unwrap_err().field(), Some("redirectUrl"));

        let recurring =
            CreatePaymentParams::recurring(Amount::new("EUR", "10.00"), "Rent", "cst_8wmqcHMN4U");
        assert!(recurring.validate().is_ok());

        let bad_amount = CreatePaymentParams::new(Amount::new("EUR", "ten"), "x", "https://example.org");
        assert_eq!(bad_amount.validate().unwrap_err().field(), Some("amount"));

        let blank = CreatePaymentParams::new(Amount::new("EUR", "1.00"), " ", "https://example.org");
        assert_eq!(blank.validate().unwrap_err().field(), Some("description"));
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let transport = MockTransport::new().respond(201, fixtures::payment("tr_7UhSN1zuXS"));
        let payments = PaymentsResource::new(transport.network());

        let payment = payments.create(&params()).await.unwrap();

        assert_eq!(payment.id, "tr_7UhSN1zuXS");
        assert!(payment.checkout_url().is_some());
        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "payments");
        assert_eq!(request.body.unwrap()["amount"]["value"], "10.00");
    }

    #[tokio::test]
    async fn test_invalid_params_never_sent() {
        let transport = MockTransport::new();
        let payments = PaymentsResource::new(transport.network());

        let mut recurring = params().with_sequence_type(SequenceType::Recurring);
        recurring.customer_id = None;
        let err = payments.create(&recurring).await.unwrap_err();
        assert_eq!(err.field(), Some("customerId"));

        let err = payments.get("re_4qqhO89gsT", &GetParams::new()).await.unwrap_err();
        assert_eq!(err.message(), "The payment id is invalid");

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_patches_member() {
        let transport = MockTransport::new().respond(200, fixtures::payment("tr_7UhSN1zuXS"));
        let payments = PaymentsResource::new(transport.network());

        let update = UpdatePaymentParams {
            description: Some("Order #98765".into()),
            ..Default::default()
        };
        payments.update("tr_7UhSN1zuXS", &update).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.path, "payments/tr_7UhSN1zuXS");
        assert_eq!(request.body, Some(json!({ "description": "Order #98765" })));
    }

    #[tokio::test]
    async fn test_list_and_follow_next() {
        let transport = MockTransport::new()
            .respond(
                200,
                fixtures::page(
                    "payments",
                    vec![fixtures::payment("tr_a1"), fixtures::payment("tr_a2")],
                    Some("tr_a3"),
                ),
            )
            .respond(200, fixtures::page("payments", vec![fixtures::payment("tr_a3")], None));
        let payments = PaymentsResource::new(transport.network());

        let first = payments.list(&ListParams::default().with_limit(2)).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "tr_a1");
        assert_eq!(first[1].id, "tr_a2");

        let second = payments.next_page(&first).await.unwrap().unwrap();
        assert_eq!(second.len(), 1);
        assert!(payments.next_page(&second).await.unwrap().is_none());

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[1]
            .query
            .contains(&("from".to_string(), "tr_a3".to_string())));
    }

    #[tokio::test]
    async fn test_get_keeps_embedded_refunds() {
        let mut body = fixtures::payment("tr_WDqYK6vllg");
        body["_embedded"] = json!({
            "refunds": [fixtures::refund("re_4qqhO89gsT", "tr_WDqYK6vllg")]
        });
        let transport = MockTransport::new().respond(200, body);
        let payments = PaymentsResource::new(transport.network());

        let payment = payments
            .get("tr_WDqYK6vllg", &GetParams::new().with_embed("refunds"))
            .await
            .unwrap();

        assert_eq!(
            transport.last_request().query,
            vec![("embed".to_string(), "refunds".to_string())]
        );
        assert_eq!(payment.resource, "payment");
        assert_eq!(payment.refunds().len(), 1);
        assert_eq!(payment.refunds()[0].payment_id, "tr_WDqYK6vllg");

        let value = serde_json::to_value(&payment).unwrap();
        assert_eq!(value["_embedded"]["refunds"][0]["id"], "re_4qqhO89gsT");
    }

    #[tokio::test]
    async fn test_unknown_status_keeps_the_page() {
        let mut paid = fixtures::payment("tr_a1");
        paid["status"] = json!("paid");
        let mut settled = fixtures::payment("tr_a2");
        settled["status"] = json!("settled");
        let transport = MockTransport::new()
            .respond(200, fixtures::page("payments", vec![paid, settled], None));
        let payments = PaymentsResource::new(transport.network());

        let page = payments.list(&ListParams::default()).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].status, mollie_core::PaymentStatus::Paid);
        assert_eq!(page[1].status, mollie_core::PaymentStatus::Unknown);
    }
}
