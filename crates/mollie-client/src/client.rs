//! # Client Factory
//!
//! [`MollieClient`] validates configuration once, builds a single
//! [`NetworkClient`] and hands a clone of it to every resource.

use crate::config::ClientConfig;
use crate::network::NetworkClient;
use crate::resources::{
    ChargebacksResource, CustomerMandatesResource, CustomerPaymentsResource,
    CustomerSubscriptionsResource, CustomersResource, InvoicesResource, MethodsResource,
    OnboardingResource, OrderLinesResource, OrderPaymentsResource, OrderRefundsResource,
    OrderShipmentsResource, OrdersResource, OrganizationsResource, PaymentCapturesResource,
    PaymentChargebacksResource, PaymentLinksResource, PaymentRefundsResource, PaymentsResource,
    PermissionsResource, ProfilesResource, RefundsResource, SettlementsResource,
    SubscriptionPaymentsResource, SubscriptionsResource,
};
use crate::transport::BoxedTransport;
use mollie_core::MollieResult;
use tracing::info;

/// Entry point: one named field per API resource
#[derive(Debug, Clone)]
pub struct MollieClient {
    pub payments: PaymentsResource,
    pub payment_refunds: PaymentRefundsResource,
    pub payment_captures: PaymentCapturesResource,
    pub payment_chargebacks: PaymentChargebacksResource,
    pub refunds: RefundsResource,
    pub chargebacks: ChargebacksResource,
    pub methods: MethodsResource,
    pub customers: CustomersResource,
    pub customer_payments: CustomerPaymentsResource,
    pub customer_mandates: CustomerMandatesResource,
    pub customer_subscriptions: CustomerSubscriptionsResource,
    pub subscriptions: SubscriptionsResource,
    pub subscription_payments: SubscriptionPaymentsResource,
    pub orders: OrdersResource,
    pub order_lines: OrderLinesResource,
    pub order_shipments: OrderShipmentsResource,
    pub order_refunds: OrderRefundsResource,
    pub order_payments: OrderPaymentsResource,
    pub payment_links: PaymentLinksResource,
    pub profiles: ProfilesResource,
    pub organizations: OrganizationsResource,
    pub permissions: PermissionsResource,
    pub onboarding: OnboardingResource,
    pub settlements: SettlementsResource,
    pub invoices: InvoicesResource,
    network: NetworkClient,
}

impl MollieClient {
    /// Build a client over the default HTTP transport.
    ///
    /// Fails with [`mollie_core::MollieError::Configuration`] before any
    /// resource exists when the credential, base URL or headers are invalid.
    pub fn new(config: ClientConfig) -> MollieResult<Self> {
        config.validate()?;
        let network = NetworkClient::from_config(&config)?;
        info!(
            "Mollie client ready: credential={:?}, endpoint={}",
            config.credential, config.api_base_url
        );
        Ok(Self::with_network(network))
    }

    /// Build a client from `MOLLIE_*` environment variables
    pub fn from_env() -> MollieResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Start a builder for an API key or access token
    pub fn builder(credential: impl Into<String>) -> MollieClientBuilder {
        MollieClientBuilder {
            config: ClientConfig::new(credential),
        }
    }

    /// Build a client over a custom transport
    pub fn with_transport(transport: BoxedTransport) -> Self {
        Self::with_network(NetworkClient::new(transport))
    }

    fn with_network(network: NetworkClient) -> Self {
        Self {
            payments: PaymentsResource::new(network.clone()),
            payment_refunds: PaymentRefundsResource::new(network.clone()),
            payment_captures: PaymentCapturesResource::new(network.clone()),
            payment_chargebacks: PaymentChargebacksResource::new(network.clone()),
            refunds: RefundsResource::new(network.clone()),
            chargebacks: ChargebacksResource::new(network.clone()),
            methods: MethodsResource::new(network.clone()),
            customers: CustomersResource::new(network.clone()),
            customer_payments: CustomerPaymentsResource::new(network.clone()),
            customer_mandates: CustomerMandatesResource::new(network.clone()),
            customer_subscriptions: CustomerSubscriptionsResource::new(network.clone()),
            subscriptions: SubscriptionsResource::new(network.clone()),
            subscription_payments: SubscriptionPaymentsResource::new(network.clone()),
            orders: OrdersResource::new(network.clone()),
            order_lines: OrderLinesResource::new(network.clone()),
            order_shipments: OrderShipmentsResource::new(network.clone()),
            order_refunds: OrderRefundsResource::new(network.clone()),
            order_payments: OrderPaymentsResource::new(network.clone()),
            payment_links: PaymentLinksResource::new(network.clone()),
            profiles: ProfilesResource::new(network.clone()),
            organizations: OrganizationsResource::new(network.clone()),
            permissions: PermissionsResource::new(network.clone()),
            onboarding: OnboardingResource::new(network.clone()),
            settlements: SettlementsResource::new(network.clone()),
            invoices: InvoicesResource::new(network.clone()),
            network,
        }
    }

    /// The network client shared by all resources
    pub fn network(&self) -> &NetworkClient {
        &self.network
    }
}

/// Builder for [`MollieClient`]
#[derive(Debug, Clone)]
pub struct MollieClientBuilder {
    config: ClientConfig,
}

impl MollieClientBuilder {
    /// Override the API endpoint
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_api_base_url(url);
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config = self.config.with_timeout_secs(secs);
        self
    }

    /// Send an extra header with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.with_header(name, value);
        self
    }

    /// Append `name/version` to the `User-Agent`
    pub fn with_version_string(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_version_string(version);
        self
    }

    /// Trust an extra PEM encoded root certificate
    pub fn with_root_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.config = self.config.with_root_certificate(pem);
        self
    }

    /// The configuration built so far
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build(self) -> MollieResult<MollieClient> {
        MollieClient::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GetParams;
    use crate::testing::{fixtures, MockTransport};
    use mollie_core::MollieError;
    use std::sync::Arc;

    const API_KEY: &str = "test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM";

    #[test]
    fn test_builder_applies_overrides() {
        let builder = MollieClient::builder(API_KEY)
            .with_api_base_url("https://api.example.org/v2")
            .with_timeout_secs(5)
            .with_header("X-Request-Source", "tests")
            .with_version_string("MyPlatform/1.0");

        let config = builder.config();
        assert_eq!(config.api_base_url, "https://api.example.org/v2");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.headers.get("X-Request-Source").map(String::as_str), Some("tests"));
        assert!(config.user_agent().ends_with(" MyPlatform/1.0"));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = MollieClient::builder("not_a_key").build().unwrap_err();
        assert!(matches!(err, MollieError::Configuration(_)));

        let err = MollieClient::builder(API_KEY)
            .with_api_base_url("http://api.mollie.com/v2/")
            .build()
            .unwrap_err();
        assert!(matches!(err, MollieError::Configuration(_)));

        let err = MollieClient::builder(API_KEY)
            .with_version_string("has spaces/1.0")
            .build()
            .unwrap_err();
        assert!(matches!(err, MollieError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_resources_share_one_transport() {
        let transport = MockTransport::new()
            .respond(200, fixtures::payment("tr_WDqYK6vllg"))
            .respond(200, fixtures::customer("cst_8wmqcHMN4U"));
        let client = MollieClient::with_transport(Arc::new(transport.clone()));

        client.payments.get("tr_WDqYK6vllg", &GetParams::new()).await.unwrap();
        client.customers.get("cst_8wmqcHMN4U", &GetParams::new()).await.unwrap();

        assert_eq!(transport.request_count(), 2);
    }
}
