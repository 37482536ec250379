//! # Methods
//!
//! Payment methods available to the account. Method ids (`ideal`,
//! `creditcard`, ...) carry no prefix, so unknown ids are reported by the
//! API rather than rejected locally.

use crate::network::NetworkClient;
use crate::resource::Resource;
use mollie_core::{Amount, List, Method, MollieResult, SequenceType};
use serde::Serialize;
use tracing::instrument;

/// Query parameters for fetching one method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMethodParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Currency used for `minimumAmount` and `maximumAmount`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    /// `issuers` and/or `pricing`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl GetMethodParams {
    /// Builder: include `issuers`, `pricing`, ...
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include.push(include.into());
        self
    }

    /// Builder: set the locale of descriptions
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Query parameters for listing methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMethodParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_type: Option<SequenceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Only methods supporting this amount; sent as `amount[value]` and
    /// `amount[currency]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// `orders` to list the methods usable with the Orders API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_wallets: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,
}

impl ListMethodParams {
    /// Builder: only methods supporting `amount`
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Builder: only methods supporting the sequence type
    pub fn with_sequence_type(mut self, sequence_type: SequenceType) -> Self {
        self.sequence_type = Some(sequence_type);
        self
    }

    /// Builder: include `issuers`, `pricing`, ...
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include.push(include.into());
        self
    }

    pub fn validate(&self) -> MollieResult<()> {
        match &self.amount {
            Some(amount) => amount.validate("amount"),
            None => Ok(()),
        }
    }
}

/// `methods`
#[derive(Debug, Clone)]
pub struct MethodsResource {
    inner: Resource<Method>,
}

impl MethodsResource {
    const PATH: &'static str = "methods";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Fetch one method, e.g. `ideal`
    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetMethodParams) -> MollieResult<Method> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// Methods activated on the profile that fit the given filters
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListMethodParams) -> MollieResult<List<Method>> {
        params.validate()?;
        self.inner.network().list(Self::PATH, params).await
    }

    /// Every method Mollie offers, activated or not
    #[instrument(skip(self))]
    pub async fn list_all(&self, params: &ListMethodParams) -> MollieResult<List<Method>> {
        params.validate()?;
        self.inner.network().list("methods/all", params).await
    }
}
