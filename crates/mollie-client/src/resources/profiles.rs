//! # Profiles, Organizations, Permissions, Onboarding
//!
//! Account level resources. `profiles/me`, `organizations/me` and
//! `onboarding/me` address whatever the credential belongs to.

use crate::network::NetworkClient;
use crate::params::{require, GetParams, TestmodeParams};
use crate::resource::Resource;
use mollie_core::{
    Address, List, ListParams, Mode, MollieResult, Onboarding, Organization, Permission, Profile,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Parameters for creating a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileParams {
    pub name: String,
    pub website: String,
    pub email: String,
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl CreateProfileParams {
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            website: website.into(),
            email: email.into(),
            phone: phone.into(),
            business_category: None,
            category_code: None,
            mode: None,
        }
    }

    pub fn validate(&self) -> MollieResult<()> {
        require("name", &self.name)?;
        require("website", &self.website)?;
        require("email", &self.email)?;
        require("phone", &self.phone)
    }
}

/// Parameters for updating a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

/// Organization data submitted during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingOrganization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_regulation: Option<String>,
}

/// Profile data submitted during onboarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<u32>,
}

/// Data to prefill the onboarding forms with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmitOnboardingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OnboardingOrganization>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OnboardingProfile>,
}

/// `profiles`
#[derive(Debug, Clone)]
pub struct ProfilesResource {
    inner: Resource<Profile>,
}

impl ProfilesResource {
    const PATH: &'static str = "profiles";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: &CreateProfileParams) -> MollieResult<Profile> {
        params.validate()?;
        self.inner.create(Self::PATH, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Profile> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// The profile an API key belongs to
    #[instrument(skip(self))]
    pub async fn get_current(&self) -> MollieResult<Profile> {
        self.inner.network().get("profiles/me", &()).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> MollieResult<List<Profile>> {
        self.inner.list(Self::PATH, params).await
    }

    pub async fn next_page(&self, page: &List<Profile>) -> MollieResult<Option<List<Profile>>> {
        self.inner.next_page(Self::PATH, page).await
    }

    #[instrument(skip(self, params))]
    pub async fn update(&self, id: &str, params: &UpdateProfileParams) -> MollieResult<Profile> {
        self.inner.update(Self::PATH, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> MollieResult<()> {
        self.inner.delete(Self::PATH, id, &TestmodeParams::default()).await
    }
}

/// `organizations`
#[derive(Debug, Clone)]
pub struct OrganizationsResource {
    inner: Resource<Organization>,
}

impl OrganizationsResource {
    const PATH: &'static str = "organizations";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Organization> {
        self.inner.get(Self::PATH, id, params).await
    }

    /// The organization the credential belongs to
    #[instrument(skip(self))]
    pub async fn get_current(&self) -> MollieResult<Organization> {
        self.inner.network().get("organizations/me", &()).await
    }
}

/// `permissions` granted to the OAuth token
#[derive(Debug, Clone)]
pub struct PermissionsResource {
    inner: Resource<Permission>,
}

impl PermissionsResource {
    const PATH: &'static str = "permissions";

    pub fn new(network: NetworkClient) -> Self {
        Self {
            inner: Resource::new(network),
        }
    }

    /// Fetch one permission, e.g. `payments.read`
    #[instrument(skip(self, params))]
    pub async fn get(&self, id: &str, params: &GetParams) -> MollieResult<Permission> {
        self.inner.get(Self::PATH, id, params).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> MollieResult<List<Permission>> {
        self.inner.list(Self::PATH, &ListParams::default()).await
    }
}

/// `onboarding/me`
#[derive(Debug, Clone)]
pub struct OnboardingResource {
    network: NetworkClient,
}

impl OnboardingResource {
    const PATH: &'static str = "onboarding/me";

    pub fn new(network: NetworkClient) -> Self {
        Self { network }
    }

    /// Onboarding status of the organization
    #[instrument(skip(self))]
    pub async fn get(&self) -> MollieResult<Onboarding> {
        self.network.get(Self::PATH, &()).await
    }

    /// Prefill the onboarding forms. Only accepted while the status is
    /// `needs-data`.
    #[instrument(skip(self, params))]
    pub async fn submit(&self, params: &SubmitOnboardingParams) -> MollieResult<()> {
        self.network.post_empty(Self::PATH, params).await?;
        info!("Submitted onboarding data");
        Ok(())
    }
}
