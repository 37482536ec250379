//! # Payment Method
//!
//! Payment methods are identified by their name (`ideal`, `creditcard`, ...)
//! rather than a prefixed id, so ids are validated by the API only.

use crate::amount::Amount;
use crate::model::Links;
use serde::{Deserialize, Serialize};

/// Logo URLs of a method or issuer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodImage {
    #[serde(default)]
    pub size1x: Option<String>,
    #[serde(default)]
    pub size2x: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// Issuer of a method (iDEAL bank, gift card brand, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: MethodImage,
}

/// Fee line returned with `include=pricing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodPricing {
    pub description: String,
    pub fixed: Amount,
    pub variable: String,
    #[serde(default)]
    pub fee_region: Option<String>,
}

/// A payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub minimum_amount: Option<Amount>,
    #[serde(default)]
    pub maximum_amount: Option<Amount>,
    #[serde(default)]
    pub image: MethodImage,
    /// Activation status on the profile (`activated`, `pending-review`, ...)
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issuers: Option<Vec<Issuer>>,
    #[serde(default)]
    pub pricing: Option<Vec<MethodPricing>>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

crate::impl_model!(Method, "method", "methods", None);

impl Method {
    /// URL of the method logo at 1x or 2x resolution
    pub fn image_url(&self, retina: bool) -> Option<&str> {
        if retina {
            self.image.size2x.as_deref()
        } else {
            self.image.size1x.as_deref()
        }
    }

    pub fn is_activated(&self) -> bool {
        self.status.as_deref() == Some("activated")
    }
}
