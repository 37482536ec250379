//! # Model Trait
//!
//! Shared behavior for entities returned by the API.
//!
//! Every entity declares, as associated constants:
//! - its singular resource name (`"payment"`), used in error messages
//! - the key its pages are embedded under (`"payments"`)
//! - the literal prefix every valid identifier starts with (`"tr_"`)
//!
//! Resources use these constants to validate identifiers before issuing a
//! request and to pull a page of models out of a collection response.

use crate::error::{MollieError, MollieResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An API entity with a typed identifier.
pub trait Model: DeserializeOwned + Send + Sync + 'static {
    /// Singular resource name, e.g. `"payment"`
    const RESOURCE: &'static str;

    /// Key holding a page of this entity under `_embedded`
    const COLLECTION: &'static str;

    /// Literal prefix of every identifier, if the entity has one
    const ID_PREFIX: Option<&'static str>;

    /// The entity identifier
    fn id(&self) -> &str;
}

/// Check that `id` is a well-formed identifier for `M`.
///
/// Fails with a validation error and makes no network call when the prefix
/// does not match.
pub fn validate_id<M: Model>(id: &str) -> MollieResult<()> {
    validate_prefixed(id, M::RESOURCE, M::ID_PREFIX, "id")
}

/// Check a parent identifier of a nested resource, e.g. the payment id in
/// `payments/{id}/refunds`.
pub fn validate_parent_id<M: Model>(id: &str, field: &str) -> MollieResult<()> {
    validate_prefixed(id, M::RESOURCE, M::ID_PREFIX, field)
}

fn validate_prefixed(
    id: &str,
    resource: &str,
    prefix: Option<&str>,
    field: &str,
) -> MollieResult<()> {
    let well_formed = !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '?', '#', '%', ' '])
        && match prefix {
            Some(prefix) => id.len() > prefix.len() && id.starts_with(prefix),
            None => true,
        };

    if !well_formed {
        return Err(MollieError::invalid_field(
            field,
            format!("The {} id is invalid", resource),
        ));
    }
    Ok(())
}

/// A single HAL link: `{"href": "...", "type": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(rename = "type", default)]
    pub content_type: String,
}

/// Named links attached to a model (`_links`).
///
/// Purely descriptive: a model never follows its own links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Option<Link>>);

impl Links {
    /// Get a link by name, treating `null` as absent
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.0.get(name).and_then(|link| link.as_ref())
    }

    /// Get the href of a link by name
    pub fn href(&self, name: &str) -> Option<&str> {
        self.get(name).map(|link| link.href.as_str())
    }

    /// Names of all links present, including null ones
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|name| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Live or test mode of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Live,
    Test,
}

/// Implements [`Model`] for an entity struct with an `id: String` field.
#[macro_export]
macro_rules! impl_model {
    ($ty:ty, $resource:literal, $collection:literal, $prefix:expr) => {
        impl $crate::model::Model for $ty {
            const RESOURCE: &'static str = $resource;
            const COLLECTION: &'static str = $collection;
            const ID_PREFIX: Option<&'static str> = $prefix;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}
