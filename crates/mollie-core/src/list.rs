//! # List Pages
//!
//! One page of a collection response plus its navigation links.
//!
//! ```text
//! {
//!   "count": 2,
//!   "_embedded": { "payments": [ {...}, {...} ] },
//!   "_links": { "self": {...}, "next": {...}, "previous": null, "documentation": {...} }
//! }
//! ```
//!
//! Pages are never fetched ahead of time. A page with a `next` link can be
//! followed by requesting the cursor it carries; a page without one is the
//! last page.

use crate::error::{MollieError, MollieResult};
use crate::model::{Link, Model};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 250;

/// Navigation links of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub previous: Option<Link>,
    #[serde(default)]
    pub documentation: Option<Link>,
}

/// Query parameters for a list request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Cursor: the id of the first entity on the requested page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Page size, 1 to 250
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Required for test mode access with OAuth tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testmode: Option<bool>,

    /// Required for OAuth tokens on profile scoped collections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,

    /// Entity specific filters (`sort`, `reference`, `embed`, ...)
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl ListParams {
    /// Params for the page starting at `cursor`
    pub fn from_cursor(cursor: impl Into<String>) -> Self {
        Self {
            from: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Builder: set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: set test mode
    pub fn with_testmode(mut self, testmode: bool) -> Self {
        self.testmode = Some(testmode);
        self
    }

    /// Builder: set the profile id
    pub fn with_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    /// Builder: add an entity specific filter
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Reject page sizes the API would refuse
    pub fn validate(&self) -> MollieResult<()> {
        match self.limit {
            Some(limit) if limit == 0 || limit > MAX_PAGE_SIZE => Err(MollieError::invalid_field(
                "limit",
                format!("The limit must be between 1 and {}", MAX_PAGE_SIZE),
            )),
            _ => Ok(()),
        }
    }

    /// Rebuild the params carried by a navigation link's query string
    pub fn from_link(link: &Link) -> Self {
        let mut params = Self::default();
        for (key, value) in query_pairs(link) {
            match key.as_str() {
                "from" => params.from = Some(value),
                "limit" => params.limit = value.parse().ok(),
                "testmode" => params.testmode = value.parse().ok(),
                "profileId" => params.profile_id = Some(value),
                _ => {
                    params.filters.insert(key, value);
                }
            }
        }
        params
    }
}

/// One page of entities, in the order the API returned them
#[derive(Debug, Clone, PartialEq)]
pub struct List<M> {
    items: Vec<M>,
    count: usize,
    links: ListLinks,
}

#[derive(Deserialize)]
struct RawList {
    #[serde(default)]
    count: Option<usize>,
    #[serde(rename = "_embedded", default)]
    embedded: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "_links", default)]
    links: ListLinks,
}

impl<M: Model> List<M> {
    /// Parse a collection response body.
    ///
    /// Items are read from `_embedded[M::COLLECTION]`; a missing key is an
    /// empty page.
    pub fn from_value(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut raw: RawList = serde_json::from_value(body)?;
        let items: Vec<M> = match raw.embedded.remove(M::COLLECTION) {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        Ok(Self {
            count: raw.count.unwrap_or(items.len()),
            items,
            links: raw.links,
        })
    }
}

impl<M> List<M> {
    /// Build a page from parts
    pub fn new(items: Vec<M>, links: ListLinks) -> Self {
        Self {
            count: items.len(),
            items,
            links,
        }
    }

    /// Number of entities on this page, as reported by the API
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn links(&self) -> &ListLinks {
        &self.links
    }

    pub fn items(&self) -> &[M] {
        &self.items
    }

    pub fn into_items(self) -> Vec<M> {
        self.items
    }

    /// True when a further page exists
    pub fn has_next(&self) -> bool {
        self.links.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.links.previous.is_some()
    }

    /// Cursor carried by the `next` link
    pub fn next_cursor(&self) -> Option<String> {
        self.links.next.as_ref().and_then(cursor_of)
    }

    /// Cursor carried by the `previous` link
    pub fn previous_cursor(&self) -> Option<String> {
        self.links.previous.as_ref().and_then(cursor_of)
    }

    /// Params requesting the following page, `None` on the last page
    pub fn next_page_params(&self) -> Option<ListParams> {
        self.links.next.as_ref().map(ListParams::from_link)
    }

    /// Params requesting the preceding page, `None` on the first page
    pub fn previous_page_params(&self) -> Option<ListParams> {
        self.links.previous.as_ref().map(ListParams::from_link)
    }
}

impl<M> std::ops::Deref for List<M> {
    type Target = [M];

    fn deref(&self) -> &[M] {
        &self.items
    }
}

impl<M> IntoIterator for List<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a List<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn cursor_of(link: &Link) -> Option<String> {
    query_pairs(link)
        .into_iter()
        .find(|(key, _)| key == "from")
        .map(|(_, value)| value)
}

/// Decoded query pairs of a link; an unparseable href carries none
fn query_pairs(link: &Link) -> Vec<(String, String)> {
    match Url::parse(&link.href) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => Vec::new(),
    }
}
