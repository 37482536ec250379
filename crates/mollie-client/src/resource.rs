//! # Generic Resource
//!
//! One CRUD implementation for every entity. The model type supplies the
//! resource name and id prefix, the caller supplies the collection path.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Resource<M: Model>                        │
//! │  ├── create(path, params)        POST   {path}               │
//! │  ├── get(path, id, query)        GET    {path}/{id}          │
//! │  ├── list(path, params)          GET    {path}?from=&limit=  │
//! │  ├── next_page(path, page)       GET    {path}?from={next}   │
//! │  ├── update(path, id, data)      PATCH  {path}/{id}          │
//! │  ├── cancel(path, id, params)    DELETE {path}/{id} -> M     │
//! │  └── delete(path, id, params)    DELETE {path}/{id} -> ()    │
//! └──────────────────────────────────────────────────────────────┘
//!                              ▲
//!        ┌─────────────────────┼─────────────────────┐
//!        │                     │                     │
//! ┌──────┴───────┐     ┌───────┴───────┐     ┌───────┴───────┐
//! │   Payments   │     │PaymentRefunds │     │    Orders     │ ...
//! │   Resource   │     │   Resource    │     │   Resource    │
//! └──────────────┘     └───────────────┘     └───────────────┘
//! ```
//!
//! Operations taking an id validate it against `M::ID_PREFIX` first and
//! fail without touching the network when it does not match.

use crate::network::NetworkClient;
use mollie_core::{validate_id, List, ListParams, MollieResult, Model};
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info};

/// Generic CRUD façade over one entity type
pub struct Resource<M> {
    network: NetworkClient,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for Resource<M> {
    fn clone(&self) -> Self {
        Self {
            network: self.network.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> std::fmt::Debug for Resource<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("model", &std::any::type_name::<M>())
            .finish()
    }
}

impl<M: Model> Resource<M> {
    pub fn new(network: NetworkClient) -> Self {
        Self {
            network,
            _model: PhantomData,
        }
    }

    /// The shared network client
    pub fn network(&self) -> &NetworkClient {
        &self.network
    }

    /// Create an entity in the collection at `path`
    pub async fn create<P>(&self, path: &str, params: &P) -> MollieResult<M>
    where
        P: Serialize + ?Sized,
    {
        let created: M = self.network.post(path, params).await?;
        info!("Created {}: id={}", M::RESOURCE, created.id());
        Ok(created)
    }

    /// Fetch one entity by id
    pub async fn get<Q>(&self, path: &str, id: &str, query: &Q) -> MollieResult<M>
    where
        Q: Serialize + ?Sized,
    {
        validate_id::<M>(id)?;
        self.network.get(&member_path(path, id), query).await
    }

    /// Fetch one page of the collection at `path`
    pub async fn list(&self, path: &str, params: &ListParams) -> MollieResult<List<M>> {
        params.validate()?;
        self.network.list(path, params).await
    }

    /// Fetch the page following `page`, `None` when `page` is the last one.
    ///
    /// Requests exactly the cursor carried by the `next` link.
    pub async fn next_page(&self, path: &str, page: &List<M>) -> MollieResult<Option<List<M>>> {
        match page.next_page_params() {
            Some(params) => {
                debug!("Following next {} cursor {:?}", M::COLLECTION, params.from);
                self.list(path, &params).await.map(Some)
            }
            None => Ok(None),
        }
    }

    /// Fetch the page preceding `page`, `None` when `page` is the first one
    pub async fn previous_page(
        &self,
        path: &str,
        page: &List<M>,
    ) -> MollieResult<Option<List<M>>> {
        match page.previous_page_params() {
            Some(params) => self.list(path, &params).await.map(Some),
            None => Ok(None),
        }
    }

    /// Partially update an entity
    pub async fn update<P>(&self, path: &str, id: &str, data: &P) -> MollieResult<M>
    where
        P: Serialize + ?Sized,
    {
        validate_id::<M>(id)?;
        self.network.patch(&member_path(path, id), data).await
    }

    /// Cancel an entity, returning it in its new state
    pub async fn cancel<P>(&self, path: &str, id: &str, params: &P) -> MollieResult<M>
    where
        P: Serialize + ?Sized,
    {
        validate_id::<M>(id)?;
        let canceled: M = self.network.delete(&member_path(path, id), params).await?;
        info!("Canceled {}: id={}", M::RESOURCE, canceled.id());
        Ok(canceled)
    }

    /// Delete an entity at an endpoint answering `204 No Content`
    pub async fn delete<P>(&self, path: &str, id: &str, params: &P) -> MollieResult<()>
    where
        P: Serialize + ?Sized,
    {
        validate_id::<M>(id)?;
        self.network.delete_empty(&member_path(path, id), params).await?;
        info!("Deleted {}: id={}", M::RESOURCE, id);
        Ok(())
    }
}

/// `{collection}/{id}`
pub(crate) fn member_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use mollie_core::{MollieError, Payment};
    use reqwest::Method;
    use serde_json::json;

    fn payment_body(id: &str) -> serde_json::Value {
        json!({
            "resource": "payment",
            "id": id,
            "mode": "test",
            "createdAt": "2018-03-20T13:13:37+00:00",
            "status": "open",
            "amount": { "value": "10.00", "currency": "EUR" },
            "description": "Order #12345"
        })
    }

    #[test]
    fn test_member_path() {
        assert_eq!(member_path("payments", "tr_1"), "payments/tr_1");
        assert_eq!(member_path("payments/", "tr_1"), "payments/tr_1");
    }

    #[tokio::test]
    async fn test_invalid_id_never_reaches_transport() {
        let transport = MockTransport::new();
        let resource: Resource<Payment> = Resource::new(transport.network());

        let err = resource.get("payments", "ord_123", &()).await.unwrap_err();
        assert!(matches!(err, MollieError::Validation { .. }));
        assert_eq!(err.message(), "The payment id is invalid");

        assert!(resource.update("payments", "foo", &json!({})).await.is_err());
        assert!(resource.cancel("payments", "foo", &()).await.is_err());
        assert!(resource.delete("payments", "foo", &()).await.is_err());

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_issues_one_request() {
        let transport = MockTransport::new().respond(200, payment_body("tr_WDqYK6vllg"));
        let resource: Resource<Payment> = Resource::new(transport.network());

        let payment = resource
            .get("payments", "tr_WDqYK6vllg", &json!({ "testmode": true }))
            .await
            .unwrap();

        assert_eq!(payment.id, "tr_WDqYK6vllg");
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "payments/tr_WDqYK6vllg");
        assert_eq!(
            requests[0].query,
            vec![("testmode".to_string(), "true".to_string())]
        );
    }

    #[tokio::test]
    async fn test_next_page_on_last_page_makes_no_request() {
        let transport = MockTransport::new().respond(
            200,
            json!({
                "count": 1,
                "_embedded": { "payments": [ payment_body("tr_a") ] },
                "_links": { "next": null, "previous": null }
            }),
        );
        let resource: Resource<Payment> = Resource::new(transport.network());

        let page = resource.list("payments", &ListParams::default()).await.unwrap();
        assert_eq!(page.len(), 1);

        assert!(resource.next_page("payments", &page).await.unwrap().is_none());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_limit_rejected_locally() {
        let transport = MockTransport::new();
        let resource: Resource<Payment> = Resource::new(transport.network());

        let err = resource
            .list("payments", &ListParams::default().with_limit(1000))
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("limit"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_returns_new_state() {
        let mut canceled = payment_body("tr_WDqYK6vllg");
        canceled["status"] = json!("canceled");
        let transport = MockTransport::new().respond(200, canceled);
        let resource: Resource<Payment> = Resource::new(transport.network());

        let payment = resource.cancel("payments", "tr_WDqYK6vllg", &()).await.unwrap();

        assert!(payment.is_canceled());
        assert_eq!(transport.requests()[0].method, Method::DELETE);
        assert!(transport.requests()[0].body.is_none());
    }
}
