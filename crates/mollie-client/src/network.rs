//! # Network Client
//!
//! Typed request helpers shared by every resource, and the single place
//! where responses are normalized into models or [`MollieError`]s.

use crate::config::ClientConfig;
use crate::transport::{ApiRequest, ApiResponse, BoxedTransport, HttpTransport};
use mollie_core::{List, MollieError, MollieResult, Model};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Shared, cheaply clonable handle on the transport
#[derive(Clone)]
pub struct NetworkClient {
    transport: BoxedTransport,
}

impl std::fmt::Debug for NetworkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkClient").finish_non_exhaustive()
    }
}

impl NetworkClient {
    /// Wrap an existing transport
    pub fn new(transport: BoxedTransport) -> Self {
        Self { transport }
    }

    /// Build the default `reqwest` transport from configuration
    pub fn from_config(config: &ClientConfig) -> MollieResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// GET a single entity
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> MollieResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::GET, path).with_query(to_query(query)?);
        let body = self.send(request).await?;
        decode(path, body)
    }

    /// GET one page of a collection
    pub async fn list<M, Q>(&self, path: &str, query: &Q) -> MollieResult<List<M>>
    where
        M: Model,
        Q: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::GET, path).with_query(to_query(query)?);
        let body = self.send(request).await?.ok_or_else(|| empty_body(path))?;
        let page = List::from_value(body).map_err(|e| MollieError::MalformedResponse {
            status: None,
            message: format!("Could not parse the {} list returned by the API: {}", M::RESOURCE, e),
        })?;
        debug!("Received {} {} (count={})", page.len(), M::COLLECTION, page.count());
        Ok(page)
    }

    /// POST a JSON body, expecting an entity back
    pub async fn post<T, B>(&self, path: &str, body: &B) -> MollieResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::POST, path).with_body(to_body(body)?);
        let body = self.send(request).await?;
        decode(path, body)
    }

    /// POST a JSON body to an endpoint answering `204 No Content`
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> MollieResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::POST, path).with_body(to_body(body)?);
        self.send(request).await.map(|_| ())
    }

    /// PATCH a JSON body, expecting the updated entity back
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> MollieResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::PATCH, path).with_body(to_body(body)?);
        let body = self.send(request).await?;
        decode(path, body)
    }

    /// DELETE, expecting the entity in its new state back
    pub async fn delete<T, B>(&self, path: &str, body: &B) -> MollieResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = with_optional_body(ApiRequest::new(Method::DELETE, path), to_body(body)?);
        let body = self.send(request).await?;
        decode(path, body)
    }

    /// DELETE an entity at an endpoint answering `204 No Content`
    pub async fn delete_empty<B>(&self, path: &str, body: &B) -> MollieResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = with_optional_body(ApiRequest::new(Method::DELETE, path), to_body(body)?);
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: ApiRequest) -> MollieResult<Option<Value>> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.transport.execute(request).await?;
        normalize(response).map_err(|err| {
            error!(
                "Mollie API error: {} {} status={:?} message={}",
                method,
                path,
                err.status_code(),
                err.message()
            );
            err
        })
    }
}

/// Convert a raw response into its JSON body or a typed error.
///
/// - non-2xx: [`MollieError::Api`], preferring the body's `detail`
/// - 2xx with an empty body (`204 No Content`): `Ok(None)`
/// - 2xx with a body that is not JSON: [`MollieError::MalformedResponse`]
pub fn normalize(response: ApiResponse) -> MollieResult<Option<Value>> {
    if !(200..300).contains(&response.status) {
        return Err(MollieError::from_response(response.status, &response.body));
    }

    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|_| MollieError::MalformedResponse {
            status: Some(response.status),
            message: format!(
                "The API returned HTTP {} with a body that is not valid JSON",
                response.status
            ),
        })
}

fn decode<T: DeserializeOwned>(path: &str, body: Option<Value>) -> MollieResult<T> {
    let body = body.ok_or_else(|| empty_body(path))?;
    serde_json::from_value(body).map_err(|e| MollieError::MalformedResponse {
        status: None,
        message: format!("Could not parse the response of {}: {}", path, e),
    })
}

fn empty_body(path: &str) -> MollieError {
    MollieError::MalformedResponse {
        status: None,
        message: format!("The API returned an empty response for {}", path),
    }
}

fn with_optional_body(request: ApiRequest, body: Value) -> ApiRequest {
    match &body {
        Value::Object(map) if map.is_empty() => request,
        Value::Null => request,
        _ => request.with_body(body),
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> MollieResult<Value> {
    serde_json::to_value(body).map_err(|e| {
        MollieError::validation(format!("Could not serialize the request body: {}", e))
    })
}

/// Flatten parameters into query pairs.
///
/// Nested objects become `key[sub]=value`, arrays are joined with commas
/// and `null` values are dropped.
pub fn to_query<Q: Serialize + ?Sized>(params: &Q) -> MollieResult<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(|e| {
        MollieError::validation(format!("Could not serialize the query parameters: {}", e))
    })?;

    let mut pairs = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(&mut pairs, key, value);
            }
        }
        _ => {
            return Err(MollieError::validation(
                "Query parameters must serialize to an object",
            ))
        }
    }
    Ok(pairs)
}

fn flatten_into(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            let joined: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            if !joined.is_empty() {
                pairs.push((key, joined.join(",")));
            }
        }
        Value::Object(map) => {
            for (sub, value) in map {
                flatten_into(pairs, format!("{}[{}]", key, sub), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_success() {
        let body = normalize(ApiResponse {
            status: 200,
            body: r#"{"id":"tr_1"}"#.into(),
        })
        .unwrap();
        assert_eq!(body, Some(json!({ "id": "tr_1" })));
    }

    #[test]
    fn test_normalize_no_content() {
        let body = normalize(ApiResponse {
            status: 204,
            body: String::new(),
        })
        .unwrap();
        assert!(body.is_none());
    }

    #[test]
    fn test_normalize_api_error() {
        let err = normalize(ApiResponse {
            status: 404,
            body: r#"{"status":404,"title":"Not Found","detail":"No payment exists with token tr_1."}"#
                .into(),
        })
        .unwrap_err();

        assert_eq!(err.message(), "No payment exists with token tr_1.");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn test_normalize_malformed_success_body() {
        let err = normalize(ApiResponse {
            status: 200,
            body: "<html>".into(),
        })
        .unwrap_err();

        assert!(matches!(err, MollieError::MalformedResponse { status: Some(200), .. }));
        assert_eq!(
            err.message(),
            "The API returned HTTP 200 with a body that is not valid JSON"
        );
    }

    #[test]
    fn test_query_flattening() {
        let mut pairs = to_query(&json!({
            "amount": { "value": "10.00", "currency": "EUR" },
            "include": ["issuers", "pricing"],
            "testmode": true,
            "limit": 5,
            "locale": null
        }))
        .unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("amount[currency]".to_string(), "EUR".to_string()),
                ("amount[value]".to_string(), "10.00".to_string()),
                ("include".to_string(), "issuers,pricing".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("testmode".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_rejects_scalars() {
        assert!(to_query(&"plain").is_err());
        assert!(to_query(&()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_delete_body_dropped() {
        let request = with_optional_body(ApiRequest::new(Method::DELETE, "x"), json!({}));
        assert!(request.body.is_none());

        let request =
            with_optional_body(ApiRequest::new(Method::DELETE, "x"), json!({ "testmode": true }));
        assert_eq!(request.body, Some(json!({ "testmode": true })));
    }
}
