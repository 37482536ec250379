//! # Transport
//!
//! The seam between resources and the wire. Resources build [`ApiRequest`]s;
//! a [`Transport`] turns each into exactly one HTTP round trip.
//!
//! [`HttpTransport`] is the production implementation on top of
//! `reqwest`. It owns the connection pool and default headers, and is the
//! only state shared between resources.

use crate::config::ClientConfig;
use async_trait::async_trait;
use mollie_core::{MollieError, MollieResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, e.g. `payments/tr_WDqYK6vllg/refunds`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Builder: set the query pairs
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Builder: set the JSON body
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Executes API requests.
///
/// Implementations perform a single attempt per call and never retry.
/// Failures to obtain a response at all map to [`MollieError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> MollieResult<ApiResponse>;
}

/// Type alias for a shared transport (dynamic dispatch)
pub type BoxedTransport = Arc<dyn Transport>;

/// `reqwest` backed transport
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build the HTTP client from validated configuration.
    ///
    /// Every request carries `Authorization`, `User-Agent`,
    /// `Content-Type: application/json` and the configured extra headers;
    /// `reqwest` adds `Accept-Encoding: gzip` and decodes compressed bodies.
    pub fn new(config: &ClientConfig) -> MollieResult<Self> {
        config.validate()?;
        let base_url = config.base_url()?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&config.credential.auth_header()).map_err(|_| {
            MollieError::Configuration("The credential contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                MollieError::Configuration(format!("Invalid header name {:?}", name))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                MollieError::Configuration(format!("Invalid value for header {:?}", name))
            })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_secs));

        for pem in &config.root_certificates {
            let certificate = reqwest::Certificate::from_pem(pem).map_err(|e| {
                MollieError::Configuration(format!("Invalid root certificate: {}", e))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let client = builder.build().map_err(|e| {
            MollieError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL for a request
    pub fn url_for(&self, request: &ApiRequest) -> MollieResult<Url> {
        let mut url = self.base_url.join(&request.path).map_err(|e| {
            MollieError::validation(format!("Invalid request path {:?}: {}", request.path, e))
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> MollieResult<ApiResponse> {
        let url = self.url_for(&request)?;
        debug!("Sending Mollie API request: {} {}", request.method, url);

        let mut builder = self.client.request(request.method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        debug!("Mollie API responded: status={}, bytes={}", status, body.len());
        Ok(ApiResponse { status, body })
    }
}

/// Describe a `reqwest` failure without leaking the raw error type
fn transport_error(error: reqwest::Error) -> MollieError {
    let message = if error.is_timeout() {
        "The request to the Mollie API timed out".to_string()
    } else if error.is_connect() {
        format!("Could not connect to the Mollie API: {}", error)
    } else {
        format!("The request to the Mollie API failed: {}", error)
    };
    MollieError::Transport(message)
}
