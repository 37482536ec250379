//! # Client Configuration
//!
//! Configuration management for the Mollie client.
//! Values are set explicitly, loaded from environment variables, or read
//! from a TOML document.

use mollie_core::{MollieError, MollieResult};
use reqwest::Url;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;

/// Production API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.mollie.com/v2/";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential used to authenticate against the API
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Website profile API key (`test_...` or `live_...`)
    ApiKey(String),
    /// Organization access token (`access_...`) or OAuth token
    AccessToken(String),
}

impl Credential {
    /// Bearer token sent in the `Authorization` header
    pub fn token(&self) -> &str {
        match self {
            Credential::ApiKey(key) | Credential::AccessToken(key) => key,
        }
    }

    /// Check if using a test API key
    pub fn is_test_mode(&self) -> bool {
        matches!(self, Credential::ApiKey(key) if key.starts_with("test_"))
    }

    /// Check if using a live API key
    pub fn is_live_mode(&self) -> bool {
        matches!(self, Credential::ApiKey(key) if key.starts_with("live_"))
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token())
    }

    fn validate(&self) -> MollieResult<()> {
        match self {
            Credential::ApiKey(key) => {
                let rest = key
                    .strip_prefix("test_")
                    .or_else(|| key.strip_prefix("live_"))
                    .ok_or_else(|| {
                        MollieError::Configuration(
                            "The API key must start with test_ or live_".to_string(),
                        )
                    })?;
                if rest.len() < 30 || !rest.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Err(MollieError::Configuration(
                        "The API key must be followed by at least 30 alphanumeric characters"
                            .to_string(),
                    ));
                }
                Ok(())
            }
            Credential::AccessToken(token) => {
                if token.trim().is_empty() || token.chars().any(char::is_whitespace) {
                    return Err(MollieError::Configuration(
                        "The access token is empty or contains whitespace".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, token) = match self {
            Credential::ApiKey(key) => ("ApiKey", key),
            Credential::AccessToken(token) => ("AccessToken", token),
        };
        let visible: String = token.chars().take(5).collect();
        write!(f, "{}({}***)", kind, visible)
    }
}

/// Mollie API client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key or access token
    pub credential: Credential,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,

    /// Appended to the `User-Agent`, e.g. `"MyPlatform/1.2"`
    pub version_strings: Vec<String>,

    /// PEM encoded certificates trusted in addition to the bundled roots
    pub root_certificates: Vec<Vec<u8>>,
}

/// On-disk form of the configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    headers: BTreeMap<String, String>,
    #[serde(default)]
    version_strings: Vec<String>,
}

impl ClientConfig {
    /// Create config with an explicit credential.
    ///
    /// Keys starting with `access_` are treated as access tokens, anything
    /// else as an API key.
    pub fn new(credential: impl Into<String>) -> Self {
        let credential = credential.into();
        let credential = if credential.starts_with("access_") {
            Credential::AccessToken(credential)
        } else {
            Credential::ApiKey(credential)
        };
        Self::with_credential(credential)
    }

    /// Create config for an OAuth access token, whatever its shape
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self::with_credential(Credential::AccessToken(token.into()))
    }

    fn with_credential(credential: Credential) -> Self {
        Self {
            credential,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            headers: BTreeMap::new(),
            version_strings: Vec::new(),
            root_certificates: Vec::new(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads one of:
    /// - `MOLLIE_API_KEY`
    /// - `MOLLIE_ACCESS_TOKEN`
    ///
    /// and optionally `MOLLIE_API_ENDPOINT` and `MOLLIE_TIMEOUT_SECS`.
    pub fn from_env() -> MollieResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("MOLLIE_API_KEY").ok();
        let access_token = env::var("MOLLIE_ACCESS_TOKEN").ok();

        let mut config = match (api_key, access_token) {
            (Some(key), None) => Self::new(key),
            (None, Some(token)) => Self::with_access_token(token),
            (Some(_), Some(_)) => {
                return Err(MollieError::Configuration(
                    "Set only one of MOLLIE_API_KEY and MOLLIE_ACCESS_TOKEN".to_string(),
                ))
            }
            (None, None) => {
                return Err(MollieError::Configuration(
                    "MOLLIE_API_KEY or MOLLIE_ACCESS_TOKEN not set".to_string(),
                ))
            }
        };

        if let Ok(url) = env::var("MOLLIE_API_ENDPOINT") {
            config.api_base_url = url;
        }

        if let Ok(timeout) = env::var("MOLLIE_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                MollieError::Configuration(format!(
                    "MOLLIE_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    timeout
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML document:
    ///
    /// ```toml
    /// api_key = "test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM"
    /// timeout_secs = 10
    /// version_strings = ["MyPlatform/1.2"]
    ///
    /// [headers]
    /// X-Request-Source = "checkout"
    /// ```
    pub fn from_toml_str(document: &str) -> MollieResult<Self> {
        let file: FileConfig = toml::from_str(document)
            .map_err(|e| MollieError::Configuration(format!("Invalid TOML config: {}", e)))?;

        let mut config = match (file.api_key, file.access_token) {
            (Some(key), None) => Self::new(key),
            (None, Some(token)) => Self::with_access_token(token),
            _ => {
                return Err(MollieError::Configuration(
                    "Exactly one of api_key and access_token must be set".to_string(),
                ))
            }
        };

        if let Some(url) = file.api_base_url {
            config.api_base_url = url;
        }
        if let Some(timeout) = file.timeout_secs {
            config.timeout_secs = timeout;
        }
        config.headers = file.headers;
        config.version_strings = file.version_strings;

        config.validate()?;
        Ok(config)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Builder: send an extra header with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builder: append a version string to the `User-Agent`
    pub fn with_version_string(mut self, version: impl Into<String>) -> Self {
        self.version_strings.push(version.into());
        self
    }

    /// Builder: trust an extra PEM encoded root certificate
    pub fn with_root_certificate(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.root_certificates.push(pem.into());
        self
    }

    /// `User-Agent` header value
    pub fn user_agent(&self) -> String {
        let mut agent = format!("mollie-rs/{}", env!("CARGO_PKG_VERSION"));
        for version in &self.version_strings {
            agent.push(' ');
            agent.push_str(version);
        }
        agent
    }

    /// Parsed base URL, always ending in `/` so paths join below it
    pub fn base_url(&self) -> MollieResult<Url> {
        let mut raw = self.api_base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw).map_err(|e| {
            MollieError::Configuration(format!("Invalid API base URL {:?}: {}", raw, e))
        })?;

        let loopback = matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        );
        match url.scheme() {
            "https" => Ok(url),
            "http" if loopback => Ok(url),
            _ => Err(MollieError::Configuration(format!(
                "The API base URL must use HTTPS, got {:?}",
                raw
            ))),
        }
    }

    /// Validate the whole configuration; fails fast before any resource
    /// is built.
    pub fn validate(&self) -> MollieResult<()> {
        self.credential.validate()?;
        self.base_url()?;

        if self.timeout_secs == 0 {
            return Err(MollieError::Configuration(
                "The timeout must be at least one second".to_string(),
            ));
        }

        for version in &self.version_strings {
            if version.trim().is_empty() || version.chars().any(char::is_whitespace) {
                return Err(MollieError::Configuration(format!(
                    "Invalid version string {:?}",
                    version
                )));
            }
        }
        Ok(())
    }
}
