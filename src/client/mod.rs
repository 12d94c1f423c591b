//! The SDK client.
//!
//! A [`Client`] owns one [`ClientConfig`], one HTTP transport and a map of
//! custom headers. It is cheap to clone: clones share the same state, so a
//! single client can serve many tasks at once. The configuration is
//! read-only after construction. The custom header map is the only mutable
//! state and sits behind an async `RwLock`.
//!
//! # Example
//!
//! ```rust,no_run
//! use casdoor_sdk::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let certificate = std::fs::read_to_string("token_jwt_key.pem")?;
//! let client = Client::new(
//!     "http://localhost:8000",
//!     "client-id",
//!     "client-secret",
//!     certificate,
//!     "built-in",
//!     "app-built-in",
//! );
//!
//! client.set_custom_header("X-Request-Source", "batch-import").await;
//! let users = client.users().list().await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

pub mod envelope;
pub mod transport;

pub use envelope::Response;
pub use transport::{PostBody, Query};

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use reqwest::RequestBuilder;
use secrecy::ExposeSecret;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Handle to one identity server, scoped to one organization and application.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: ClientConfig,
    http: reqwest::Client,
    custom_headers: RwLock<HashMap<String, String>>,
}

impl Client {
    /// Create a client from its configuration parts.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        certificate: impl Into<String>,
        organization_name: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        Self::from_config(ClientConfig::new(
            endpoint,
            client_id,
            client_secret,
            certificate,
            organization_name,
            application_name,
        ))
    }

    /// Create a client with a default transport.
    pub fn from_config(config: ClientConfig) -> Self {
        Self::builder(config).build()
    }

    /// Start building a client with a custom transport or initial headers.
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Base URL of the identity server.
    pub fn endpoint(&self) -> &str {
        &self.inner.config.endpoint
    }

    /// Organization every mutation is scoped to.
    pub fn organization_name(&self) -> &str {
        &self.inner.config.organization_name
    }

    /// Application the client acts for.
    pub fn application_name(&self) -> &str {
        &self.inner.config.application_name
    }

    /// The underlying HTTP transport.
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Add or replace a header sent with every request.
    pub async fn set_custom_header(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut headers = self.inner.custom_headers.write().await;
        headers.insert(name.into(), value.into());
    }

    /// Stop sending a custom header, returning its previous value.
    pub async fn remove_custom_header(&self, name: &str) -> Option<String> {
        let mut headers = self.inner.custom_headers.write().await;
        headers.remove(name)
    }

    /// Snapshot of the custom headers.
    pub async fn custom_headers(&self) -> HashMap<String, String> {
        self.inner.custom_headers.read().await.clone()
    }

    /// Attach basic auth credentials and custom headers to a request.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> SdkResult<RequestBuilder> {
        let mut request = request.basic_auth(
            &self.inner.config.client_id,
            Some(self.inner.config.client_secret.expose_secret()),
        );

        let headers = self.inner.custom_headers.read().await;
        for (name, value) in headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| SdkError::InvalidHeader { name: name.clone() })?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| SdkError::InvalidHeader { name: name.clone() })?;
            request = request.header(header_name, header_value);
        }

        Ok(request)
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
    headers: HashMap<String, String>,
}

impl ClientBuilder {
    /// Start from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: None,
            headers: HashMap::new(),
        }
    }

    /// Use a caller supplied transport, e.g. one configured with a timeout.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Send a header with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        Client {
            inner: Arc::new(ClientInner {
                config: self.config.normalized(),
                http: self.http.unwrap_or_default(),
                custom_headers: RwLock::new(self.headers),
            }),
        }
    }
}
