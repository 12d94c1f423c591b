//! Client configuration.
//!
//! [`ClientConfig`] carries everything needed to talk to one identity server
//! on behalf of one application: the endpoint, the application's client
//! credentials, the certificate used to verify issued tokens, and the
//! organization and application the client is scoped to.
//!
//! No validation is performed beyond trimming a trailing `/` from the
//! endpoint. A malformed endpoint surfaces as a request error later.
//!
//! # Loading from the environment
//!
//! ```rust,no_run
//! use casdoor_sdk::ClientConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! println!("talking to {}", config.endpoint);
//! # Ok(())
//! # }
//! ```

use crate::error::{SdkError, SdkResult};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Environment variable holding the server endpoint.
pub const ENV_ENDPOINT: &str = "CASDOOR_ENDPOINT";
/// Environment variable holding the application client id.
pub const ENV_CLIENT_ID: &str = "CASDOOR_CLIENT_ID";
/// Environment variable holding the application client secret.
pub const ENV_CLIENT_SECRET: &str = "CASDOOR_CLIENT_SECRET";
/// Environment variable holding the PEM certificate text.
pub const ENV_CERTIFICATE: &str = "CASDOOR_CERTIFICATE";
/// Environment variable holding a path to the PEM certificate.
pub const ENV_CERTIFICATE_PATH: &str = "CASDOOR_CERTIFICATE_PATH";
/// Environment variable holding the organization name.
pub const ENV_ORGANIZATION_NAME: &str = "CASDOOR_ORGANIZATION_NAME";
/// Environment variable holding the application name.
pub const ENV_APPLICATION_NAME: &str = "CASDOOR_APPLICATION_NAME";

/// Connection and scoping settings for a [`Client`](crate::Client).
///
/// The client secret is held as a [`SecretString`]: it is redacted from
/// `Debug` output and skipped when the configuration is serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the identity server, e.g. `https://door.example.com`.
    pub endpoint: String,
    /// OAuth client id of the application.
    pub client_id: String,
    /// OAuth client secret of the application.
    #[serde(skip_serializing, deserialize_with = "secret_string")]
    pub client_secret: SecretString,
    /// PEM encoded certificate (or public key) used to verify tokens.
    #[serde(default)]
    pub certificate: String,
    /// Organization every mutation is scoped to.
    pub organization_name: String,
    /// Application the client acts for.
    #[serde(default)]
    pub application_name: String,
}

impl ClientConfig {
    /// Create a configuration from its parts.
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        certificate: impl Into<String>,
        organization_name: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            certificate: certificate.into(),
            organization_name: organization_name.into(),
            application_name: application_name.into(),
        }
        .normalized()
    }

    /// Load the configuration from `CASDOOR_*` environment variables.
    ///
    /// The certificate is taken from `CASDOOR_CERTIFICATE`, or read from the
    /// file named by `CASDOOR_CERTIFICATE_PATH`. It may be absent, in which
    /// case token verification fails later.
    pub fn from_env() -> SdkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> SdkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| SdkError::config(format!("{key} is not set")))
        };

        let certificate = match (lookup(ENV_CERTIFICATE), lookup(ENV_CERTIFICATE_PATH)) {
            (Some(pem), _) => pem,
            (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
                SdkError::config(format!("cannot read certificate from '{path}': {e}"))
            })?,
            (None, None) => String::new(),
        };

        Ok(Self::new(
            required(ENV_ENDPOINT)?,
            required(ENV_CLIENT_ID)?,
            required(ENV_CLIENT_SECRET)?,
            certificate,
            required(ENV_ORGANIZATION_NAME)?,
            lookup(ENV_APPLICATION_NAME).unwrap_or_default(),
        ))
    }

    /// Endpoint without a trailing slash.
    pub(crate) fn normalized(mut self) -> Self {
        if self.endpoint.ends_with('/') {
            self.endpoint.pop();
        }
        self
    }
}

fn secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
