//! Process-wide default client.
//!
//! Applications talking to a single organization can initialize one client at
//! startup and use the free functions of this module instead of passing a
//! [`Client`] around. The global client must be initialized exactly once,
//! before any concurrent use. A second initialization is rejected and leaves
//! the first client in place.
//!
//! Multi-tenant applications should construct one [`Client`] per
//! organization instead.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use casdoor_sdk::global;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! global::init_config(
//!     "http://localhost:8000",
//!     "client-id",
//!     "client-secret",
//!     std::fs::read_to_string("token_jwt_key.pem")?,
//!     "built-in",
//!     "app-built-in",
//! )?;
//!
//! let users = global::get_users().await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

use crate::auth::{Claims, OAuthToken};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::entities::User;
use crate::error::{SdkError, SdkResult};
use crate::policy::{CasbinRequest, EnforceTarget};
use log::debug;
use std::sync::OnceLock;

static GLOBAL_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the global client from its configuration parts.
pub fn init_config(
    endpoint: impl Into<String>,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
    certificate: impl Into<String>,
    organization_name: impl Into<String>,
    application_name: impl Into<String>,
) -> SdkResult<()> {
    init_with(ClientConfig::new(
        endpoint,
        client_id,
        client_secret,
        certificate,
        organization_name,
        application_name,
    ))
}

/// Initialize the global client from a configuration.
pub fn init_with(config: ClientConfig) -> SdkResult<()> {
    init_client(Client::from_config(config))
}

/// Install an already built client as the global client.
pub fn init_client(client: Client) -> SdkResult<()> {
    debug!("initializing global client for {}", client.endpoint());
    GLOBAL_CLIENT
        .set(client)
        .map_err(|_| SdkError::config("global client is already initialized"))
}

/// The global client.
pub fn client() -> SdkResult<&'static Client> {
    GLOBAL_CLIENT
        .get()
        .ok_or_else(|| SdkError::config("global client is not initialized"))
}

pub async fn get_users() -> SdkResult<Vec<User>> {
    client()?.users().list().await
}

pub async fn get_user(name: &str) -> SdkResult<Option<User>> {
    client()?.users().get(name).await
}

pub async fn add_user(user: &User) -> SdkResult<bool> {
    client()?.users().add(user).await
}

pub async fn update_user(user: &User) -> SdkResult<bool> {
    client()?.users().update(user).await
}

pub async fn delete_user(user: &User) -> SdkResult<bool> {
    client()?.users().delete(user).await
}

pub async fn get_oauth_token(code: &str, state: &str) -> SdkResult<OAuthToken> {
    client()?.get_oauth_token(code, state).await
}

pub async fn refresh_oauth_token(refresh_token: &str) -> SdkResult<OAuthToken> {
    client()?.refresh_oauth_token(refresh_token).await
}

pub fn parse_jwt_token(token: &str) -> SdkResult<Claims> {
    client()?.parse_jwt_token(token)
}

pub async fn enforce(target: &EnforceTarget, request: &CasbinRequest) -> SdkResult<bool> {
    client()?.enforce(target, request).await
}

pub async fn batch_enforce(target: &EnforceTarget, requests: &[CasbinRequest]) -> SdkResult<Vec<bool>> {
    client()?.batch_enforce(target, requests).await
}
