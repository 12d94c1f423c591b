//! Async client SDK for the Casdoor identity and access management API.
//!
//! Wraps the server's HTTP+JSON API in typed calls: CRUD for users,
//! organizations, applications, roles, permissions and the other records the
//! server keeps; OAuth2 code exchange and refresh; JWT verification; policy
//! enforcement; and a few one-shot helpers such as email and SMS dispatch.
//!
//! # Core Components
//!
//! - [`Client`] - Connection to one server, scoped to one organization
//! - [`EntityApi`] - Generic CRUD operations, e.g. [`Client::users`]
//! - [`Client::parse_jwt_token`] - Token verification against the configured certificate
//! - [`Client::enforce`] - Policy evaluation forwarded to the server
//! - [`global`] - Optional process-wide default client
//!
//! Every call is a single HTTP round trip. Nothing is cached or retried, and
//! errors reach the caller unchanged. A server-side failure surfaces as
//! [`SdkError::Status`] whose message is exactly the server's message.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casdoor_sdk::{Client, User};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     "http://localhost:8000",
//!     "client-id",
//!     "client-secret",
//!     std::fs::read_to_string("token_jwt_key.pem")?,
//!     "built-in",
//!     "app-built-in",
//! );
//!
//! let user = User {
//!     name: "alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     ..User::default()
//! };
//! client.users().add(&user).await?;
//!
//! match client.users().get("alice").await? {
//!     Some(found) => println!("{} <{}>", found.name, found.email),
//!     None => println!("not found"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod crud;
pub mod entities;
pub mod error;
pub mod global;
pub mod messaging;
pub mod policy;

// Re-export commonly used types for convenience
pub use client::{Client, ClientBuilder, PostBody, Query, Response};
pub use config::ClientConfig;
pub use crud::{Entity, EntityApi};
pub use error::{SdkError, SdkResult};

pub use auth::{Audience, Claims, OAuthToken, RegisteredClaims, SigningMethod};
pub use policy::{CasbinRequest, CasbinRule, EnforceTarget};

// Record types
pub use entities::{
    AccountItem, Adapter, Application, Cert, Enforcer, Group, Invitation, Ldap, Model, Order,
    Organization, Payment, Permission, Plan, Pricing, Product, Provider, ProviderItem, Record,
    Resource, Role, Session, SignupItem, Subscription, Syncer, TableColumn, Token, Transaction,
    UploadedResource, User, Webhook, WebhookHeader,
};
