//! Record types stored by the identity server.
//!
//! Every record mirrors the server's JSON schema (camelCase keys). Fields the
//! server omits fall back to their defaults and `null` collections decode as
//! empty, so records from older or newer servers still decode.
//!
//! Each kind gets an accessor on [`Client`](crate::Client), e.g.
//! [`Client::users`](crate::Client::users), returning the generic
//! [`EntityApi`](crate::crud::EntityApi) plus any kind-specific calls.

pub mod adapter;
pub mod application;
pub mod cert;
pub mod enforcer;
pub mod group;
pub mod invitation;
pub mod ldap;
pub mod model;
pub mod order;
pub mod organization;
pub mod payment;
pub mod permission;
pub mod plan;
pub mod pricing;
pub mod product;
pub mod provider;
pub mod record;
pub mod resource;
pub mod role;
pub mod session;
pub mod subscription;
pub mod syncer;
pub mod token;
pub mod transaction;
pub mod user;
pub mod webhook;

pub use adapter::Adapter;
pub use application::{Application, ProviderItem, SignupItem};
pub use cert::Cert;
pub use enforcer::Enforcer;
pub use group::Group;
pub use invitation::Invitation;
pub use ldap::Ldap;
pub use model::Model;
pub use order::Order;
pub use organization::{AccountItem, Organization};
pub use payment::Payment;
pub use permission::Permission;
pub use plan::Plan;
pub use pricing::Pricing;
pub use product::Product;
pub use provider::Provider;
pub use record::Record;
pub use resource::{Resource, UploadedResource};
pub use role::Role;
pub use session::Session;
pub use subscription::Subscription;
pub use syncer::{Syncer, TableColumn};
pub use token::Token;
pub use transaction::Transaction;
pub use user::User;
pub use webhook::{Webhook, WebhookHeader};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
