//! Third-party providers (OAuth, email, SMS, storage, payment, ...).

use super::nullable;
use crate::client::{Client, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Connection settings for an external service the server delegates to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Provider {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub sub_type: String,
    pub method: String,
    pub client_id: String,
    pub client_secret: String,
    pub client_id2: String,
    pub client_secret2: String,
    pub cert: String,
    pub custom_auth_url: String,
    pub custom_token_url: String,
    pub custom_user_info_url: String,
    pub custom_logo: String,
    pub scopes: String,
    #[serde(deserialize_with = "nullable")]
    pub user_mapping: HashMap<String, String>,

    pub host: String,
    pub port: i64,
    pub disable_ssl: bool,
    pub title: String,
    pub content: String,
    pub receiver: String,

    pub region_id: String,
    pub sign_name: String,
    pub template_code: String,
    pub app_id: String,

    pub endpoint: String,
    pub intranet_endpoint: String,
    pub domain: String,
    pub bucket: String,
    pub path_prefix: String,

    pub metadata: String,
    #[serde(rename = "idP")]
    pub idp: String,
    pub issuer_url: String,
    pub enable_sign_authn_request: bool,

    pub provider_url: String,
}

impl_entity!(Provider, "provider", "providers");

impl Client {
    pub fn providers(&self) -> EntityApi<'_, Provider> {
        self.entities()
    }
}

impl EntityApi<'_, Provider> {
    /// Providers of every organization.
    pub async fn global(&self) -> SdkResult<Vec<Provider>> {
        self.list_by("global-providers", &Query::new()).await
    }
}
