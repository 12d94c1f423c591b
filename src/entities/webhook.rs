//! Webhooks.

use super::nullable;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// Extra header sent with each webhook delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

/// Endpoint notified when selected events happen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub organization: String,
    pub url: String,
    pub method: String,
    pub content_type: String,
    #[serde(deserialize_with = "nullable")]
    pub headers: Vec<WebhookHeader>,
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<String>,
    pub is_user_extended: bool,
    pub is_enabled: bool,
}

impl_entity!(Webhook, "webhook", "webhooks");

impl Client {
    pub fn webhooks(&self) -> EntityApi<'_, Webhook> {
        self.entities()
    }
}
