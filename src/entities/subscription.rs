//! Subscriptions.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A user's subscription to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscription {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,

    pub start_time: String,
    pub end_time: String,
    pub duration: i64,
    pub description: String,

    pub user: String,
    pub pricing: String,
    pub plan: String,
    pub payment: String,

    pub state: String,
}

impl_entity!(Subscription, "subscription", "subscriptions");

impl Client {
    pub fn subscriptions(&self) -> EntityApi<'_, Subscription> {
        self.entities()
    }
}
