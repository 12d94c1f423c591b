//! Subscription plans.

use super::nullable;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A priced subscription period granting a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plan {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    pub price: f64,
    pub currency: String,
    pub period: String,
    pub product: String,
    #[serde(deserialize_with = "nullable")]
    pub payment_providers: Vec<String>,
    pub is_enabled: bool,

    pub role: String,
}

impl_entity!(Plan, "plan", "plans");

impl Client {
    pub fn plans(&self) -> EntityApi<'_, Plan> {
        self.entities()
    }
}
