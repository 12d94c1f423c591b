//! Pricing pages.

use super::nullable;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A set of plans offered together for one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    #[serde(deserialize_with = "nullable")]
    pub plans: Vec<String>,
    pub is_enabled: bool,
    pub trial_duration: i64,
    pub application: String,
}

impl_entity!(Pricing, "pricing", "pricings");

impl Client {
    pub fn pricings(&self) -> EntityApi<'_, Pricing> {
        self.entities()
    }
}
