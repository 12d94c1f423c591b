//! Enforcers.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// Binds a model to the adapter holding its policy rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Enforcer {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,
    pub display_name: String,
    pub description: String,
    pub model: String,
    pub adapter: String,
    pub is_enabled: bool,
}

impl_entity!(Enforcer, "enforcer", "enforcers");

impl Client {
    pub fn enforcers(&self) -> EntityApi<'_, Enforcer> {
        self.entities()
    }
}
