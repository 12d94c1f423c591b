//! Access-control models.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A policy model definition in Casbin's model syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Model {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,
    pub display_name: String,
    pub description: String,
    pub model_text: String,
    pub is_enabled: bool,
}

impl_entity!(Model, "model", "models");

impl Client {
    pub fn models(&self) -> EntityApi<'_, Model> {
        self.entities()
    }
}
