//! Policy storage adapters.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// Database connection holding policy rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Adapter {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    #[serde(rename = "type")]
    pub adapter_type: String,
    pub database_type: String,
    pub host: String,
    pub port: i64,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: String,
    pub table_name_prefix: String,

    pub is_enabled: bool,
}

impl_entity!(Adapter, "adapter", "adapters");

impl Client {
    pub fn adapters(&self) -> EntityApi<'_, Adapter> {
        self.entities()
    }
}
