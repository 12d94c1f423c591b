//! User syncers.

use super::nullable;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// Mapping of one external table column onto a user field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub casdoor_name: String,
    pub is_key: bool,
    pub is_hashed: bool,
    #[serde(deserialize_with = "nullable")]
    pub values: Vec<String>,
}

/// Periodically imports users from an external database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Syncer {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub organization: String,
    #[serde(rename = "type")]
    pub syncer_type: String,

    pub database_type: String,
    pub ssl_mode: String,
    pub host: String,
    pub port: i64,
    pub user: String,
    pub password: String,
    pub database: String,
    pub table: String,
    #[serde(deserialize_with = "nullable")]
    pub table_columns: Vec<TableColumn>,
    pub affiliation_table: String,
    pub avatar_base_url: String,
    pub error_text: String,
    pub sync_interval: i64,
    pub is_read_only: bool,
    pub is_enabled: bool,
}

impl_entity!(Syncer, "syncer", "syncers");

impl Client {
    pub fn syncers(&self) -> EntityApi<'_, Syncer> {
        self.entities()
    }
}
