//! Audit records.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// One audited API call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub organization: String,
    pub client_ip: String,
    pub user: String,
    pub method: String,
    pub request_uri: String,
    pub action: String,

    pub is_triggered: bool,
}

impl_entity!(Record, "record", "records");

impl Client {
    pub fn records(&self) -> EntityApi<'_, Record> {
        self.entities()
    }
}
