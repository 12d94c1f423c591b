//! Balance transactions.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A movement of money recorded against a user or the organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,

    pub provider: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub product_name: String,
    pub product_display_name: String,
    pub detail: String,
    pub tag: String,
    pub currency: String,
    pub amount: f64,
    pub return_url: String,

    pub user: String,
    pub application: String,
    pub payment: String,

    pub state: String,
}

impl_entity!(Transaction, "transaction", "transactions");

impl Client {
    pub fn transactions(&self) -> EntityApi<'_, Transaction> {
        self.entities()
    }
}
