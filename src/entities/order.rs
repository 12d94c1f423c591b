//! Orders.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// A user's order for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,
    pub display_name: String,

    pub product_name: String,
    pub user: String,
    pub payment: String,
    pub price: f64,
    pub currency: String,
    pub state: String,
    pub message: String,

    pub start_time: String,
    pub end_time: String,
}

impl_entity!(Order, "order", "orders");

impl Client {
    pub fn orders(&self) -> EntityApi<'_, Order> {
        self.entities()
    }
}

impl EntityApi<'_, Order> {
    /// Cancel an unpaid order.
    pub async fn cancel(&self, order: &Order) -> SdkResult<bool> {
        self.modify("cancel", order, &[]).await
    }
}
