//! Products and purchases.

use super::nullable;
use super::provider::Provider;
use crate::client::{Client, PostBody, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// Something the organization sells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub image: String,
    pub detail: String,
    pub description: String,
    pub tag: String,
    pub currency: String,
    pub price: f64,
    pub quantity: i64,
    pub sold: i64,
    #[serde(deserialize_with = "nullable")]
    pub providers: Vec<String>,
    pub return_url: String,

    pub state: String,

    #[serde(deserialize_with = "nullable")]
    pub provider_objs: Vec<Provider>,
}

impl_entity!(Product, "product", "products");

impl Client {
    pub fn products(&self) -> EntityApi<'_, Product> {
        self.entities()
    }
}

impl EntityApi<'_, Product> {
    /// Start a purchase of `name` through a payment provider.
    ///
    /// The returned product carries whatever the server attached to the
    /// purchase, e.g. the payment URL.
    pub async fn buy(&self, name: &str, provider_name: &str) -> SdkResult<Product> {
        let query = Query::new()
            .param("id", format!("{}/{}", self.client().organization_name(), name))
            .param("providerName", provider_name);
        let response = self
            .client()
            .do_post("buy-product", &query, PostBody::Json(Vec::new()))
            .await?;
        response.decode_data()
    }
}
