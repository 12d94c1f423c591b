//! Payments.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// A payment made through a payment provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,

    pub provider: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub product_name: String,
    pub product_display_name: String,
    pub detail: String,
    pub tag: String,
    pub currency: String,
    pub price: f64,
    pub return_url: String,

    pub user: String,
    pub person_name: String,
    pub person_id_card: String,
    pub person_email: String,
    pub person_phone: String,

    pub invoice_type: String,
    pub invoice_title: String,
    pub invoice_tax_id: String,
    pub invoice_remark: String,
    pub invoice_url: String,

    pub out_order_id: String,
    pub pay_url: String,
    pub state: String,
    pub message: String,
}

impl_entity!(Payment, "payment", "payments");

impl Client {
    pub fn payments(&self) -> EntityApi<'_, Payment> {
        self.entities()
    }
}

impl EntityApi<'_, Payment> {
    /// Tell the server the provider has settled this payment.
    pub async fn notify(&self, payment: &Payment) -> SdkResult<bool> {
        self.modify("notify", payment, &[]).await
    }

    /// Ask the server to issue an invoice for this payment.
    pub async fn invoice(&self, payment: &Payment) -> SdkResult<bool> {
        self.modify("invoice", payment, &[]).await
    }
}
