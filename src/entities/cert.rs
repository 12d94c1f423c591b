//! Certificates.

use crate::client::{Client, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// A signing certificate and its key pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cert {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub scope: String,
    #[serde(rename = "type")]
    pub cert_type: String,
    pub crypto_algorithm: String,
    pub bit_size: i64,
    pub expire_in_years: i64,

    pub certificate: String,
    pub private_key: String,
    pub authority_public_key: String,
    pub authority_root_public_key: String,
}

impl_entity!(Cert, "cert", "certs");

impl Client {
    pub fn certs(&self) -> EntityApi<'_, Cert> {
        self.entities()
    }
}

impl EntityApi<'_, Cert> {
    /// Certificates of every organization.
    pub async fn global(&self) -> SdkResult<Vec<Cert>> {
        self.list_by("global-certs", &Query::new()).await
    }
}
