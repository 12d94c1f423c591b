//! LDAP servers.

use super::nullable;
use crate::client::Client;
use crate::crud::{Entity, EntityApi};
use serde::{Deserialize, Serialize};

/// An LDAP directory users are synchronised from.
///
/// LDAP records have no `name`; they are addressed by `{owner}/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ldap {
    pub id: String,
    pub owner: String,
    pub created_time: String,

    pub server_name: String,
    pub host: String,
    pub port: i64,
    pub enable_ssl: bool,
    pub username: String,
    pub password: String,
    pub base_dn: String,
    pub filter: String,
    #[serde(deserialize_with = "nullable")]
    pub filter_fields: Vec<String>,

    pub auto_sync: i64,
    pub last_sync: String,
}

impl Entity for Ldap {
    const SINGULAR: &'static str = "ldap";
    const PLURAL: &'static str = "ldaps";

    fn owner(&self) -> &str {
        &self.owner
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }
}

impl Client {
    pub fn ldaps(&self) -> EntityApi<'_, Ldap> {
        self.entities()
    }
}
