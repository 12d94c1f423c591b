//! Permissions and permission lookups.

use super::nullable;
use crate::client::{Client, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// Grants actions on resources to users, groups or roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Permission {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    #[serde(deserialize_with = "nullable")]
    pub users: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub domains: Vec<String>,

    pub model: String,
    pub adapter: String,
    pub resource_type: String,
    #[serde(deserialize_with = "nullable")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub actions: Vec<String>,
    pub effect: String,
    pub is_enabled: bool,

    pub submitter: String,
    pub approver: String,
    pub approve_time: String,
    pub state: String,
}

impl_entity!(Permission, "permission", "permissions");

impl Client {
    pub fn permissions(&self) -> EntityApi<'_, Permission> {
        self.entities()
    }
}

impl EntityApi<'_, Permission> {
    /// Permissions granted to a role of the configured organization.
    pub async fn by_role(&self, role_name: &str) -> SdkResult<Vec<Permission>> {
        let id = format!("{}/{}", self.client().organization_name(), role_name);
        self.list_by("permissions-by-role", &Query::new().param("id", id))
            .await
    }

    /// Permissions submitted by the authenticated account.
    pub async fn by_submitter(&self) -> SdkResult<Vec<Permission>> {
        self.list_by("permissions-by-submitter", &Query::new()).await
    }
}
