//! Organizations.

use super::nullable;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// Visibility and edit rules for one user profile field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountItem {
    pub name: String,
    pub visible: bool,
    pub view_rule: String,
    pub modify_rule: String,
}

/// A tenant owning users, applications and policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub website_url: String,
    pub favicon: String,
    pub password_type: String,
    pub password_salt: String,
    #[serde(deserialize_with = "nullable")]
    pub password_options: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub country_codes: Vec<String>,
    pub default_avatar: String,
    pub default_application: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub languages: Vec<String>,
    pub master_password: String,
    pub init_score: i64,
    pub enable_soft_deletion: bool,
    pub is_profile_public: bool,

    #[serde(deserialize_with = "nullable")]
    pub account_items: Vec<AccountItem>,
}

impl_entity!(Organization, "organization", "organizations");

impl Client {
    pub fn organizations(&self) -> EntityApi<'_, Organization> {
        self.entities()
    }
}
