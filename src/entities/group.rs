//! Groups.

use super::nullable;
use super::user::User;
use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// A node in an organization's group tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,

    pub display_name: String,
    pub manager: String,
    pub contact_email: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub parent_id: String,
    pub is_top_group: bool,
    #[serde(deserialize_with = "nullable")]
    pub users: Vec<User>,

    pub title: String,
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub children: Vec<Group>,

    pub is_enabled: bool,
}

impl_entity!(Group, "group", "groups");

impl Client {
    pub fn groups(&self) -> EntityApi<'_, Group> {
        self.entities()
    }
}
