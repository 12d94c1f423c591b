//! Sign-up invitations.

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// An invitation code that allows signing up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invitation {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,
    pub display_name: String,

    pub code: String,
    pub is_regexp: bool,
    pub quota: i64,
    pub used_count: i64,

    pub application: String,
    pub username: String,
    pub email: String,
    pub phone: String,

    pub signup_group: String,
    pub default_code: String,

    pub state: String,
}

impl_entity!(Invitation, "invitation", "invitations");

impl Client {
    pub fn invitations(&self) -> EntityApi<'_, Invitation> {
        self.entities()
    }
}
