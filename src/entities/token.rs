//! Issued tokens as stored by the server.
//!
//! These are server-side records. The token returned by an OAuth exchange is
//! [`OAuthToken`](crate::auth::oauth::OAuthToken).

use crate::client::Client;
use crate::crud::{EntityApi, impl_entity};
use serde::{Deserialize, Serialize};

/// An access/refresh token pair issued to a user of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Token {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub application: String,
    pub organization: String,
    pub user: String,

    pub code: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub scope: String,
    pub token_type: String,
    pub code_challenge: String,
    pub code_is_used: bool,
    pub code_expire_in: i64,
}

impl_entity!(Token, "token", "tokens");

impl Client {
    pub fn tokens(&self) -> EntityApi<'_, Token> {
        self.entities()
    }
}
