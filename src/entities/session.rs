//! Login sessions.
//!
//! A session is addressed by `{owner}/{name}/{application}`, where `name` is
//! the user name. That three-part id is called the session primary key.

use super::nullable;
use crate::client::{Client, Query};
use crate::crud::{Entity, EntityApi};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// The browser sessions of one user in one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub owner: String,
    pub name: String,
    pub application: String,
    pub created_time: String,

    #[serde(deserialize_with = "nullable")]
    pub session_id: Vec<String>,
}

impl Entity for Session {
    const SINGULAR: &'static str = "session";
    const PLURAL: &'static str = "sessions";

    fn owner(&self) -> &str {
        &self.owner
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }

    fn id(&self) -> String {
        format!("{}/{}/{}", self.owner, self.name, self.application)
    }
}

impl Client {
    pub fn sessions(&self) -> EntityApi<'_, Session> {
        self.entities()
    }
}

impl EntityApi<'_, Session> {
    /// Session of `user_name` in `application`, `None` when absent.
    pub async fn get_session(&self, user_name: &str, application: &str) -> SdkResult<Option<Session>> {
        let pk = format!(
            "{}/{}/{}",
            self.client().organization_name(),
            user_name,
            application
        );
        self.get_by(&Query::new().param("sessionPkId", pk)).await
    }

    /// Whether `session_id` is already recorded under another session of the
    /// same primary key, i.e. the user is signed in elsewhere.
    pub async fn is_duplicated(&self, session_pk_id: &str, session_id: &str) -> SdkResult<bool> {
        let query = Query::new()
            .param("sessionPkId", session_pk_id)
            .param("sessionId", session_id);
        let url = self.client().get_url("is-session-duplicated", &query);
        self.client().do_get_data(&url).await
    }
}
