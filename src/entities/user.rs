//! Users and user-specific lookups.

use super::nullable;
use super::permission::Permission;
use super::role::Role;
use crate::client::{Client, PostBody, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,
    pub deleted_time: String,

    pub id: String,
    pub external_id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub password: String,
    pub password_salt: String,
    pub password_type: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub avatar_type: String,
    pub permanent_avatar: String,
    pub email: String,
    pub email_verified: bool,
    pub phone: String,
    pub country_code: String,
    pub region: String,
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub address: Vec<String>,
    pub affiliation: String,
    pub title: String,
    pub id_card_type: String,
    pub id_card: String,
    pub homepage: String,
    pub bio: String,
    pub tag: String,
    pub language: String,
    pub gender: String,
    pub birthday: String,
    pub education: String,
    pub score: i64,
    pub karma: i64,
    pub ranking: i64,
    pub balance: f64,
    pub currency: String,
    pub is_default_avatar: bool,
    pub is_online: bool,
    pub is_admin: bool,
    pub is_forbidden: bool,
    pub is_deleted: bool,
    pub signup_application: String,
    pub hash: String,
    pub pre_hash: String,
    pub access_key: String,
    pub access_secret: String,

    pub created_ip: String,
    pub last_signin_time: String,
    pub last_signin_ip: String,
    pub last_signin_wrong_time: String,
    pub signin_wrong_times: i64,

    pub github: String,
    pub google: String,
    pub qq: String,
    pub wechat: String,
    pub facebook: String,
    pub dingtalk: String,
    pub weibo: String,
    pub gitee: String,
    pub linkedin: String,
    pub wecom: String,
    pub lark: String,
    pub gitlab: String,
    pub ldap: String,

    #[serde(deserialize_with = "nullable")]
    pub properties: HashMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<Role>,
    #[serde(deserialize_with = "nullable")]
    pub permissions: Vec<Permission>,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
}

impl_entity!(User, "user", "users");

impl Client {
    /// Users of the configured organization.
    pub fn users(&self) -> EntityApi<'_, User> {
        self.entities()
    }
}

impl EntityApi<'_, User> {
    /// Look a user up by email address.
    pub async fn get_by_email(&self, email: &str) -> SdkResult<Option<User>> {
        self.get_by_field("email", email).await
    }

    /// Look a user up by phone number.
    pub async fn get_by_phone(&self, phone: &str) -> SdkResult<Option<User>> {
        self.get_by_field("phone", phone).await
    }

    /// Look a user up by its immutable user id.
    pub async fn get_by_user_id(&self, user_id: &str) -> SdkResult<Option<User>> {
        self.get_by_field("userId", user_id).await
    }

    async fn get_by_field(&self, field: &str, value: &str) -> SdkResult<Option<User>> {
        let query = Query::new()
            .param("owner", self.client().organization_name())
            .param(field, value);
        self.get_by(&query).await
    }

    /// At most `limit` users ordered by the `sorter` field.
    pub async fn sorted(&self, sorter: &str, limit: usize) -> SdkResult<Vec<User>> {
        let query = Query::new()
            .param("owner", self.client().organization_name())
            .param("sorter", sorter)
            .param("limit", limit);
        self.list_by("sorted-users", &query).await
    }

    /// Number of users, optionally restricted to online or offline ones.
    pub async fn count(&self, is_online: Option<bool>) -> SdkResult<u64> {
        let is_online = match is_online {
            Some(true) => "1",
            Some(false) => "0",
            None => "",
        };
        let query = Query::new()
            .param("owner", self.client().organization_name())
            .param("isOnline", is_online);
        let url = self.client().get_url("get-user-count", &query);
        self.client().do_get_data(&url).await
    }

    /// Users of every organization.
    pub async fn global(&self) -> SdkResult<Vec<User>> {
        self.list_by("global-users", &Query::new()).await
    }

    /// Check the password carried by `user` against the stored one.
    ///
    /// A mismatch is reported by the server as an error.
    pub async fn check_password(&self, user: &User) -> SdkResult<()> {
        self.post_entity("check-user-password", user, &[]).await?;
        Ok(())
    }

    /// Change the password of `{owner}/{name}`.
    pub async fn set_password(
        &self,
        owner: &str,
        name: &str,
        old_password: &str,
        new_password: &str,
    ) -> SdkResult<()> {
        let body = PostBody::form([
            ("userOwner", owner),
            ("userName", name),
            ("oldPassword", old_password),
            ("newPassword", new_password),
        ]);
        self.client()
            .do_post("set-password", &Query::new(), body)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_wire_names() {
        let user = User {
            owner: "built-in".to_string(),
            name: "alice".to_string(),
            user_type: "normal-user".to_string(),
            id_card: "X1".to_string(),
            github: "alice-gh".to_string(),
            ..User::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["type"], "normal-user");
        assert_eq!(value["idCard"], "X1");
        assert_eq!(value["github"], "alice-gh");
        assert_eq!(value["displayName"], "");
    }

    #[test]
    fn test_user_decodes_sparse_payload() {
        let user: User = serde_json::from_value(json!({
            "owner": "built-in",
            "name": "alice",
            "address": null,
            "properties": {"team": "infra"},
            "roles": [{"owner": "built-in", "name": "admin"}],
            "score": 2000
        }))
        .unwrap();
        assert!(user.address.is_empty());
        assert_eq!(user.properties.get("team").map(String::as_str), Some("infra"));
        assert_eq!(user.roles[0].name, "admin");
        assert_eq!(user.score, 2000);
    }
}
