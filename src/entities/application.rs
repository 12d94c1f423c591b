//! Applications.

use super::nullable;
use super::organization::Organization;
use super::provider::Provider;
use crate::client::{Client, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// Owner of every application-level record on the server.
pub const ADMIN_OWNER: &str = "admin";

/// A provider enabled for an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderItem {
    pub owner: String,
    pub name: String,
    pub can_sign_up: bool,
    pub can_sign_in: bool,
    pub can_unlink: bool,
    pub prompted: bool,
    pub alert_type: String,
    pub rule: String,
    pub provider: Option<Provider>,
}

/// A field on an application's sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupItem {
    pub name: String,
    pub visible: bool,
    pub required: bool,
    pub prompted: bool,
    pub rule: String,
}

/// An OAuth client registered with the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub display_name: String,
    pub logo: String,
    pub homepage_url: String,
    pub description: String,
    pub organization: String,
    pub cert: String,

    pub enable_password: bool,
    pub enable_sign_up: bool,
    pub enable_signin_session: bool,
    pub enable_auto_signin: bool,
    pub enable_code_signin: bool,
    pub enable_saml_compress: bool,
    pub enable_web_authn: bool,
    pub enable_link_with_email: bool,
    pub org_choice_mode: String,
    pub saml_reply_url: String,

    #[serde(deserialize_with = "nullable")]
    pub providers: Vec<ProviderItem>,
    #[serde(deserialize_with = "nullable")]
    pub signup_items: Vec<SignupItem>,
    #[serde(deserialize_with = "nullable")]
    pub grant_types: Vec<String>,
    pub organization_obj: Option<Box<Organization>>,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,

    pub client_id: String,
    pub client_secret: String,
    #[serde(deserialize_with = "nullable")]
    pub redirect_uris: Vec<String>,
    pub token_format: String,
    pub expire_in_hours: i64,
    pub refresh_expire_in_hours: i64,

    pub signup_url: String,
    pub signin_url: String,
    pub forget_url: String,
    pub affiliation_url: String,
    pub terms_of_use: String,
    pub signup_html: String,
    pub signin_html: String,
    pub form_css: String,
    pub form_offset: i64,
    pub form_background_url: String,
}

impl_entity!(Application, "application", "applications");

impl Client {
    pub fn applications(&self) -> EntityApi<'_, Application> {
        self.entities()
    }
}

impl EntityApi<'_, Application> {
    /// Applications that belong to the configured organization.
    pub async fn organization_applications(&self) -> SdkResult<Vec<Application>> {
        let query = Query::new()
            .param("owner", ADMIN_OWNER)
            .param("organization", self.client().organization_name());
        self.list_by("organization-applications", &query).await
    }
}
