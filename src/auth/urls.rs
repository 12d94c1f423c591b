//! Browser-facing URLs.
//!
//! Pure string builders: nothing here performs a request.

use crate::client::Client;

const SIGN_IN_PATH: &str = "/login/oauth/authorize";
const SIGN_UP_OAUTH_PATH: &str = "/signup/oauth/authorize";

impl Client {
    /// Authorization URL that sends the user to the sign-in page.
    ///
    /// The application name is used as the OAuth `state`.
    pub fn get_sign_in_url(&self, redirect_uri: &str) -> String {
        let config = self.config();
        format!(
            "{}{}?client_id={}&response_type=code&redirect_uri={}&scope=read&state={}",
            config.endpoint,
            SIGN_IN_PATH,
            config.client_id,
            urlencoding::encode(redirect_uri),
            config.application_name
        )
    }

    /// Sign-up page of the application.
    ///
    /// With password sign-up enabled this is the plain sign-up form. Otherwise
    /// it is the OAuth sign-up flow returning to `redirect_uri`.
    pub fn get_sign_up_url(&self, enable_password: bool, redirect_uri: &str) -> String {
        if enable_password {
            format!(
                "{}/signup/{}",
                self.endpoint(),
                self.application_name()
            )
        } else {
            self.get_sign_in_url(redirect_uri)
                .replacen(SIGN_IN_PATH, SIGN_UP_OAUTH_PATH, 1)
        }
    }

    /// Public profile page of a user of the configured organization.
    pub fn get_user_profile_url(&self, user_name: &str, access_token: &str) -> String {
        format!(
            "{}/users/{}/{}{}",
            self.endpoint(),
            self.organization_name(),
            user_name,
            access_token_param(access_token)
        )
    }

    /// Account page of the signed-in user.
    pub fn get_my_profile_url(&self, access_token: &str) -> String {
        format!("{}/account{}", self.endpoint(), access_token_param(access_token))
    }
}

fn access_token_param(access_token: &str) -> String {
    if access_token.is_empty() {
        String::new()
    } else {
        format!("?access_token={}", urlencoding::encode(access_token))
    }
}
