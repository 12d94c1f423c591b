//! OAuth2 token exchange.
//!
//! The server's token endpoint takes the client credentials as form
//! parameters rather than an `Authorization` header. Failures come back in
//! one of two ways:
//!
//! * a standard OAuth error body, `{"error": "...", "error_description": "..."}`
//! * a normal-looking token whose `access_token` starts with `error:`
//!
//! Both become [`SdkError::OAuth`]. For the in-band form the message is the
//! access token with the `error:` prefix and any following spaces removed.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use casdoor_sdk::Client;
//!
//! # async fn example(client: &Client, code: &str, state: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let token = client.get_oauth_token(code, state).await?;
//! let claims = client.parse_jwt_token(&token.access_token)?;
//! println!("signed in as {}", claims.user.name);
//!
//! let refreshed = client.refresh_oauth_token(&token.refresh_token).await?;
//! assert!(!refreshed.access_token.is_empty());
//! # Ok(())
//! # }
//! ```

use crate::client::Client;
use crate::error::{SdkError, SdkResult};
use chrono::{DateTime, Duration, Utc};
use log::{debug, trace};
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Action exchanging an authorization code for a token.
pub const ACCESS_TOKEN_ACTION: &str = "login/oauth/access_token";
/// Action exchanging a refresh token for a new token.
pub const REFRESH_TOKEN_ACTION: &str = "login/oauth/refresh_token";
/// Prefix marking an access token that is really an error message.
pub const IN_BAND_ERROR_PREFIX: &str = "error:";
/// Redirect URI sent with code exchanges.
pub const CODE_EXCHANGE_REDIRECT_URI: &str = "callback";

/// Token returned by the token endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthToken {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    pub id_token: String,
    pub scope: String,
    /// When the access token expires, computed when the token was received.
    #[serde(skip)]
    pub expiry: Option<DateTime<Utc>>,
}

impl OAuthToken {
    /// Whether the access token has expired.
    ///
    /// Tokens without a known lifetime never expire.
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|expiry| expiry <= Utc::now())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    refresh_token: String,
    #[serde(deserialize_with = "lenient_seconds")]
    expires_in: i64,
    id_token: String,
    scope: String,
    error: String,
    error_description: String,
}

/// `expires_in` as a JSON number or a numeric string. Null, an empty string
/// and fractional seconds are accepted too.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Integer(i64),
        Float(f64),
        Text(String),
        Null(()),
    }

    match Seconds::deserialize(deserializer)? {
        Seconds::Integer(seconds) => Ok(seconds),
        Seconds::Float(seconds) => Ok(seconds as i64),
        Seconds::Text(text) if text.trim().is_empty() => Ok(0),
        Seconds::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expires_in is not a number: {text}"))),
        Seconds::Null(()) => Ok(0),
    }
}

impl TokenResponse {
    fn into_token(self) -> SdkResult<OAuthToken> {
        if !self.error.is_empty() {
            let message = if self.error_description.is_empty() {
                self.error
            } else {
                self.error_description
            };
            return Err(SdkError::OAuth(message));
        }

        if let Some(message) = self.access_token.strip_prefix(IN_BAND_ERROR_PREFIX) {
            return Err(SdkError::OAuth(message.trim_start().to_string()));
        }

        if self.access_token.is_empty() {
            return Err(SdkError::decode("token response is missing access_token"));
        }

        let expiry = Some(self.expires_in)
            .filter(|seconds| *seconds > 0)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));

        Ok(OAuthToken {
            access_token: self.access_token,
            token_type: self.token_type,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            id_token: self.id_token,
            scope: self.scope,
            expiry,
        })
    }
}

impl Client {
    /// Exchange an authorization code for a token.
    pub async fn get_oauth_token(&self, code: &str, state: &str) -> SdkResult<OAuthToken> {
        self.get_oauth_token_with(code, state, self.http()).await
    }

    /// Exchange an authorization code using `http` for this call only.
    pub async fn get_oauth_token_with(
        &self,
        code: &str,
        state: &str,
        http: &reqwest::Client,
    ) -> SdkResult<OAuthToken> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", CODE_EXCHANGE_REDIRECT_URI),
        ];
        if !state.is_empty() {
            form.push(("state", state));
        }
        self.request_token(http, ACCESS_TOKEN_ACTION, form).await
    }

    /// Exchange a refresh token for a new token.
    pub async fn refresh_oauth_token(&self, refresh_token: &str) -> SdkResult<OAuthToken> {
        self.refresh_oauth_token_with(refresh_token, self.http())
            .await
    }

    /// Refresh a token using `http` for this call only.
    pub async fn refresh_oauth_token_with(
        &self,
        refresh_token: &str,
        http: &reqwest::Client,
    ) -> SdkResult<OAuthToken> {
        let form = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];
        let mut token = self.request_token(http, REFRESH_TOKEN_ACTION, form).await?;
        // a response without a new refresh token keeps the old one usable
        if token.refresh_token.is_empty() {
            token.refresh_token = refresh_token.to_string();
        }
        Ok(token)
    }

    async fn request_token(
        &self,
        http: &reqwest::Client,
        action: &str,
        form: Vec<(&str, &str)>,
    ) -> SdkResult<OAuthToken> {
        let config = self.config();
        let form: Vec<(&str, &str)> = form
            .into_iter()
            .chain([
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.expose_secret()),
            ])
            .collect();

        let url = format!("{}/api/{}", self.endpoint(), action);
        debug!("POST {}", url);

        let response = http
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        trace!("POST {} returned {} ({} bytes)", url, status, body.len());

        let parsed = match serde_json::from_slice::<TokenResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(SdkError::HttpStatus {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
            Err(e) => return Err(SdkError::Json(e)),
        };

        if !status.is_success() && parsed.error.is_empty() {
            return Err(SdkError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        parsed.into_token()
    }
}
