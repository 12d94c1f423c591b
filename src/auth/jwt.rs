//! JWT verification.
//!
//! Tokens issued by the server are signed with the key of the application's
//! certificate. [`Client::parse_jwt_token`] verifies a token against the
//! configured certificate and returns its [`Claims`]: the full user profile
//! plus token metadata and the registered claims.
//!
//! The verification key is chosen from the algorithm the token declares:
//!
//! | `alg`   | Key taken from the certificate |
//! |---------|--------------------------------|
//! | `ES256` | EC (P-256)                     |
//! | `ES512` | EC (P-521)                     |
//! | `RS256` | RSA                            |
//! | `RS512` | RSA                            |
//!
//! Any other algorithm fails with [`SdkError::UnsupportedSigningMethod`]
//! before any key is parsed. The certificate may be an X.509 certificate or a
//! bare `PUBLIC KEY` block.
//!
//! The signature, `exp` and `nbf` are checked without leeway. The audience
//! and issuer are not checked. The P-521 verifier is unavailable in the
//! `jsonwebtoken` backend, so `ES512` tokens are rejected with a
//! [`SdkError::Jwt`] invalid-algorithm error after their key has been parsed.

use crate::client::Client;
use crate::entities::User;
use crate::error::{SdkError, SdkResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;

/// Value of the `TokenType` claim on refresh tokens.
pub const REFRESH_TOKEN_TYPE: &str = "refresh-token";

/// PEM label of an X.509 certificate.
const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Audience claim, a single value or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Self::Single(value) => value == audience,
            Self::Multiple(values) => values.iter().any(|v| v == audience),
        }
    }
}

/// Registered JWT claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Decoded payload of a token issued by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Profile of the user the token was issued to.
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "accessToken", default)]
    pub access_token: String,
    #[serde(rename = "tokenType", default, skip_serializing_if = "String::is_empty")]
    pub token_type: String,
    /// `refresh-token` on refresh tokens.
    #[serde(rename = "TokenType", default, skip_serializing_if = "String::is_empty")]
    pub refresh_token_type: String,
    #[serde(rename = "signinMethod", default, skip_serializing_if = "String::is_empty")]
    pub signin_method: String,
    #[serde(flatten)]
    pub registered: RegisteredClaims,
}

impl Claims {
    /// Whether this token is a refresh token rather than an access token.
    pub fn is_refresh_token(&self) -> bool {
        self.refresh_token_type == REFRESH_TOKEN_TYPE
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.registered
            .exp
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.registered
            .iat
            .and_then(|iat| DateTime::from_timestamp(iat, 0))
    }
}

/// Family of the key a signing method verifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Ec,
    Rsa,
}

/// Signing algorithms accepted on issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningMethod {
    Es256,
    Es512,
    Rs256,
    Rs512,
}

impl SigningMethod {
    pub const ALL: [SigningMethod; 4] = [Self::Es256, Self::Es512, Self::Rs256, Self::Rs512];

    /// Look a method up by its JOSE `alg` name.
    pub fn from_alg(alg: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == alg)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es256 => "ES256",
            Self::Es512 => "ES512",
            Self::Rs256 => "RS256",
            Self::Rs512 => "RS512",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Self::Es256 | Self::Es512 => KeyKind::Ec,
            Self::Rs256 | Self::Rs512 => KeyKind::Rsa,
        }
    }

    /// The `jsonwebtoken` algorithm verifying this method, if any.
    pub fn algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Es256 => Some(Algorithm::ES256),
            Self::Es512 => None,
            Self::Rs256 => Some(Algorithm::RS256),
            Self::Rs512 => Some(Algorithm::RS512),
        }
    }

    /// Parse the verification key for this method from a PEM certificate or
    /// public key.
    pub fn decoding_key(self, pem: &str) -> SdkResult<DecodingKey> {
        let bytes = pem.as_bytes();
        let (_, block) = parse_x509_pem(bytes)
            .map_err(|e| SdkError::certificate(format!("invalid PEM: {e}")))?;

        if block.label != CERTIFICATE_LABEL {
            let key = match self.key_kind() {
                KeyKind::Ec => DecodingKey::from_ec_pem(bytes),
                KeyKind::Rsa => DecodingKey::from_rsa_pem(bytes),
            };
            return key.map_err(|e| SdkError::certificate(format!("invalid public key: {e}")));
        }

        let (_, certificate) = X509Certificate::from_der(&block.contents)
            .map_err(|e| SdkError::certificate(format!("invalid X.509 certificate: {e}")))?;
        let spki = certificate.public_key();
        let found = match spki.parsed() {
            Ok(PublicKey::EC(_)) => KeyKind::Ec,
            Ok(PublicKey::RSA(_)) => KeyKind::Rsa,
            _ => {
                return Err(SdkError::certificate(
                    "certificate holds neither an EC nor an RSA key",
                ));
            }
        };
        if found != self.key_kind() {
            return Err(SdkError::certificate(format!(
                "{self} needs a {:?} key but the certificate holds a {found:?} key",
                self.key_kind()
            )));
        }

        let key = &*spki.subject_public_key.data;
        Ok(match found {
            KeyKind::Ec => DecodingKey::from_ec_der(key),
            KeyKind::Rsa => DecodingKey::from_rsa_der(key),
        })
    }
}

impl fmt::Display for SigningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct TokenHeader {
    alg: String,
}

/// Read the `alg` of a compact token without verifying anything.
fn declared_algorithm(token: &str) -> SdkResult<String> {
    let mut segments = token.split('.');
    let header = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(header), Some(_), Some(_), None) => header,
        _ => return Err(SdkError::Jwt(ErrorKind::InvalidToken.into())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| SdkError::Jwt(ErrorKind::InvalidToken.into()))?;
    let header: TokenHeader = serde_json::from_slice(&bytes)
        .map_err(|_| SdkError::Jwt(ErrorKind::InvalidToken.into()))?;
    Ok(header.alg)
}

impl Client {
    /// Verify a token against the configured certificate and decode its
    /// claims.
    pub fn parse_jwt_token(&self, token: &str) -> SdkResult<Claims> {
        let alg = declared_algorithm(token)?;
        let method =
            SigningMethod::from_alg(&alg).ok_or(SdkError::UnsupportedSigningMethod { alg })?;
        debug!("verifying {} token", method);

        let key = method.decoding_key(&self.config().certificate)?;
        let algorithm = method
            .algorithm()
            .ok_or_else(|| SdkError::Jwt(ErrorKind::InvalidAlgorithm.into()))?;

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(data.claims)
    }
}
