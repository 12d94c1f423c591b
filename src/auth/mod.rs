//! Authentication helpers.
//!
//! * [`oauth`] exchanges authorization codes and refresh tokens at the
//!   server's token endpoint.
//! * [`jwt`] verifies the tokens the server issues and decodes their claims.
//! * [`urls`] builds the browser-facing sign-in, sign-up and profile URLs.

pub mod jwt;
pub mod oauth;
pub mod urls;

pub use jwt::{Audience, Claims, KeyKind, RegisteredClaims, SigningMethod};
pub use oauth::OAuthToken;
