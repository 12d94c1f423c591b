//! Key material for token tests.
//!
//! `RSA_*` and `EC_*` are matching key pairs with self-signed certificates.
//! `OTHER_RSA_*` is an unrelated RSA pair for signature mismatch tests.

use casdoor_sdk::{Claims, RegisteredClaims, User};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub const RSA_PRIVATE_KEY: &str = include_str!("../fixtures/rsa.key");
pub const RSA_CERTIFICATE: &str = include_str!("../fixtures/rsa.crt");
pub const RSA_PUBLIC_KEY: &str = include_str!("../fixtures/rsa_pub.pem");

pub const EC_PRIVATE_KEY: &str = include_str!("../fixtures/ec.key");
pub const EC_CERTIFICATE: &str = include_str!("../fixtures/ec.crt");
pub const EC_PUBLIC_KEY: &str = include_str!("../fixtures/ec_pub.pem");

pub const OTHER_RSA_PRIVATE_KEY: &str = include_str!("../fixtures/rsa2.key");
pub const OTHER_RSA_CERTIFICATE: &str = include_str!("../fixtures/rsa2.crt");

/// Claims for `built-in/alice` valid for the next hour.
pub fn alice_claims() -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        user: User {
            owner: "built-in".to_string(),
            name: "alice".to_string(),
            id: "6f9c2a1e-alice".to_string(),
            display_name: "Alice Liddell".to_string(),
            email: "alice@example.com".to_string(),
            phone: "5550100".to_string(),
            is_admin: true,
            score: 2000,
            groups: vec!["built-in/staff".to_string()],
            ..User::default()
        },
        access_token: String::new(),
        token_type: "access-token".to_string(),
        refresh_token_type: String::new(),
        signin_method: "Password".to_string(),
        registered: RegisteredClaims {
            iss: Some("http://localhost:8000".to_string()),
            sub: Some("6f9c2a1e-alice".to_string()),
            exp: Some(now + 3600),
            nbf: Some(now - 60),
            iat: Some(now - 60),
            ..RegisteredClaims::default()
        },
    }
}

/// Sign `claims` with an RSA private key.
pub fn sign_rsa(algorithm: Algorithm, private_key: &str, claims: &Claims) -> String {
    let key = EncodingKey::from_rsa_pem(private_key.as_bytes()).unwrap();
    encode(&Header::new(algorithm), claims, &key).unwrap()
}

/// Sign `claims` with the EC fixture key using ES256.
pub fn sign_es256(claims: &Claims) -> String {
    let key = EncodingKey::from_ec_pem(EC_PRIVATE_KEY.as_bytes()).unwrap();
    encode(&Header::new(Algorithm::ES256), claims, &key).unwrap()
}
