//! Error types for SDK operations.
//!
//! Every fallible call in this crate returns [`SdkResult`]. The variants keep
//! the failure classes apart so callers can react to them separately:
//!
//! * transport failures from the HTTP layer ([`SdkError::Http`], [`SdkError::HttpStatus`])
//! * malformed bodies and payloads ([`SdkError::Json`], [`SdkError::Decode`])
//! * server-side rejections carried by the response envelope ([`SdkError::Status`])
//! * in-band OAuth failures ([`SdkError::OAuth`])
//! * token verification failures ([`SdkError::Jwt`], [`SdkError::UnsupportedSigningMethod`])
//!
//! Server and OAuth messages are displayed verbatim, without any prefix, so
//! `err.to_string()` equals the message the server produced.

/// Main error type for SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The response envelope reported a status other than `"ok"`.
    #[error("{msg}")]
    Status { msg: String },

    /// The token endpoint reported a failure in-band.
    #[error("{0}")]
    OAuth(String),

    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status whose body is not a response envelope.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope payload does not have the expected shape.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Token parsing or verification failed.
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token declares an algorithm outside the supported set.
    #[error("unexpected signing method: {alg}")]
    UnsupportedSigningMethod { alg: String },

    /// The configured certificate could not be read.
    #[error("Certificate error: {message}")]
    Certificate { message: String },

    /// Missing or conflicting configuration.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A custom header name or value is not valid HTTP.
    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },
}

impl SdkError {
    /// Create a status error carrying the server message
    pub fn status(msg: impl Into<String>) -> Self {
        Self::Status { msg: msg.into() }
    }

    /// Create a payload decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a certificate error
    pub fn certificate(message: impl Into<String>) -> Self {
        Self::Certificate {
            message: message.into(),
        }
    }

    /// Whether this error was reported by the server through the envelope.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

// Result type alias for convenience
pub type SdkResult<T> = Result<T, SdkError>;
