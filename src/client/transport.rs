//! HTTP transport helpers.
//!
//! Every API call is a single request against `{endpoint}/api/{action}`:
//!
//! * GET requests carry their arguments in the query string.
//! * POST requests carry them in the query string too, and send a body that is
//!   either raw JSON (labelled `text/plain;charset=UTF-8`), a multipart form of
//!   text fields, or a multipart form holding one file part named `file`.
//!
//! Both use HTTP Basic authentication with the application's client id and
//! secret, plus any custom headers set on the [`Client`]. Nothing is retried.
//! Transport failures, malformed bodies and non-`ok` envelopes are returned to
//! the caller as they happen.

use super::Client;
use super::envelope::{Response, STATUS_ERROR};
use crate::error::{SdkError, SdkResult};
use log::{debug, trace};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Content type used for raw JSON bodies.
pub const JSON_BODY_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// Name of the multipart part that carries an uploaded file.
pub const FILE_FIELD_NAME: &str = "file";

/// Ordered query parameters.
///
/// Parameters render in insertion order. Setting a key that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Query::set`].
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set a parameter, replacing an existing value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the parameters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.set(key, value);
        }
        query
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBody {
    /// Raw JSON bytes, sent as `text/plain;charset=UTF-8`.
    Json(Vec<u8>),
    /// Multipart form with one text field per pair.
    Form(Vec<(String, String)>),
    /// Multipart form with the bytes in a single `file` part.
    File(Vec<u8>),
}

impl PostBody {
    /// Serialize a value into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> SdkResult<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }

    /// Build a form body from field pairs.
    pub fn form<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn into_multipart(self) -> Option<Form> {
        match self {
            Self::Json(_) => None,
            Self::Form(fields) => Some(
                fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value)),
            ),
            Self::File(bytes) => Some(Form::new().part(
                FILE_FIELD_NAME,
                Part::bytes(bytes).file_name(FILE_FIELD_NAME),
            )),
        }
    }
}

impl Client {
    /// Build `{endpoint}/api/{action}?{query}`.
    pub fn get_url(&self, action: &str, query: &Query) -> String {
        format!("{}/api/{}?{}", self.endpoint(), action, query)
    }

    /// GET a URL and return the checked response envelope.
    pub async fn do_get_response(&self, url: &str) -> SdkResult<Response> {
        let (status, body) = self.get_unchecked(url).await?;
        parse_envelope(status, &body)?.into_checked()
    }

    /// GET a URL and return the envelope's `data` re-serialized as JSON bytes.
    pub async fn do_get_bytes(&self, url: &str) -> SdkResult<Vec<u8>> {
        self.do_get_response(url).await?.data_bytes()
    }

    /// GET a URL and decode the envelope's `data` into `T`.
    pub async fn do_get_data<T: DeserializeOwned>(&self, url: &str) -> SdkResult<T> {
        self.do_get_response(url).await?.decode_data()
    }

    /// GET a URL and return the raw body.
    ///
    /// The body is only inspected to detect an error envelope; anything else,
    /// including non-JSON content, is returned untouched.
    pub async fn do_get_bytes_raw(&self, url: &str) -> SdkResult<Vec<u8>> {
        let (_, body) = self.get_unchecked(url).await?;
        if let Ok(response) = serde_json::from_slice::<Response>(&body) {
            if response.status == STATUS_ERROR {
                return Err(SdkError::status(response.msg));
            }
        }
        Ok(body)
    }

    /// POST to an action and return the checked response envelope.
    pub async fn do_post(&self, action: &str, query: &Query, body: PostBody) -> SdkResult<Response> {
        let url = self.get_url(action, query);
        debug!("POST {}", url);

        let request = self.http().post(&url);
        let request = match body {
            PostBody::Json(bytes) => request
                .header(CONTENT_TYPE, JSON_BODY_CONTENT_TYPE)
                .body(bytes),
            multipart => match multipart.into_multipart() {
                Some(form) => request.multipart(form),
                None => request,
            },
        };

        let response = self.authorize(request).await?.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!("POST {} returned {} ({} bytes)", url, status, bytes.len());

        parse_envelope(status, &bytes)?.into_checked()
    }

    async fn get_unchecked(&self, url: &str) -> SdkResult<(StatusCode, Vec<u8>)> {
        debug!("GET {}", url);

        let request = self.authorize(self.http().get(url)).await?;
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!("GET {} returned {} ({} bytes)", url, status, bytes.len());

        Ok((status, bytes.to_vec()))
    }
}

/// Decode a body into an envelope, falling back to an HTTP status error when
/// a failed request did not produce one.
fn parse_envelope(status: StatusCode, body: &[u8]) -> SdkResult<Response> {
    match serde_json::from_slice::<Response>(body) {
        Ok(response) => Ok(response),
        Err(_) if !status.is_success() => Err(SdkError::HttpStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        }),
        Err(e) => Err(SdkError::Json(e)),
    }
}
