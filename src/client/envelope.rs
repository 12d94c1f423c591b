//! The response envelope shared by every API action.
//!
//! The server wraps each result as `{"status", "msg", "data", "data2"}`.
//! A status of `"ok"` means success and `data`/`data2` carry the payload.
//! Any other status is a failure whose `msg` is surfaced verbatim.

use crate::error::{SdkError, SdkResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported for a successful action.
pub const STATUS_OK: &str = "ok";
/// Status reported for a failed action.
pub const STATUS_ERROR: &str = "error";
/// `data` value reported by a mutation that changed something.
pub const AFFECTED: &str = "Affected";
/// `data` value reported by a mutation that changed nothing.
pub const UNAFFECTED: &str = "Unaffected";

/// Generic response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub status: String,
    pub msg: String,
    pub data: Value,
    pub data2: Value,
}

impl Response {
    /// A successful envelope carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data,
            ..Self::default()
        }
    }

    /// A failed envelope carrying `msg`.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            msg: msg.into(),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Turn a non-`ok` envelope into [`SdkError::Status`] carrying `msg`.
    pub fn into_checked(self) -> SdkResult<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(SdkError::status(self.msg))
        }
    }

    /// Decode `data` into `T`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> SdkResult<T> {
        decode_value(&self.data, "data")
    }

    /// Decode `data2` into `T`.
    pub fn decode_data2<T: DeserializeOwned>(&self) -> SdkResult<T> {
        decode_value(&self.data2, "data2")
    }

    /// `data` re-serialized as JSON.
    pub fn data_bytes(&self) -> SdkResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.data)?)
    }

    /// Whether a mutation reported that it changed something.
    ///
    /// Only the exact string `"Affected"` counts.
    pub fn is_affected(&self) -> bool {
        self.data.as_str() == Some(AFFECTED)
    }

    /// Total item count reported in `data2` by paginated listings.
    pub fn total_count(&self) -> SdkResult<u64> {
        match &self.data2 {
            Value::Number(number) => number
                .as_u64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f as u64)
                })
                .ok_or_else(|| SdkError::decode(format!("invalid total count: {number}"))),
            Value::Null => Err(SdkError::decode("missing total count in data2")),
            other => Err(SdkError::decode(format!("total count is not a number: {other}"))),
        }
    }
}

fn decode_value<T: DeserializeOwned>(value: &Value, field: &str) -> SdkResult<T> {
    T::deserialize(value).map_err(|e| SdkError::decode(format!("cannot decode {field}: {e}")))
}
