//! Enforcement requests.
//!
//! A request is a tuple of arbitrary JSON values, usually
//! `(subject, object, action)`. The server replies with `data = [bool]` for a
//! single request and `data = [[bool], [bool], ...]` for a batch, one entry
//! per request in request order. Any other shape is a decode error.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use casdoor_sdk::{Client, EnforceTarget};
//! use serde_json::json;
//!
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let target = EnforceTarget::permission("built-in/permission-read");
//! let allowed = client
//!     .enforce(&target, &vec![json!("alice"), json!("data1"), json!("read")])
//!     .await?;
//!
//! let decisions = client
//!     .batch_enforce(
//!         &target,
//!         &[
//!             vec![json!("alice"), json!("data1"), json!("read")],
//!             vec![json!("alice"), json!("data1"), json!("write")],
//!         ],
//!     )
//!     .await?;
//! assert_eq!(decisions.len(), 2);
//! # let _ = allowed;
//! # Ok(())
//! # }
//! ```

use crate::client::{Client, PostBody, Query};
use crate::error::{SdkError, SdkResult};
use serde_json::Value;

/// One enforcement request.
pub type CasbinRequest = Vec<Value>;

/// What a request is evaluated against.
///
/// Every field is sent, empty or not; the server picks the first non-empty
/// one among permission, model, resource and enforcer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnforceTarget {
    pub permission_id: String,
    pub model_id: String,
    pub resource_id: String,
    pub enforcer_id: String,
    pub owner: String,
}

impl EnforceTarget {
    /// Evaluate against one permission, `{owner}/{name}`.
    pub fn permission(id: impl Into<String>) -> Self {
        Self {
            permission_id: id.into(),
            ..Self::default()
        }
    }

    /// Evaluate against every permission using a model, `{owner}/{name}`.
    pub fn model(id: impl Into<String>) -> Self {
        Self {
            model_id: id.into(),
            ..Self::default()
        }
    }

    /// Evaluate against every permission covering a resource.
    pub fn resource(id: impl Into<String>) -> Self {
        Self {
            resource_id: id.into(),
            ..Self::default()
        }
    }

    /// Evaluate with an enforcer, `{owner}/{name}`.
    pub fn enforcer(id: impl Into<String>) -> Self {
        Self {
            enforcer_id: id.into(),
            ..Self::default()
        }
    }

    /// Restrict evaluation to records of `owner`.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    fn to_query(&self) -> Query {
        Query::new()
            .param("permissionId", &self.permission_id)
            .param("modelId", &self.model_id)
            .param("resourceId", &self.resource_id)
            .param("enforcerId", &self.enforcer_id)
            .param("owner", &self.owner)
    }
}

impl Client {
    /// Evaluate one request.
    pub async fn enforce(&self, target: &EnforceTarget, request: &CasbinRequest) -> SdkResult<bool> {
        let response = self
            .do_post("enforce", &target.to_query(), PostBody::json(request)?)
            .await?;
        single_decision(&response.data)
    }

    /// Evaluate several requests in one call. Decisions come back in request
    /// order.
    pub async fn batch_enforce(
        &self,
        target: &EnforceTarget,
        requests: &[CasbinRequest],
    ) -> SdkResult<Vec<bool>> {
        let response = self
            .do_post("batch-enforce", &target.to_query(), PostBody::json(requests)?)
            .await?;
        let decisions = batch_decisions(&response.data)?;
        if decisions.len() != requests.len() {
            return Err(SdkError::decode(format!(
                "expected {} decisions, got {}",
                requests.len(),
                decisions.len()
            )));
        }
        Ok(decisions)
    }
}

fn single_decision(data: &Value) -> SdkResult<bool> {
    match data.as_array().map(Vec::as_slice) {
        Some([Value::Bool(allowed)]) => Ok(*allowed),
        _ => Err(SdkError::decode(format!("expected [bool], got {data}"))),
    }
}

fn batch_decisions(data: &Value) -> SdkResult<Vec<bool>> {
    data.as_array()
        .ok_or_else(|| SdkError::decode(format!("expected [[bool], ...], got {data}")))?
        .iter()
        .map(single_decision)
        .collect()
}
