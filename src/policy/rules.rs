//! Policy rules held by an enforcer's adapter.

use crate::client::{Client, PostBody, Query};
use crate::entities::Enforcer;
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// One policy or grouping line, e.g. `p, alice, data1, read`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CasbinRule {
    pub id: i64,
    pub ptype: String,
    pub v0: String,
    pub v1: String,
    pub v2: String,
    pub v3: String,
    pub v4: String,
    pub v5: String,
}

impl CasbinRule {
    /// Build a rule from its type and up to six values.
    pub fn new(ptype: impl Into<String>, values: &[&str]) -> Self {
        let value = |index: usize| values.get(index).map(|v| v.to_string()).unwrap_or_default();
        Self {
            id: 0,
            ptype: ptype.into(),
            v0: value(0),
            v1: value(1),
            v2: value(2),
            v3: value(3),
            v4: value(4),
            v5: value(5),
        }
    }
}

fn enforcer_query(enforcer: &Enforcer) -> Query {
    Query::new().param("id", format!("{}/{}", enforcer.owner, enforcer.name))
}

impl Client {
    /// Rules of an enforcer of the configured organization.
    pub async fn get_policies(&self, enforcer_name: &str, adapter_id: &str) -> SdkResult<Vec<CasbinRule>> {
        let query = Query::new()
            .param("id", format!("{}/{}", self.organization_name(), enforcer_name))
            .param("adapterId", adapter_id);
        let url = self.get_url("get-policies", &query);
        let rules: Option<Vec<CasbinRule>> = self.do_get_data(&url).await?;
        Ok(rules.unwrap_or_default())
    }

    pub async fn add_policy(&self, enforcer: &Enforcer, rule: &CasbinRule) -> SdkResult<bool> {
        let response = self
            .do_post("add-policy", &enforcer_query(enforcer), PostBody::json(rule)?)
            .await?;
        Ok(response.is_affected())
    }

    /// Replace `old` with `new`.
    pub async fn update_policy(
        &self,
        enforcer: &Enforcer,
        old: &CasbinRule,
        new: &CasbinRule,
    ) -> SdkResult<bool> {
        let response = self
            .do_post(
                "update-policy",
                &enforcer_query(enforcer),
                PostBody::json(&[old, new])?,
            )
            .await?;
        Ok(response.is_affected())
    }

    pub async fn remove_policy(&self, enforcer: &Enforcer, rule: &CasbinRule) -> SdkResult<bool> {
        let response = self
            .do_post("remove-policy", &enforcer_query(enforcer), PostBody::json(rule)?)
            .await?;
        Ok(response.is_affected())
    }
}
