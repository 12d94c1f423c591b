//! Stored files.

use crate::client::{Client, PostBody, Query};
use crate::crud::{EntityApi, impl_entity};
use crate::error::SdkResult;
use serde::{Deserialize, Serialize};

/// A file kept by the server's storage provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub user: String,
    pub provider: String,
    pub application: String,
    pub tag: String,
    pub parent: String,
    pub file_name: String,
    pub file_type: String,
    pub file_format: String,
    pub file_size: i64,
    pub url: String,
    pub description: String,
}

impl_entity!(Resource, "resource", "resources");

/// Where an uploaded file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedResource {
    /// Public URL of the file.
    pub url: String,
    /// Name of the created resource record.
    pub name: String,
}

impl Client {
    pub fn resources(&self) -> EntityApi<'_, Resource> {
        self.entities()
    }
}

impl EntityApi<'_, Resource> {
    /// Upload `bytes` to `full_file_path` on behalf of `user`.
    pub async fn upload(
        &self,
        user: &str,
        tag: &str,
        parent: &str,
        full_file_path: &str,
        bytes: Vec<u8>,
    ) -> SdkResult<UploadedResource> {
        let client = self.client();
        let query = Query::new()
            .param("owner", client.organization_name())
            .param("user", user)
            .param("application", client.application_name())
            .param("tag", tag)
            .param("parent", parent)
            .param("fullFilePath", full_file_path);

        let response = client
            .do_post("upload-resource", &query, PostBody::File(bytes))
            .await?;
        Ok(UploadedResource {
            url: response.decode_data()?,
            name: response.decode_data2()?,
        })
    }

    /// Delete the resource `name` of the configured organization.
    pub async fn delete_by_name(&self, name: &str) -> SdkResult<bool> {
        let resource = Resource {
            owner: self.client().organization_name().to_string(),
            name: name.to_string(),
            ..Resource::default()
        };
        self.delete(&resource).await
    }
}
