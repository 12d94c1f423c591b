//! Generic CRUD engine shared by every entity kind.
//!
//! Each kind of record the server stores follows one naming convention:
//!
//! | Operation           | Request                                      |
//! |---------------------|----------------------------------------------|
//! | list                | `GET get-{plural}?owner=`                    |
//! | get                 | `GET get-{singular}?id={owner}/{name}`       |
//! | page                | `GET get-{plural}?owner=&p=&pageSize=&...`   |
//! | add/update/delete   | `POST {verb}-{singular}?id={owner}/{name}`   |
//!
//! A kind plugs into the engine by implementing [`Entity`]. The engine itself
//! is [`EntityApi`], a short-lived borrow of a [`Client`] typed by the kind.
//!
//! Mutations always send the record with its owner replaced by the client's
//! configured organization. The caller's value is left untouched; the
//! replacement happens on a private copy.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use casdoor_sdk::{Client, Role};
//!
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let role = Role {
//!     name: "auditor".to_string(),
//!     display_name: "Auditor".to_string(),
//!     ..Role::default()
//! };
//!
//! assert!(client.roles().add(&role).await?);
//! let stored = client.roles().get("auditor").await?;
//! assert!(stored.is_some());
//!
//! let (first_page, total) = client.roles().page(1, 10, &[]).await?;
//! println!("{} of {} roles", first_page.len(), total);
//! # Ok(())
//! # }
//! ```

use crate::client::{Client, PostBody, Query, Response};
use crate::error::SdkResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A record kind addressable through the generic CRUD actions.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Action stem for single-record calls, e.g. `user`.
    const SINGULAR: &'static str;
    /// Action stem for listing calls, e.g. `users`.
    const PLURAL: &'static str;

    fn owner(&self) -> &str;
    fn name(&self) -> &str;
    fn set_owner(&mut self, owner: &str);

    /// Identity sent as the `id` parameter of mutations.
    fn id(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }
}

/// Implement [`Entity`] for a record with `owner` and `name` string fields.
macro_rules! impl_entity {
    ($ty:ty, $singular:literal, $plural:literal) => {
        impl $crate::crud::Entity for $ty {
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            fn owner(&self) -> &str {
                &self.owner
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_owner(&mut self, owner: &str) {
                self.owner = owner.to_string();
            }
        }
    };
}

pub(crate) use impl_entity;

/// CRUD operations for one entity kind.
pub struct EntityApi<'c, T> {
    client: &'c Client,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityApi<'_, T> {}

impl<'c, T: Entity> EntityApi<'c, T> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    pub fn client(&self) -> &'c Client {
        self.client
    }

    /// All records owned by the configured organization.
    pub async fn list(&self) -> SdkResult<Vec<T>> {
        self.list_in(self.client.organization_name()).await
    }

    /// All records owned by `owner`.
    pub async fn list_in(&self, owner: &str) -> SdkResult<Vec<T>> {
        self.list_by(T::PLURAL, &Query::new().param("owner", owner))
            .await
    }

    /// Records returned by an arbitrary listing action.
    ///
    /// A `null` payload is an empty list. Server ordering is kept.
    pub async fn list_by(&self, action: &str, query: &Query) -> SdkResult<Vec<T>> {
        let url = self.client.get_url(&format!("get-{action}"), query);
        let items: Option<Vec<T>> = self.client.do_get_data(&url).await?;
        Ok(items.unwrap_or_default())
    }

    /// The record `name` of the configured organization, `None` when absent.
    pub async fn get(&self, name: &str) -> SdkResult<Option<T>> {
        self.get_in(self.client.organization_name(), name).await
    }

    /// The record `{owner}/{name}`, `None` when absent.
    pub async fn get_in(&self, owner: &str, name: &str) -> SdkResult<Option<T>> {
        self.get_by(&Query::new().param("id", format!("{owner}/{name}")))
            .await
    }

    /// The record matched by an arbitrary `get-{singular}` query.
    pub async fn get_by(&self, query: &Query) -> SdkResult<Option<T>> {
        let url = self
            .client
            .get_url(&format!("get-{}", T::SINGULAR), query);
        self.client.do_get_data(&url).await
    }

    /// One page of records and the total number of matching records.
    ///
    /// `page` is 1-based. `filters` are added as extra query parameters and
    /// may override `owner`.
    pub async fn page(
        &self,
        page: usize,
        page_size: usize,
        filters: &[(&str, &str)],
    ) -> SdkResult<(Vec<T>, u64)> {
        let mut query = Query::new()
            .param("owner", self.client.organization_name())
            .param("p", page)
            .param("pageSize", page_size);
        for (key, value) in filters {
            query.set(*key, value);
        }

        let url = self.client.get_url(&format!("get-{}", T::PLURAL), &query);
        let response = self.client.do_get_response(&url).await?;
        let items: Option<Vec<T>> = response.decode_data()?;
        Ok((items.unwrap_or_default(), response.total_count()?))
    }

    /// Create a record. Returns whether the server changed anything.
    pub async fn add(&self, entity: &T) -> SdkResult<bool> {
        self.modify("add", entity, &[]).await
    }

    /// Replace a record. Returns whether the server changed anything.
    pub async fn update(&self, entity: &T) -> SdkResult<bool> {
        self.modify("update", entity, &[]).await
    }

    /// Update only the named fields of a record.
    pub async fn update_columns(&self, entity: &T, columns: &[&str]) -> SdkResult<bool> {
        self.modify("update", entity, columns).await
    }

    /// Delete a record. Returns whether the server changed anything.
    pub async fn delete(&self, entity: &T) -> SdkResult<bool> {
        self.modify("delete", entity, &[]).await
    }

    /// Post `{verb}-{singular}` and report whether the record was affected.
    pub async fn modify(&self, verb: &str, entity: &T, columns: &[&str]) -> SdkResult<bool> {
        let action = format!("{verb}-{}", T::SINGULAR);
        let response = self.post_entity(&action, entity, columns).await?;
        Ok(response.is_affected())
    }

    /// Post the owner-normalized record to `action` with its `id`.
    pub(crate) async fn post_entity(
        &self,
        action: &str,
        entity: &T,
        columns: &[&str],
    ) -> SdkResult<Response> {
        let mut entity = entity.clone();
        entity.set_owner(self.client.organization_name());

        let mut query = Query::new().param("id", entity.id());
        if !columns.is_empty() {
            query.set("columns", columns.join(","));
        }

        self.client
            .do_post(action, &query, PostBody::json(&entity)?)
            .await
    }
}

impl Client {
    /// CRUD operations for any entity kind.
    pub fn entities<T: Entity>(&self) -> EntityApi<'_, T> {
        EntityApi::new(self)
    }
}
