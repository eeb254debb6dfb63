use std::marker::PhantomData;

use reqwest::Response;
use serde::de::DeserializeOwned;
use studyhall_interfaces::api::{
    error::ServerError,
    resource::{
        filter::Filter,
        interface::{Resource, ResourceId},
    },
};

use super::utils::{
    query::{delete_request, encode_query, get_request, patch_request, post_request},
    transport::Transport,
};

/// Generic client for one collection endpoint, e.g. `/api/topic/`.
///
/// Every operation is a single independent request/response round trip;
/// there is no caching and no coordination between calls.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    transport: Transport,
    endpoint: String,
    _marker: PhantomData<T>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(transport: Transport, endpoint: &str) -> Self {
        debug_assert!(
            endpoint.starts_with('/') && endpoint.ends_with('/'),
            "collection endpoint must be a path like /api/topic/"
        );
        ResourceClient {
            transport,
            endpoint: endpoint.to_string(),
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_path(&self, id: ResourceId) -> String {
        format!("{}{}/", self.endpoint, id)
    }

    // The `?` is part of the listing contract even when the filter is empty.
    fn list_path(&self, filter: &Filter) -> Result<String, ServerError> {
        Ok(format!("{}?{}", self.endpoint, encode_query(filter)?))
    }

    pub async fn get(&self, id: ResourceId) -> Result<T, ServerError> {
        get_request(&self.transport, &self.item_path(id)).await
    }

    /// List with a filter. The response body is decoded into whatever shape
    /// the caller picks: `Vec<T>`, `Paginated<T>`, or something opaque.
    pub async fn filter<R: DeserializeOwned>(&self, filter: &Filter) -> Result<R, ServerError> {
        get_request(&self.transport, &self.list_path(filter)?).await
    }

    /// Create or update, decided solely by the presence of an id: with one
    /// the resource is PATCHed at its item path, without one it is POSTed to
    /// the collection. Returns the server's rendition.
    pub async fn save(&self, resource: &T) -> Result<T, ServerError> {
        match resource.id() {
            Some(id) => patch_request(&self.transport, &self.item_path(id), resource).await,
            None => post_request(&self.transport, &self.endpoint, resource).await,
        }
    }

    /// Delete a persisted resource, handing back the raw response. A resource
    /// with no id has nothing to delete: no request is made and `None` is
    /// returned.
    pub async fn delete(&self, resource: &T) -> Result<Option<Response>, ServerError> {
        match resource.id() {
            Some(id) => {
                let response = delete_request(&self.transport, &self.item_path(id)).await?;
                Ok(Some(response))
            }
            None => Ok(None),
        }
    }
}
