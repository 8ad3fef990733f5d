use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct DomainApi {
    client: Arc<HttpClient>,
}

impl DomainApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get all domains
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/domains").await
    }

    /// Look a domain up by its name
    ///
    /// # Arguments
    ///
    /// * `name` - Fully qualified domain name, e.g. `"example.com"`
    pub async fn get_by_name(&self, name: &str) -> ApiResult<Value> {
        self.client.get_with_query("/domains", &json!({ "name": name })).await
    }

    /// Get a single domain
    pub async fn get(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/domains/{}", id)).await
    }

    /// Create a domain
    pub async fn create<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/domains", payload).await
    }

    /// Update a domain
    pub async fn update<B>(&self, id: u64, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&format!("/domains/{}", id), payload).await
    }

    /// Delete a domain
    pub async fn delete(&self, id: u64) -> ApiResult<Value> {
        self.client.delete(&format!("/domains/{}", id)).await
    }

    /// Get the client account owning a domain
    pub async fn get_client(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/domains/{}/client", id)).await
    }

    pub async fn get_status(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/domains/{}/status", id)).await
    }

    /// Change the status of a domain, e.g. `{ "status": "suspended" }`
    pub async fn update_status<B>(&self, id: u64, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&format!("/domains/{}/status", id), payload).await
    }
}
