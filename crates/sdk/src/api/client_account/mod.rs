use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

/// Customer accounts managed by the panel (`/clients`).
#[derive(Debug, Clone)]
pub struct ClientAccountApi {
    client: Arc<HttpClient>,
}

impl ClientAccountApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get all client accounts
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/clients").await
    }

    /// Create a client account
    ///
    /// # Arguments
    ///
    /// * `payload` - The account definition, forwarded unchanged as the request body
    pub async fn create<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/clients", payload).await
    }

    /// Get a single client account
    pub async fn get(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/clients/{}", id)).await
    }

    /// Update a client account
    pub async fn update<B>(&self, id: u64, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&format!("/clients/{}", id), payload).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<Value> {
        self.client.delete(&format!("/clients/{}", id)).await
    }

    /// Get the domains owned by a client account
    pub async fn get_domains(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/clients/{}/domains", id)).await
    }

    /// Get resource usage statistics of a client account
    pub async fn get_statistics(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/clients/{}/statistics", id)).await
    }

    pub async fn activate(&self, id: u64) -> ApiResult<Value> {
        self.client.put_empty(&format!("/clients/{}/activate", id)).await
    }

    pub async fn suspend(&self, id: u64) -> ApiResult<Value> {
        self.client.put_empty(&format!("/clients/{}/suspend", id)).await
    }
}
