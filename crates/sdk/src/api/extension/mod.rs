use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct ExtensionApi {
    client: Arc<HttpClient>,
}

impl ExtensionApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get all installed extensions
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/extensions").await
    }

    /// Get a single installed extension
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/extensions/{}", id)).await
    }

    /// Install an extension, `payload` is typically `{ "id": ... }` or `{ "url": ... }`
    pub async fn install<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/extensions", payload).await
    }

    /// Uninstall an extension
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/extensions/{}", id)).await
    }

    pub async fn enable(&self, id: &str) -> ApiResult<Value> {
        self.client.put_empty(&format!("/extensions/{}/enable", id)).await
    }

    pub async fn disable(&self, id: &str) -> ApiResult<Value> {
        self.client.put_empty(&format!("/extensions/{}/disable", id)).await
    }
}
