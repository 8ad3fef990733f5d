use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct DatabaseUserApi {
    client: Arc<HttpClient>,
}

impl DatabaseUserApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/dbusers").await
    }

    /// Get the users of one database
    pub async fn get_by_database(&self, database_id: u64) -> ApiResult<Value> {
        self.client.get_with_query("/dbusers", &json!({ "dbId": database_id })).await
    }

    pub async fn create<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/dbusers", payload).await
    }

    pub async fn update<B>(&self, id: u64, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&format!("/dbusers/{}", id), payload).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<Value> {
        self.client.delete(&format!("/dbusers/{}", id)).await
    }
}
