use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct DatabaseServerApi {
    client: Arc<HttpClient>,
}

impl DatabaseServerApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Get all database servers known to the panel
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/dbservers").await
    }

    /// Filter the database server list by server id
    pub async fn get_by_id(&self, id: u64) -> ApiResult<Value> {
        self.client.get_with_query("/dbservers", &json!({ "id": id })).await
    }
}
