use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct ServerApi {
    client: Arc<HttpClient>,
}

impl ServerApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_info(&self) -> ApiResult<Value> {
        self.client.get("/server").await
    }

    pub async fn get_ips(&self) -> ApiResult<Value> {
        self.client.get("/server/ips").await
    }
}
