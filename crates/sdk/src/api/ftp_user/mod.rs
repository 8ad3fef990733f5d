use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct FtpUserApi {
    client: Arc<HttpClient>,
}

impl FtpUserApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/ftpusers").await
    }

    /// Get the FTP users of one domain
    pub async fn get_by_domain(&self, domain: &str) -> ApiResult<Value> {
        self.client.get_with_query("/ftpusers", &json!({ "domain": domain })).await
    }

    /// Get the FTP users of one domain, filtered by user name
    pub async fn get_by_domain_and_name(&self, domain: &str, name: &str) -> ApiResult<Value> {
        self.client.get_with_query("/ftpusers", &json!({ "domain": domain, "name": name })).await
    }

    pub async fn create<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/ftpusers", payload).await
    }

    /// Update an FTP user, addressed by its login name
    pub async fn update<B>(&self, name: &str, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.put(&format!("/ftpusers/{}", name), payload).await
    }

    pub async fn delete(&self, name: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/ftpusers/{}", name)).await
    }
}
