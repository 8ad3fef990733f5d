use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct CliApi {
    client: Arc<HttpClient>,
}

impl CliApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// List the Plesk CLI commands exposed over REST
    pub async fn get_commands(&self) -> ApiResult<Value> {
        self.client.get("/cli/commands").await
    }

    /// Get the reference (usage) of a single CLI command
    pub async fn get_command_ref(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/cli/{}/ref", id)).await
    }

    /// Execute a CLI command
    ///
    /// # Arguments
    ///
    /// * `id` - The command to run, e.g. `"domain"`
    /// * `payload` - Sent as the request body, usually `{ "params": [...] }`
    pub async fn execute<B>(&self, id: &str, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post(&format!("/cli/{}/call", id), payload).await
    }
}
