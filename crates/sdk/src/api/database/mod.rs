mod servers;
mod users;

pub use servers::DatabaseServerApi;
pub use users::DatabaseUserApi;

use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{http::HttpClient, types::ApiResult};

#[derive(Debug, Clone)]
pub struct DatabaseApi {
    client: Arc<HttpClient>,
    pub users: DatabaseUserApi,
    pub servers: DatabaseServerApi,
}

impl DatabaseApi {
    pub(crate) fn new(client: Arc<HttpClient>) -> Self {
        Self {
            users: DatabaseUserApi::new(Arc::clone(&client)),
            servers: DatabaseServerApi::new(Arc::clone(&client)),
            client,
        }
    }

    /// Get all databases
    pub async fn get_all(&self) -> ApiResult<Value> {
        self.client.get("/databases").await
    }

    /// Get the databases attached to one domain
    pub async fn get_by_domain(&self, domain: &str) -> ApiResult<Value> {
        self.client.get_with_query("/databases", &json!({ "domain": domain })).await
    }

    /// Create a database
    ///
    /// # Arguments
    ///
    /// * `payload` - Database name, type, parent domain and server, forwarded unchanged
    pub async fn create<B>(&self, payload: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/databases", payload).await
    }

    /// Delete a database
    pub async fn delete(&self, id: u64) -> ApiResult<Value> {
        self.client.delete(&format!("/databases/{}", id)).await
    }
}
