//! Async client for the Plesk REST API (`/api/v2`).
//!
//! ```no_run
//! # async fn run() -> plesk::ApiResult<()> {
//! let client = plesk::create_client(plesk::CreateClientConfig {
//!     host: "https://mydomain.se:8443".to_string(),
//!     auth: plesk::CreateClientAuth {
//!         username: "admin".to_string(),
//!         password: "password".to_string(),
//!     },
//! });
//!
//! let domain = client.domains().get_by_name("example.com").await?;
//! println!("{domain}");
//! # Ok(())
//! # }
//! ```

mod api;
mod clients;

pub use api::{
    API_VERSION_PATH, ApiResult, ApiSdkError, CliApi, ClientAccountApi, DatabaseApi,
    DatabaseServerApi, DatabaseUserApi, DomainApi, ExtensionApi, FtpUserApi, ServerApi,
};
pub use clients::{Client, CreateClientAuth, CreateClientConfig};
pub use serde_json::Value;

pub fn create_client(config: CreateClientConfig) -> Client {
    Client::new(config)
}
