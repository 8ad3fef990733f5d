use std::fmt;
use std::sync::Arc;

use crate::api::{
    ApiBaseConfig, CliApi, ClientAccountApi, DatabaseApi, DomainApi, ExtensionApi, FtpUserApi,
    ServerApi, http::HttpClient,
};

#[derive(Debug, Clone)]
pub struct CreateClientConfig {
    /// Scheme, host and port of the panel, e.g. `https://mydomain.se:8443`
    pub host: String,
    pub auth: CreateClientAuth,
}

#[derive(Clone)]
pub struct CreateClientAuth {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for CreateClientAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateClientAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Entry point to the Plesk REST API.
///
/// Every method on the resource APIs issues exactly one request against
/// `{host}/api/v2` with HTTP Basic authentication and returns the decoded
/// JSON body unchanged. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    config: CreateClientConfig,
    cli_api: CliApi,
    server_api: ServerApi,
    extension_api: ExtensionApi,
    client_account_api: ClientAccountApi,
    domain_api: DomainApi,
    ftp_user_api: FtpUserApi,
    database_api: DatabaseApi,
}

impl Client {
    pub fn new(config: CreateClientConfig) -> Self {
        let api_base_config = ApiBaseConfig::new(
            &config.host,
            config.auth.username.clone(),
            config.auth.password.clone(),
        );
        let client = Arc::new(HttpClient::new(api_base_config));

        Self {
            config,
            cli_api: CliApi::new(Arc::clone(&client)),
            server_api: ServerApi::new(Arc::clone(&client)),
            extension_api: ExtensionApi::new(Arc::clone(&client)),
            client_account_api: ClientAccountApi::new(Arc::clone(&client)),
            domain_api: DomainApi::new(Arc::clone(&client)),
            ftp_user_api: FtpUserApi::new(Arc::clone(&client)),
            database_api: DatabaseApi::new(Arc::clone(&client)),
        }
    }

    /// Shorthand for [`Client::new`] taking the credentials first, as the panel UI lists them.
    pub fn from_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self::new(CreateClientConfig {
            host: host.into(),
            auth: CreateClientAuth { username: username.into(), password: password.into() },
        })
    }

    pub fn config(&self) -> &CreateClientConfig {
        &self.config
    }

    pub fn cli(&self) -> &CliApi {
        &self.cli_api
    }

    pub fn server(&self) -> &ServerApi {
        &self.server_api
    }

    pub fn extensions(&self) -> &ExtensionApi {
        &self.extension_api
    }

    pub fn clients(&self) -> &ClientAccountApi {
        &self.client_account_api
    }

    pub fn domains(&self) -> &DomainApi {
        &self.domain_api
    }

    pub fn ftp_users(&self) -> &FtpUserApi {
        &self.ftp_user_api
    }

    /// Databases, with database users and database servers under `.users` and `.servers`
    pub fn databases(&self) -> &DatabaseApi {
        &self.database_api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_credentials_keeps_values() {
        let client = Client::from_credentials("admin", "secret", "https://panel:8443");

        assert_eq!(client.config().host, "https://panel:8443");
        assert_eq!(client.config().auth.username, "admin");
        assert_eq!(client.config().auth.password, "secret");
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let client = Client::from_credentials("admin", "secret", "https://panel:8443");
        let printed = format!("{:?}", client);

        assert!(printed.contains("admin"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
