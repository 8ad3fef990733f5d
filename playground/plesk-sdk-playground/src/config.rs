use plesk::{CreateClientAuth, CreateClientConfig};
use thiserror::Error;

pub const HOST_VAR: &str = "PLESK_HOST";
pub const USERNAME_VAR: &str = "PLESK_USERNAME";
pub const PASSWORD_VAR: &str = "PLESK_PASSWORD";
pub const DOMAIN_VAR: &str = "PLESK_DOMAIN";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    pub client: CreateClientConfig,
    /// When set, only this domain is looked up instead of listing all of them
    pub domain: Option<String>,
}

impl PlaygroundConfig {
    /// Loads `.env` (if present) and reads the connection settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name).filter(|v| !v.is_empty()).ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            client: CreateClientConfig {
                host: required(HOST_VAR)?,
                auth: CreateClientAuth {
                    username: required(USERNAME_VAR)?,
                    password: required(PASSWORD_VAR)?,
                },
            },
            domain: lookup(DOMAIN_VAR).filter(|v| !v.is_empty()),
        })
    }
}
