use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Path every endpoint hangs off, appended verbatim to the configured host.
pub const API_VERSION_PATH: &str = "/api/v2";

#[derive(Clone)]
pub struct ApiBaseConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ApiBaseConfig {
    pub fn new(host: &str, username: String, password: String) -> Self {
        Self { base_url: format!("{}{}", host, API_VERSION_PATH), username, password }
    }
}

impl fmt::Debug for ApiBaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiBaseConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiSdkError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiSdkError::HttpError(e) => e.status(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiSdkError>;
