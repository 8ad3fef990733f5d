use base64::{Engine as _, engine::general_purpose};
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::types::{ApiBaseConfig, ApiResult};

/// Issues authenticated JSON requests relative to `{host}/api/v2`.
///
/// One instance is shared by every resource API of a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_config: ApiBaseConfig,
}

impl HttpClient {
    pub fn new(base_config: ApiBaseConfig) -> Self {
        Self { client: Client::new(), base_config }
    }

    pub(crate) fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_config.base_url, endpoint)
    }

    fn build_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let credentials = format!("{}:{}", self.base_config.username, self.base_config.password);
        let encoded = general_purpose::STANDARD.encode(credentials);
        let mut auth = HeaderValue::from_str(&format!("Basic {}", encoded))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    fn request(&self, method: Method, endpoint: &str) -> ApiResult<RequestBuilder> {
        let url = self.build_url(endpoint);
        let headers = self.build_headers()?;

        debug!(%method, %url, "sending Plesk API request");

        Ok(self.client.request(method, &url).headers(headers))
    }

    /// Fails on non-2xx, otherwise decodes the body. An empty body decodes to `Value::Null`.
    async fn decode(response: Response) -> ApiResult<Value> {
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        let response = self.request(Method::GET, endpoint)?.send().await?;
        Self::decode(response).await
    }

    pub async fn get_with_query<Q>(&self, endpoint: &str, query: &Q) -> ApiResult<Value>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, endpoint)?.query(query).send().await?;
        Self::decode(response).await
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, endpoint)?.json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, endpoint)?.json(body).send().await?;
        Self::decode(response).await
    }

    pub async fn put_empty(&self, endpoint: &str) -> ApiResult<Value> {
        let response = self.request(Method::PUT, endpoint)?.send().await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        let response = self.request(Method::DELETE, endpoint)?.send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new(ApiBaseConfig::new(
            "https://panel.example.com:8443",
            "admin".to_string(),
            "secret".to_string(),
        ))
    }

    #[test]
    fn test_build_url_joins_endpoint_to_base() {
        assert_eq!(client().build_url("/domains/7"), "https://panel.example.com:8443/api/v2/domains/7");
    }

    #[test]
    fn test_build_headers_sets_json_and_basic_auth() {
        let headers = client().build_headers().unwrap();

        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        // base64("admin:secret")
        assert_eq!(headers[AUTHORIZATION], "Basic YWRtaW46c2VjcmV0");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }
}
