#![allow(dead_code)]

use plesk::{Client, CreateClientAuth, CreateClientConfig};
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "s3cret";

pub fn create_client(server: &MockServer) -> Client {
    plesk::create_client(CreateClientConfig {
        host: server.uri(),
        auth: CreateClientAuth { username: USERNAME.to_string(), password: PASSWORD.to_string() },
    })
}

pub fn ok_body() -> Value {
    json!({ "status": "success" })
}

/// Mounts a mock that must be hit exactly once with `verb` on `/api/v2{endpoint}`.
pub async fn expect_once(server: &MockServer, verb: &str, endpoint: &str) {
    Mock::given(method(verb))
        .and(path(format!("/api/v2{endpoint}")))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

pub fn body_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
