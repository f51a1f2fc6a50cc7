//! Shared helpers for directory tests against a mock server.

#![expect(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::time::Duration;

use serde_json::Value;
use userdir_business::{BusinessConfig, UserDirectoryClient, UserRecord};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const USERS_PATH: &str = "/api/user";

/// A mock server plus a client pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub client: UserDirectoryClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let client = UserDirectoryClient::new(BusinessConfig::new(mock_server.uri()));
        Self {
            mock_server,
            client,
        }
    }

    /// Answer the next GET with this array, once.
    pub async fn mock_list_once(&self, users: Value) {
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .up_to_n_times(1)
            .mount(&self.mock_server)
            .await;
    }

    /// Answer every GET with this array after a delay.
    pub async fn mock_list_delayed(&self, users: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(users).set_delay(delay))
            .mount(&self.mock_server)
            .await;
    }

    /// Answer every request of `verb` with a bare status.
    pub async fn mock_status(&self, verb: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    /// Answer every request of `verb` with a status after a delay.
    pub async fn mock_status_delayed(&self, verb: &str, status: u16, delay: Duration) {
        Mock::given(method(verb))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(status).set_delay(delay))
            .mount(&self.mock_server)
            .await;
    }

    /// Fill the mirror with an initial fetch.
    pub async fn seed(&self, users: Value) {
        self.mock_list_once(users).await;
        self.client
            .fetch_all()
            .await
            .expect("seeding fetch should succeed");
    }

    /// Methods of all requests the server saw, in arrival order.
    pub async fn request_methods(&self) -> Vec<String> {
        self.mock_server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .iter()
            .map(|request| request.method.as_str().to_owned())
            .collect()
    }

    /// Count of requests with this method.
    pub async fn count(&self, verb: &str) -> usize {
        self.request_methods()
            .await
            .iter()
            .filter(|m| m.as_str() == verb)
            .count()
    }

    /// JSON bodies of all requests with this method, in arrival order.
    pub async fn bodies(&self, verb: &str) -> Vec<Value> {
        self.mock_server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .iter()
            .filter(|request| request.method.as_str() == verb)
            .map(|request| serde_json::from_slice(&request.body).expect("body should be JSON"))
            .collect()
    }
}

/// Parse a JSON array literal into records.
pub fn records(users: Value) -> Vec<UserRecord> {
    serde_json::from_value(users).expect("fixture should be an array of records")
}
