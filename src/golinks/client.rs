//! GoLinks HTTP client for API interactions

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GolinksError, Result};
use crate::golinks::form::FormData;

/// GoLinks API client
///
/// Holds the bearer token for the lifetime of the process. Nothing is
/// mutated after construction, so a client can be shared by reference.
pub struct GolinksClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GolinksClient {
    /// Create a client against the public GoLinks API without signing in
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, api::HOST_URL.to_string())
    }

    /// Create a client with a custom base URL (self-hosted gateways, mock servers)
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = build_http_client(
            Client::builder()
                .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
                .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS)),
        );

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client and validate the token against the API root
    pub async fn connect(token: &str) -> Result<Self> {
        Self::connect_to(token, api::HOST_URL).await
    }

    /// Same as [`GolinksClient::connect`] against an explicit base URL
    pub async fn connect_to(token: &str, base_url: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(GolinksError::Config("token is required".to_string()));
        }

        let mut client = Self::with_base_url(token.to_string(), base_url.to_string());
        let auth = client.sign_in().await?;
        client.token = auth.token;

        debug!("Signed in to GoLinks API at {}", client.base_url);
        Ok(client)
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Build a full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Add the bearer header to a request builder
    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(AUTHORIZATION, format!("Bearer {}", self.token))
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.post(url))
    }

    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.put(url))
    }

    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_auth(self.client.delete(url))
    }

    /// Attach a form-encoded body
    pub(crate) fn form(builder: reqwest::RequestBuilder, form: &FormData) -> reqwest::RequestBuilder {
        builder
            .header(CONTENT_TYPE, api::FORM_CONTENT_TYPE)
            .body(form.encode())
    }

    /// Send a request and return the raw body
    ///
    /// Any status outside 200..300 becomes [`GolinksError::Api`] carrying the
    /// status code and the body text as the server sent it.
    pub async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<Vec<u8>> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.bytes().await?;

        debug!("{} from {} ({} bytes)", status.as_u16(), url, body.len());

        if !status.is_success() {
            return Err(GolinksError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    /// Send a request and decode the JSON body into `T`
    pub async fn execute_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Build the HTTP client, falling back to reqwest defaults (no timeouts) on failure
fn build_http_client(builder: reqwest::ClientBuilder) -> Client {
    builder.build().unwrap_or_else(|e| {
        warn!(
            "Failed to build HTTP client with timeouts ({}), requests will not time out",
            e
        );
        Client::new()
    })
}

#[cfg(test)]
impl GolinksClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }

    /// Test client with a short timeout
    pub fn test_client_with_timeout(base_url: &str, timeout: Duration) -> Self {
        let mut client = Self::test_client(base_url);
        client.client = Client::builder().timeout(timeout).build().unwrap();
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Echo {
        value: String,
    }

    #[test]
    fn test_default_base_url() {
        let client = GolinksClient::new("token".to_string());
        assert_eq!(client.base_url(), "https://api.golinks.io");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let client =
            GolinksClient::with_base_url("token".to_string(), "http://localhost:8080/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/golinks"), "http://localhost:8080/golinks");
        assert_eq!(client.url("golinks/7"), "http://localhost:8080/golinks/7");
    }

    #[tokio::test]
    async fn test_execute_attaches_bearer_token() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client
            .execute(client.get(&client.url("/ping")))
            .await
            .unwrap();
        assert_eq!(body, b"pong");
    }

    #[tokio::test]
    async fn test_execute_non_success_carries_status_and_body() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/golinks"))
            .respond_with(ResponseTemplate::new(404).set_body_string("golink not found"))
            .mount(&mock_server)
            .await;

        let result = client.execute(client.delete(&client.url("/golinks"))).await;

        match result.unwrap_err() {
            GolinksError::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "golink not found");
            }
            other => panic!("Expected GolinksError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_accepts_any_2xx() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let body = client
            .execute(client.post(&client.url("/things")))
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_execute_json_decodes_body() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/echo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "hello"})),
            )
            .mount(&mock_server)
            .await;

        let echo: Echo = client
            .execute_json(client.get(&client.url("/echo")))
            .await
            .unwrap();
        assert_eq!(echo.value, "hello");
    }

    #[tokio::test]
    async fn test_execute_json_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let result: Result<Echo> = client.execute_json(client.get(&client.url("/echo"))).await;
        assert!(matches!(result, Err(GolinksError::Json(_))));
    }

    #[tokio::test]
    async fn test_form_sets_content_type_and_body() {
        let mock_server = MockServer::start().await;
        let client = GolinksClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/golinks"))
            .and(header("Content-Type", api::FORM_CONTENT_TYPE))
            .and(wiremock::matchers::body_string("name=docs&url=https%3A%2F%2Fexample.com"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut form = FormData::new();
        form.set("name", "docs");
        form.set("url", "https://example.com");

        let request = GolinksClient::form(client.put(&client.url("/golinks")), &form);
        client.execute(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_timeout_is_timeout_error() {
        let mock_server = MockServer::start().await;
        let client =
            GolinksClient::test_client_with_timeout(&mock_server.uri(), Duration::from_millis(100));

        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let result = client.execute(client.get(&client.url("/slow"))).await;
        assert!(matches!(result, Err(GolinksError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_connect_rejects_empty_token() {
        let result = GolinksClient::connect_to("", "http://127.0.0.1:9").await;
        assert!(matches!(result, Err(GolinksError::Config(_))));
    }

    #[tokio::test]
    async fn test_connect_signs_in() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("Authorization", "Bearer abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GolinksClient::connect_to("abc123", &mock_server.uri())
            .await
            .unwrap();
        assert_eq!(client.token(), "abc123");
    }

    #[tokio::test]
    async fn test_connect_surfaces_rejected_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&mock_server)
            .await;

        let result = GolinksClient::connect_to("bad", &mock_server.uri()).await;
        match result {
            Err(GolinksError::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            _ => panic!("Expected GolinksError::Api"),
        }
    }

    #[test]
    fn test_build_http_client_falls_back_on_invalid_builder() {
        // an invalid header value makes the builder fail
        let builder = Client::builder().user_agent("bad\nagent");
        let _client = build_http_client(builder);
    }
}
