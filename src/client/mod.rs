//! HTTP transport for OpenAI-compatible endpoints.
//!
//! One `ChatClient` per endpoint carries requests and returns decoded
//! responses or transport-level errors. The client is stateless beyond its
//! configuration and safe to share across tasks; the connection pool inside
//! reqwest is the only shared mutable state.

mod error;
mod types;

pub use error::ClientError;
pub use types::*;

use reqwest::Method;
use std::collections::HashMap;
use std::time::Duration;

/// Immutable endpoint description: base URL, bearer key, custom headers.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base_url: String,
    api_key: String,
    headers: HashMap<String, String>,
}

impl Endpoint {
    /// The trailing slash is trimmed once, here, so URL joins stay uniform.
    pub fn new(base_url: &str, api_key: &str, headers: HashMap<String, String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// HTTP client bound to a single endpoint. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct ChatClient {
    endpoint: Endpoint,
    timeout: Duration,
    http: reqwest::Client,
}

impl ChatClient {
    /// Create a client with its own pooled HTTP transport.
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            endpoint,
            timeout,
            http,
        }
    }

    /// Create a client reusing an existing HTTP transport (for testing).
    pub fn with_http(endpoint: Endpoint, timeout: Duration, http: reqwest::Client) -> Self {
        Self {
            endpoint,
            timeout,
            http,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A per-call deadline overrides the client timeout only by being sooner.
    fn effective_timeout(&self, deadline: Option<Duration>) -> Duration {
        match deadline {
            Some(d) => d.min(self.timeout),
            None => self.timeout,
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut req = req.bearer_auth(&self.endpoint.api_key);
        for (name, value) in &self.endpoint.headers {
            req = req.header(name, value);
        }
        req
    }

    /// GET {base}/models and decode the advertised model list.
    pub async fn list_models(
        &self,
        deadline: Option<Duration>,
    ) -> Result<Vec<ModelEntry>, ClientError> {
        let url = format!("{}/models", self.endpoint.base_url());
        let timeout = self.effective_timeout(deadline);

        let response = self
            .authorize(self.http.get(&url))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_millis() as u64))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let models: ModelsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(models.data)
    }

    /// POST {base}/chat/completions and decode the completion response.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
        deadline: Option<Duration>,
    ) -> Result<ChatCompletionResponse, ClientError> {
        let url = format!("{}/chat/completions", self.endpoint.base_url());
        let timeout = self.effective_timeout(deadline);

        let response = self
            .authorize(self.http.post(&url))
            .json(request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_millis() as u64))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// POST {base}/embeddings. A 404 means the endpoint does not serve the
    /// route at all and maps to `UnsupportedEndpoint`.
    pub async fn embeddings(
        &self,
        input: Vec<String>,
        model: &str,
        deadline: Option<Duration>,
    ) -> Result<EmbeddingsResponse, ClientError> {
        let url = format!("{}/embeddings", self.endpoint.base_url());
        let timeout = self.effective_timeout(deadline);
        let request = EmbeddingsRequest {
            input,
            model: model.to_string(),
        };

        let response = self
            .authorize(self.http.post(&url))
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_millis() as u64))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ClientError::UnsupportedEndpoint("/embeddings".to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Escape hatch for probes that exercise routes outside the chat
    /// surface (batch-processing detection, streaming acceptance). Returns
    /// the raw status and body without decoding.
    pub async fn raw_request(
        &self,
        method: Method,
        relative_path: &str,
        body: Option<serde_json::Value>,
        extra_headers: &HashMap<String, String>,
        deadline: Option<Duration>,
    ) -> Result<(u16, String), ClientError> {
        let url = format!(
            "{}/{}",
            self.endpoint.base_url(),
            relative_path.trim_start_matches('/')
        );
        let timeout = self.effective_timeout(deadline);

        let mut req = self.authorize(self.http.request(method, &url)).timeout(timeout);
        if let Some(body) = body {
            req = req.json(&body);
        }
        for (name, value) in extra_headers {
            req = req.header(name, value);
        }

        let response = req
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout.as_millis() as u64))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn test_client(base_url: String) -> ChatClient {
        ChatClient::new(
            Endpoint::new(&base_url, "test-key", HashMap::new()),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn trailing_slash_trimmed_once() {
        let endpoint = Endpoint::new("http://localhost:8080/v1/", "k", HashMap::new());
        assert_eq!(endpoint.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn deadline_only_tightens_timeout() {
        let client = test_client("http://localhost".to_string());
        assert_eq!(
            client.effective_timeout(Some(Duration::from_secs(1))),
            Duration::from_secs(1)
        );
        assert_eq!(
            client.effective_timeout(Some(Duration::from_secs(60))),
            Duration::from_secs(5)
        );
        assert_eq!(client.effective_timeout(None), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn list_models_decodes_data_array() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/models")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(r#"{"object":"list","data":[{"id":"alpha"},{"id":"beta"}]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let models = client.list_models(None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "alpha");
        assert_eq!(models[1].id, "beta");
    }

    #[tokio::test]
    async fn list_models_non_200_is_backend_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/models")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.list_models(None).await.unwrap_err();

        match err {
            ClientError::Backend { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn chat_completion_roundtrip() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(
                r#"{"id":"c1","object":"chat.completion","created":1,"model":"alpha",
                "choices":[{"index":0,"message":{"role":"assistant","content":"pong"},"finish_reason":"stop"}],
                "usage":{"prompt_tokens":5,"completion_tokens":1,"total_tokens":6}}"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let request = ChatCompletionRequest::user("alpha", "ping").with_max_tokens(10);
        let response = client.chat_completion(&request, None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.first_content(), Some("pong"));
        assert_eq!(response.usage.unwrap().total_tokens, 6);
    }

    #[tokio::test]
    async fn chat_completion_invalid_json_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = test_client(server.url());
        let request = ChatCompletionRequest::user("alpha", "ping");
        let err = client.chat_completion(&request, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn embeddings_404_maps_to_unsupported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(404)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client
            .embeddings(vec!["hello".to_string()], "alpha", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedEndpoint(_)));
    }

    #[tokio::test]
    async fn embeddings_decodes_vectors() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_body(r#"{"data":[{"embedding":[0.1,0.2]}],"model":"alpha","usage":{}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client
            .embeddings(vec!["hello".to_string()], "alpha", None)
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].embedding, vec![0.1, 0.2]);
    }

    #[tokio::test]
    async fn raw_request_returns_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/batches")
            .with_status(404)
            .with_body("no such route")
            .create_async()
            .await;

        let client = test_client(server.url());
        let (status, body) = client
            .raw_request(Method::GET, "batches", None, &HashMap::new(), None)
            .await
            .unwrap();
        assert_eq!(status, 404);
        assert_eq!(body, "no such route");
    }

    #[tokio::test]
    async fn custom_headers_are_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/models")
            .match_header("x-custom", "42")
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .create_async()
            .await;

        let mut headers = HashMap::new();
        headers.insert("x-custom".to_string(), "42".to_string());
        let client = ChatClient::new(
            Endpoint::new(&server.url(), "k", headers),
            Duration::from_secs(5),
        );
        client.list_models(None).await.unwrap();
        mock.assert_async().await;
    }
}
