//! Shared test utilities for Sentinel integration tests.
//!
//! Provides reusable helpers for mounting mock OpenAI-compatible endpoints
//! and building verification configs against them.

#![allow(dead_code)]

use sentinel::client::{ChatClient, Endpoint};
use sentinel::config::{EndpointEntry, VerifierConfig};
use std::collections::HashMap;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A response body that satisfies most text-probe predicates at once:
/// code markers, debugging/review/test/documentation terms, architecture
/// and security vocabulary, reasoning and protocol keywords, generative
/// topics, and a leading "B" for the reranking probe. Starts with the
/// letters ACP sub-probes look for.
pub const KITCHEN_SINK: &str = "B, A, C. initialized capability cancel status terminated. \
yes, this uses the model context protocol. no, we cannot conclude that. \
# a commented design pattern example with a singleton class hierarchy\n\
class Worker(object):\n\
    \"\"\"thread pool job, O(n) complexity, optimized for performance\"\"\"\n\
    def run(self):\n\
        try:\n\
            assert self.test()  # fix the bug, guard the error and the empty case\n\
            return len(self.items)\n\
        except Exception:\n\
            pass\n\
function reverse(s) { return s } // console.log\n\
func main() {} // #include <iostream> std::string public interface : number\n\
import os\n\
the architecture layers a service over a database component. \
sql injection must be sanitized for security. \
a poem about the sea, the ocean wave and the tide. \
a robot learns to paint. a keyboard with clicky switches for typing. \
suprematism, an art movement of pure color and form. \
fill the jug, pour the water, measure 4 liters. \
sunrise over mountains, warm light in the sky. \
image visual analyze describe. audio sound speech. video frame motion scene. \
multimodal: text and image and multiple modalities.";

/// A response body that passes exactly the four feature-matrix code probes
/// (generation, completion, review, explanation) plus debugging, test
/// generation, documentation and refactoring, while dodging every other
/// keyword predicate. Words are chosen so that loose substrings like "no",
/// "text", "yes", "set" or "art" never appear.
pub const CODE_ONLY: &str = "def add_pair(a, b):  # puts both values together, returns their sum\n    assert add_pair(1, 2) == 3  # guards against the bug\n    return a + b";

/// JSON body for a successful chat completion with the given content.
pub fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 10, "total_tokens": 20 }
    })
}

/// Mount GET /models advertising the given ids.
pub async fn mount_models(server: &MockServer, ids: &[&str]) {
    let data: Vec<serde_json::Value> =
        ids.iter().map(|id| serde_json::json!({ "id": id })).collect();
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "object": "list", "data": data })),
        )
        .mount(server)
        .await;
}

/// Mount a catch-all chat completion answering with `content`.
pub async fn mount_chat_catch_all(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(content)))
        .with_priority(200)
        .mount(server)
        .await;
}

/// Mount a higher-priority chat response for requests whose body contains
/// `needle`.
pub async fn mount_chat_for(server: &MockServer, needle: &str, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(needle))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(content)))
        .with_priority(10)
        .mount(server)
        .await;
}

/// Mount a higher-priority rejection for requests whose body contains
/// `needle`.
pub async fn mount_chat_reject(server: &MockServer, needle: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains(needle))
        .respond_with(ResponseTemplate::new(status))
        .with_priority(10)
        .mount(server)
        .await;
}

/// Mount POST /embeddings with one vector.
pub async fn mount_embeddings(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "embedding": [0.1, 0.2, 0.3] }],
            "model": "test-model",
            "usage": {}
        })))
        .mount(server)
        .await;
}

/// Mount GET /batches answering 200.
pub async fn mount_batches(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/batches"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
        )
        .mount(server)
        .await;
}

/// Mount the full feature-rich endpoint of the boundary scenarios: every
/// probe should come back positive.
pub async fn mount_feature_rich(server: &MockServer, model_ids: &[&str]) {
    mount_models(server, model_ids).await;
    // Structured output and LSP need raw JSON content; serve them before
    // the kitchen sink.
    mount_chat_for(
        server,
        "Respond with only this JSON object",
        r#"{"status": "ok", "count": 3}"#,
    )
    .await;
    mount_chat_for(
        server,
        "JSON-RPC",
        r#"{"jsonrpc": "2.0", "id": 1, "result": {"capabilities": {}}}"#,
    )
    .await;
    // Keep the self-reported name stable instead of the kitchen sink.
    mount_chat_for(server, "Reply with only your model name", "test-model").await;
    mount_chat_catch_all(server, KITCHEN_SINK).await;
    mount_embeddings(server).await;
    mount_batches(server).await;
}

/// Client pointed at a mock server.
pub fn client_for(server: &MockServer) -> ChatClient {
    ChatClient::new(
        Endpoint::new(&server.uri(), "test-key", HashMap::new()),
        Duration::from_secs(10),
    )
}

/// Discovery-mode config pointed at a mock server.
pub fn discovery_config(server: &MockServer, concurrency: u32) -> VerifierConfig {
    VerifierConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        concurrency,
        timeout_seconds: 10,
        ..Default::default()
    }
}

/// Configured-mode config with a single explicit model entry.
pub fn single_model_config(server: &MockServer, model: &str) -> VerifierConfig {
    VerifierConfig {
        timeout_seconds: 10,
        endpoints: vec![EndpointEntry {
            name: "test".to_string(),
            url: server.uri(),
            api_key: "test-key".to_string(),
            model: model.to_string(),
            headers: HashMap::new(),
        }],
        ..Default::default()
    }
}
