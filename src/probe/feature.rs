//! Feature matrix probes: responsiveness, tool use, format/protocol
//! support, multimodal and media capabilities.

use super::{ask, ask_expecting, prompts};
use crate::client::{ChatClient, ChatCompletionRequest, ResponseFormat, Tool};
use crate::report::FeatureMatrix;
use reqwest::Method;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of the single responsiveness probe. Latency is recorded
/// unconditionally, success or not.
#[derive(Debug, Clone)]
pub struct PongOutcome {
    pub responsive: bool,
    pub latency_ms: f64,
    pub error: String,
}

/// "pong" probe: success iff HTTP 200 and at least one choice.
pub async fn pong(client: &ChatClient, model: &str, deadline: Option<Duration>) -> PongOutcome {
    let request = ChatCompletionRequest::user(model, prompts::PONG).with_max_tokens(10);
    let start = Instant::now();
    let result = client.chat_completion(&request, deadline).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    match result {
        Ok(response) if !response.choices.is_empty() => PongOutcome {
            responsive: true,
            latency_ms,
            error: String::new(),
        },
        Ok(_) => PongOutcome {
            responsive: false,
            latency_ms,
            error: "response carried no choices".to_string(),
        },
        Err(e) => PongOutcome {
            responsive: false,
            latency_ms,
            error: e.to_string(),
        },
    }
}

/// Elicit the model's self-reported name. None when the model does not
/// answer usefully; the caller keeps the advertised id in that case.
pub async fn self_identify(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> Option<String> {
    let request = ChatCompletionRequest::user(model, prompts::SELF_IDENTIFY).with_max_tokens(50);
    ask(client, &request, deadline)
        .await
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn weather_tool() -> Tool {
    Tool::function(
        "get_weather",
        "Get the current weather for a city",
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name" }
            },
            "required": ["city"]
        }),
    )
}

fn time_tool() -> Tool {
    Tool::function(
        "get_time",
        "Get the current local time for a city",
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": { "type": "string", "description": "City name" }
            },
            "required": ["city"]
        }),
    )
}

/// Tool use: success iff a request carrying a tool schema is accepted.
async fn tool_use(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::TOOL_USE)
        .with_tools(vec![weather_tool()], serde_json::json!("auto"));
    client.chat_completion(&request, deadline).await.is_ok()
}

/// Function calling: same schema, tool_choice forced to the named function.
async fn function_calling(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::TOOL_USE).with_tools(
        vec![weather_tool()],
        serde_json::json!({"type": "function", "function": {"name": "get_weather"}}),
    );
    client.chat_completion(&request, deadline).await.is_ok()
}

/// Parallel tool use: two schemas offered at once. Returns the offered tool
/// count as max_parallel_calls on acceptance.
async fn parallel_tool_use(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> (bool, u32) {
    let tools = vec![weather_tool(), time_tool()];
    let offered = tools.len() as u32;
    let request = ChatCompletionRequest::user(model, prompts::PARALLEL_TOOL_USE)
        .with_tools(tools, serde_json::json!("auto"));
    match client.chat_completion(&request, deadline).await {
        Ok(_) => (true, offered),
        Err(_) => (false, 0),
    }
}

/// JSON mode: response_format accepted and a choice returned.
async fn json_mode(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::JSON_MODE)
        .with_response_format(ResponseFormat::json_object());
    match client.chat_completion(&request, deadline).await {
        Ok(response) => !response.choices.is_empty(),
        Err(_) => false,
    }
}

/// Structured output: the response content itself must parse as JSON.
async fn structured_output(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::STRUCTURED_OUTPUT);
    match ask(client, &request, deadline).await {
        Some(text) => serde_json::from_str::<serde_json::Value>(text.trim()).is_ok(),
        None => false,
    }
}

/// Streaming: a stream=true request must be accepted. Carried over
/// raw_request because the body arrives as SSE, not JSON.
async fn streaming(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let body = serde_json::json!({
        "model": model,
        "messages": [{"role": "user", "content": prompts::STREAMING}],
        "stream": true,
        "max_tokens": 10,
    });
    match client
        .raw_request(
            Method::POST,
            "chat/completions",
            Some(body),
            &HashMap::new(),
            deadline,
        )
        .await
    {
        Ok((status, _)) => (200..300).contains(&status),
        Err(_) => false,
    }
}

async fn embeddings(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    client
        .embeddings(vec!["hello world".to_string()], model, deadline)
        .await
        .is_ok()
}

/// Reranking: the model must put document B first.
async fn reranking(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::RERANKING);
    match ask(client, &request, deadline).await {
        Some(text) => {
            let lower = text.trim().to_lowercase();
            lower.starts_with('b') || lower.contains("b, a") || lower.contains("b,a")
        }
        None => false,
    }
}

async fn reasoning(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    ask_expecting(client, model, prompts::REASONING, prompts::REASONING_TERMS, deadline).await
}

async fn mcp(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    ask_expecting(client, model, prompts::MCP, prompts::MCP_TERMS, deadline).await
}

/// LSP: the response must be JSON and mention jsonrpc.
async fn lsp(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let request = ChatCompletionRequest::user(model, prompts::LSP);
    match ask(client, &request, deadline).await {
        Some(text) => {
            let trimmed = text.trim();
            serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
                && trimmed.to_lowercase().contains("jsonrpc")
        }
        None => false,
    }
}

/// ACP: five sub-probes, at least three must pass.
async fn acp(client: &ChatClient, model: &str, deadline: Option<Duration>) -> bool {
    let mut passed = 0;
    for (prompt, keywords) in prompts::ACP_SUB_PROBES {
        if ask_expecting(client, model, prompt, keywords, deadline).await {
            passed += 1;
        }
    }
    passed >= 3
}

/// Batch processing: the /batches route must exist and answer 2xx.
async fn batch_processing(client: &ChatClient, _model: &str, deadline: Option<Duration>) -> bool {
    match client
        .raw_request(Method::GET, prompts::BATCH_ROUTE, None, &HashMap::new(), deadline)
        .await
    {
        Ok((status, _)) => (200..300).contains(&status),
        Err(_) => false,
    }
}

/// Run the full probe battery and populate the feature matrix. Probes run
/// sequentially; the burst-level parallelism lives in the overload phase.
pub async fn detect_features(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> FeatureMatrix {
    let mut features = FeatureMatrix::default();

    features.tool_use = tool_use(client, model, deadline).await;
    features.function_calling = function_calling(client, model, deadline).await;
    let (parallel, max_calls) = parallel_tool_use(client, model, deadline).await;
    features.parallel_tool_use = parallel;
    features.max_parallel_calls = max_calls;

    let code = super::code_feature_probes(client, model, deadline).await;
    features.code_generation = code.generation;
    features.code_completion = code.completion;
    features.code_review = code.review;
    features.code_explanation = code.explanation;

    features.json_mode = json_mode(client, model, deadline).await;
    features.structured_output = structured_output(client, model, deadline).await;
    features.streaming = streaming(client, model, deadline).await;
    features.embeddings = embeddings(client, model, deadline).await;
    features.reranking = reranking(client, model, deadline).await;
    features.reasoning = reasoning(client, model, deadline).await;
    features.mcp = mcp(client, model, deadline).await;
    features.lsp = lsp(client, model, deadline).await;
    features.acp = acp(client, model, deadline).await;
    features.batch_processing = batch_processing(client, model, deadline).await;

    features.image_generation =
        ask_expecting(client, model, prompts::IMAGE_CAPABILITY, prompts::IMAGE_TERMS, deadline)
            .await;
    features.audio_generation =
        ask_expecting(client, model, prompts::AUDIO_CAPABILITY, prompts::AUDIO_TERMS, deadline)
            .await;
    features.video_generation =
        ask_expecting(client, model, prompts::VIDEO_CAPABILITY, prompts::VIDEO_TERMS, deadline)
            .await;
    features.multimodal = ask_expecting(
        client,
        model,
        prompts::MULTIMODAL_CAPABILITY,
        prompts::MULTIMODAL_TERMS,
        deadline,
    )
    .await;

    features.modalities.push("text".to_string());
    if features.image_generation {
        features.modalities.push("image".to_string());
    }
    if features.audio_generation {
        features.modalities.push("audio".to_string());
    }
    if features.video_generation {
        features.modalities.push("video".to_string());
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoint;
    use mockito::Server;

    fn client_for(url: String) -> ChatClient {
        ChatClient::new(
            Endpoint::new(&url, "k", HashMap::new()),
            Duration::from_secs(5),
        )
    }

    fn chat_body(content: &str) -> String {
        serde_json::json!({
            "id": "1", "object": "chat.completion", "created": 1, "model": "m",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
        })
        .to_string()
    }

    #[tokio::test]
    async fn pong_success_records_latency() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_body("pong"))
            .create_async()
            .await;

        let client = client_for(server.url());
        let outcome = pong(&client, "m", None).await;
        assert!(outcome.responsive);
        assert!(outcome.latency_ms > 0.0);
        assert!(outcome.error.is_empty());
    }

    #[tokio::test]
    async fn pong_failure_still_records_latency() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(server.url());
        let outcome = pong(&client, "m", None).await;
        assert!(!outcome.responsive);
        assert!(outcome.latency_ms > 0.0);
        assert!(!outcome.error.is_empty());
    }

    #[tokio::test]
    async fn structured_output_requires_parseable_json() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_body(r#"{"status": "ok", "count": 3}"#))
            .expect_at_least(1)
            .create_async()
            .await;

        let client = client_for(server.url());
        assert!(structured_output(&client, "m", None).await);
    }

    #[tokio::test]
    async fn structured_output_rejects_prose() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_body("sure, here is the JSON you asked for"))
            .create_async()
            .await;

        let client = client_for(server.url());
        assert!(!structured_output(&client, "m", None).await);
    }

    #[tokio::test]
    async fn reranking_accepts_b_first() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_body("B, A, C"))
            .create_async()
            .await;

        let client = client_for(server.url());
        assert!(reranking(&client, "m", None).await);
    }

    #[tokio::test]
    async fn batch_probe_accepts_2xx_only() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/batches")
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(server.url());
        assert!(!batch_processing(&client, "m", None).await);
    }

    #[tokio::test]
    async fn parallel_tool_use_reports_offered_count() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(chat_body("ok"))
            .create_async()
            .await;

        let client = client_for(server.url());
        let (accepted, max_calls) = parallel_tool_use(&client, "m", None).await;
        assert!(accepted);
        assert_eq!(max_calls, 2);
    }
}
