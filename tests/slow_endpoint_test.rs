//! Boundary scenario: reachable but slow endpoint that rejects concurrent
//! load. The model must read as existing and responsive, yet overloaded,
//! with a capped responsiveness score.

mod common;

use common::*;
use sentinel::driver::ModelDriver;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn slow_endpoint_reads_as_responsive_but_overloaded() {
    let server = MockServer::start().await;
    mount_models(&server, &["slowpoke"]).await;

    // The first completion succeeds after ~3 seconds; every further
    // request is rejected with 429.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_body("pong"))
                .set_delay(Duration::from_secs(3)),
        )
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .with_priority(100)
        .mount(&server)
        .await;

    let driver = ModelDriver::new(client_for(&server));
    let result = driver.verify("slowpoke").await;

    assert!(result.availability.exists);
    assert!(result.availability.responsive);
    assert!(
        result.availability.latency_ms >= 2_900.0,
        "latency {}",
        result.availability.latency_ms
    );

    // The overload burst saw only 429s.
    assert!(result.availability.overloaded);
    assert_eq!(result.response_time.measurement_count, 0);

    // Every feature probe was rejected.
    assert!(!result.features.code_generation);
    assert!(!result.features.tool_use);
    assert!(!result.features.streaming);

    assert!(
        result.scores.responsiveness <= 60.0,
        "responsiveness {}",
        result.scores.responsiveness
    );
}
