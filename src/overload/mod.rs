//! Overload characterization under concurrent load.
//!
//! A fixed burst of concurrent completions measures the latency
//! distribution and failure rate of one model. The burst is not throttled
//! by the orchestrator's worker pool, so effective in-flight count during
//! this phase is (pool concurrency × burst size).

use crate::client::{ChatClient, ChatCompletionRequest};
use crate::report::ResponseTimeStats;
use std::time::{Duration, Instant};

/// Number of concurrent requests in one burst.
pub const BURST_SIZE: usize = 10;

/// Per-request deadline inside the burst.
pub const REQUEST_DEADLINE: Duration = Duration::from_secs(30);

const OVERLOAD_ERROR_RATE: f64 = 0.5;
const OVERLOAD_AVG_LATENCY_MS: f64 = 10_000.0;

/// Overload judgment plus the measured distribution.
#[derive(Debug, Clone)]
pub struct OverloadOutcome {
    pub overloaded: bool,
    pub stats: ResponseTimeStats,
}

/// Issue the burst and characterize the model under load.
///
/// Prompts carry a millisecond timestamp so request caches cannot serve the
/// burst from one entry. All requests run in parallel; nothing is cancelled
/// on first failure, the burst returns after the last request finishes or
/// times out.
pub async fn characterize(client: &ChatClient, model: &str) -> OverloadOutcome {
    let salt = chrono::Utc::now().timestamp_millis();
    let burst_start = Instant::now();

    let requests = (0..BURST_SIZE).map(|i| {
        let prompt = format!("Reply with 'ok'. Probe {i} issued at {salt}");
        let request = ChatCompletionRequest::user(model, &prompt).with_max_tokens(10);
        async move {
            let start = Instant::now();
            let outcome = client.chat_completion(&request, Some(REQUEST_DEADLINE)).await;
            let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
            outcome.map(|_| latency_ms).map_err(|e| e.to_string())
        }
    });

    let outcomes = futures::future::join_all(requests).await;
    let burst_secs = burst_start.elapsed().as_secs_f64();

    let mut latencies = Vec::with_capacity(BURST_SIZE);
    let mut error_count = 0usize;
    for outcome in outcomes {
        match outcome {
            Ok(latency_ms) => latencies.push(latency_ms),
            Err(error) => {
                tracing::debug!(model, %error, "burst request failed");
                error_count += 1;
            }
        }
    }

    let (overloaded, stats) = aggregate(latencies, error_count, burst_secs);
    tracing::debug!(
        model,
        overloaded,
        successes = stats.measurement_count,
        errors = error_count,
        avg_ms = stats.average_ms,
        "overload characterization complete"
    );
    OverloadOutcome { overloaded, stats }
}

/// Fold raw burst measurements into the distribution and the overload
/// judgment. Throughput is successes over burst wall time, measured across
/// the whole burst rather than the source's sum-of-latencies approximation.
fn aggregate(
    mut latencies: Vec<f64>,
    error_count: usize,
    burst_secs: f64,
) -> (bool, ResponseTimeStats) {
    let total = latencies.len() + error_count;

    if latencies.is_empty() {
        return (true, ResponseTimeStats::default());
    }

    latencies.sort_by(|a, b| a.total_cmp(b));
    let count = latencies.len();
    let sum: f64 = latencies.iter().sum();
    let average_ms = sum / count as f64;
    let p95_index = ((0.95 * count as f64).ceil() as usize).saturating_sub(1);

    let stats = ResponseTimeStats {
        average_ms,
        min_ms: latencies[0],
        max_ms: latencies[count - 1],
        p95_ms: latencies[p95_index],
        throughput: if burst_secs > 0.0 {
            count as f64 / burst_secs
        } else {
            0.0
        },
        measurement_count: count,
    };

    let error_rate = error_count as f64 / total as f64;
    let overloaded = error_rate > OVERLOAD_ERROR_RATE || average_ms > OVERLOAD_AVG_LATENCY_MS;
    (overloaded, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_errors_mean_overloaded_with_zeroed_stats() {
        let (overloaded, stats) = aggregate(vec![], BURST_SIZE, 1.0);
        assert!(overloaded);
        assert_eq!(stats.measurement_count, 0);
        assert_eq!(stats.average_ms, 0.0);
        assert_eq!(stats.throughput, 0.0);
    }

    #[test]
    fn distribution_over_successes_only() {
        let latencies = vec![100.0, 200.0, 300.0, 400.0];
        let (overloaded, stats) = aggregate(latencies, 0, 2.0);
        assert!(!overloaded);
        assert_eq!(stats.measurement_count, 4);
        assert_eq!(stats.average_ms, 250.0);
        assert_eq!(stats.min_ms, 100.0);
        assert_eq!(stats.max_ms, 400.0);
        assert_eq!(stats.throughput, 2.0);
    }

    #[test]
    fn p95_index_is_ceil_rule() {
        // ceil(0.95 * 4) - 1 = 3 -> the max
        let (_, stats) = aggregate(vec![100.0, 200.0, 300.0, 400.0], 0, 1.0);
        assert_eq!(stats.p95_ms, 400.0);

        // Single measurement: ceil(0.95) - 1 = 0
        let (_, stats) = aggregate(vec![150.0], 0, 1.0);
        assert_eq!(stats.p95_ms, 150.0);

        // Ten measurements: ceil(9.5) - 1 = index 9
        let latencies: Vec<f64> = (1..=10).map(|i| i as f64 * 10.0).collect();
        let (_, stats) = aggregate(latencies, 0, 1.0);
        assert_eq!(stats.p95_ms, 100.0);
    }

    #[test]
    fn error_rate_above_half_is_overloaded() {
        // 4 successes, 6 errors: rate 0.6
        let latencies = vec![200.0, 300.0, 400.0, 500.0];
        let (overloaded, stats) = aggregate(latencies, 6, 1.0);
        assert!(overloaded);
        assert_eq!(stats.measurement_count, 4);
        assert!(stats.min_ms <= stats.average_ms && stats.average_ms <= stats.max_ms);
        assert!(stats.min_ms <= stats.p95_ms && stats.p95_ms <= stats.max_ms);
    }

    #[test]
    fn exactly_half_errors_is_not_overloaded() {
        let latencies = vec![100.0, 100.0, 100.0, 100.0, 100.0];
        let (overloaded, _) = aggregate(latencies, 5, 1.0);
        assert!(!overloaded);
    }

    #[test]
    fn slow_average_is_overloaded_without_errors() {
        let latencies = vec![11_000.0; 10];
        let (overloaded, stats) = aggregate(latencies, 0, 11.0);
        assert!(overloaded);
        assert_eq!(stats.measurement_count, 10);
    }

    #[test]
    fn ordering_invariants_hold() {
        let latencies = vec![321.0, 123.0, 222.0, 280.0, 199.0];
        let (_, stats) = aggregate(latencies, 2, 0.5);
        assert!(stats.min_ms <= stats.average_ms);
        assert!(stats.average_ms <= stats.max_ms);
        assert!(stats.min_ms <= stats.p95_ms);
        assert!(stats.p95_ms <= stats.max_ms);
    }
}
