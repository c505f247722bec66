//! Top-level verification orchestrator.
//!
//! Two modes: iterate configured endpoint entries, or discover models on a
//! global endpoint and fan out through a bounded worker pool. Whatever
//! fails along the way, the orchestrator hands back one result per
//! configured model.

use crate::client::{ChatClient, Endpoint};
use crate::config::{ConfigError, VerifierConfig};
use crate::driver::ModelDriver;
use crate::report::VerificationResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Runs verification passes according to one configuration bundle.
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// Run one verification pass.
    ///
    /// Validation failures surface synchronously before any network call;
    /// every other failure mode is folded into the returned results.
    pub async fn run(&self) -> Result<Vec<VerificationResult>, ConfigError> {
        self.config.validate()?;

        if !self.config.endpoints.is_empty() {
            Ok(self.run_configured().await)
        } else if !self.config.base_url.is_empty() {
            Ok(self.run_discovery().await)
        } else {
            Err(ConfigError::Validation {
                field: "endpoints".to_string(),
                message: "no endpoints configured and no base_url for discovery".to_string(),
            })
        }
    }

    /// Configured mode: entries run sequentially; an entry without a model
    /// id discovers the endpoint's models and drives each in turn.
    async fn run_configured(&self) -> Vec<VerificationResult> {
        let mut results = Vec::new();
        let mut expected = Vec::new();

        for entry in &self.config.endpoints {
            let endpoint = Endpoint::new(&entry.url, &entry.api_key, entry.headers.clone());
            let endpoint_url = endpoint.base_url().to_string();
            let driver = ModelDriver::new(ChatClient::new(endpoint, self.config.timeout()));

            if entry.discovers() {
                match driver.client().list_models(None).await {
                    Ok(models) => {
                        for model in models {
                            expected.push((endpoint_url.clone(), model.id.clone()));
                            results.push(driver.verify(&model.id).await);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(endpoint = %entry.url, error = %e, "model discovery failed");
                        results.push(VerificationResult::unreachable(
                            &endpoint_url,
                            &entry.name,
                            &format!("model discovery failed: {e}"),
                        ));
                    }
                }
            } else {
                expected.push((endpoint_url.clone(), entry.model.clone()));
                results.push(driver.verify(&entry.model).await);
            }
        }

        ensure_completeness(&expected, &mut results);
        results
    }

    /// Discovery mode: list models once, then fan out through a pool of
    /// `concurrency` workers gated by a semaphore. Result order is
    /// non-deterministic when the pool has capacity above one.
    async fn run_discovery(&self) -> Vec<VerificationResult> {
        let endpoint = Endpoint::new(&self.config.base_url, &self.config.api_key, HashMap::new());
        let endpoint_url = endpoint.base_url().to_string();
        let client = ChatClient::new(endpoint, self.config.timeout());

        let model_ids: Vec<String> = match client.list_models(None).await {
            Ok(models) => models.into_iter().map(|m| m.id).collect(),
            Err(e) => {
                tracing::warn!(endpoint = %endpoint_url, error = %e, "model discovery failed");
                return vec![VerificationResult::unreachable(
                    &endpoint_url,
                    &self.config.default_model,
                    &format!("model discovery failed: {e}"),
                )];
            }
        };

        tracing::info!(
            endpoint = %endpoint_url,
            models = model_ids.len(),
            concurrency = self.config.concurrency,
            "starting discovery verification"
        );

        let concurrency = self.config.concurrency.max(1) as usize;
        let semaphore = Arc::new(Semaphore::new(concurrency));
        let collected = Arc::new(Mutex::new(Vec::with_capacity(model_ids.len())));
        let driver = Arc::new(ModelDriver::new(client));

        let mut handles = Vec::with_capacity(model_ids.len());
        for model_id in &model_ids {
            let semaphore = Arc::clone(&semaphore);
            let collected = Arc::clone(&collected);
            let driver = Arc::clone(&driver);
            let model_id = model_id.clone();

            handles.push(tokio::spawn(async move {
                // Closing the semaphore is not part of this design, so the
                // acquire can only fail if the pool itself is gone.
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                let result = driver.verify(&model_id).await;
                collected
                    .lock()
                    .expect("results lock poisoned")
                    .push(result);
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "verification worker panicked");
            }
        }

        let mut results = std::mem::take(&mut *collected.lock().expect("results lock poisoned"));

        let expected: Vec<(String, String)> = model_ids
            .into_iter()
            .map(|id| (endpoint_url.clone(), id))
            .collect();
        ensure_completeness(&expected, &mut results);
        results
    }
}

/// Append one synthetic error result per expected (endpoint, model) pair
/// missing from the collected results. No configured model may be silently
/// dropped.
fn ensure_completeness(expected: &[(String, String)], results: &mut Vec<VerificationResult>) {
    for (endpoint, model_id) in expected {
        let present = results
            .iter()
            .any(|r| &r.model_info.endpoint == endpoint && &r.model_info.id == model_id);
        if !present {
            tracing::warn!(model = %model_id, endpoint = %endpoint, "model missing from results");
            results.push(VerificationResult::unreachable(
                endpoint,
                model_id,
                "verification produced no result for this model",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(e, m)| (e.to_string(), m.to_string()))
            .collect()
    }

    #[test]
    fn completeness_fills_missing_models() {
        let expected = expected(&[("http://e", "a"), ("http://e", "b")]);
        let mut results = vec![VerificationResult::new("http://e", "a")];

        ensure_completeness(&expected, &mut results);

        assert_eq!(results.len(), 2);
        let synthetic = &results[1];
        assert_eq!(synthetic.model_info.id, "b");
        assert!(!synthetic.availability.exists);
        assert!(!synthetic.availability.responsive);
        assert!(!synthetic.availability.error.is_empty());
    }

    #[test]
    fn completeness_keeps_full_results_untouched() {
        let expected = expected(&[("http://e", "a")]);
        let mut results = vec![VerificationResult::new("http://e", "a")];
        ensure_completeness(&expected, &mut results);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn completeness_distinguishes_endpoints() {
        let expected = expected(&[("http://e1", "a"), ("http://e2", "a")]);
        let mut results = vec![VerificationResult::new("http://e1", "a")];
        ensure_completeness(&expected, &mut results);
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].model_info.endpoint, "http://e2");
    }

    #[tokio::test]
    async fn run_without_targets_is_a_validation_error() {
        let verifier = Verifier::new(VerifierConfig::default());
        let err = verifier.run().await.unwrap_err();
        assert!(matches!(err, ConfigError::Validation { field, .. } if field == "endpoints"));
    }

    #[tokio::test]
    async fn run_with_invalid_concurrency_fails_before_network() {
        let config = VerifierConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            concurrency: 0,
            ..Default::default()
        };
        let err = Verifier::new(config).run().await.unwrap_err();
        assert!(matches!(err, ConfigError::Validation { field, .. } if field == "concurrency"));
    }
}
