//! Per-model verification pipeline.
//!
//! The driver runs the probe phases in a fixed order and converts every
//! stage failure into a partial result instead of an abort. Only a failed
//! existence check or a non-responsive model short-circuits; everything
//! else degrades progressively, leaving the corresponding result section
//! zeroed while the pipeline continues.

use crate::client::ChatClient;
use crate::overload;
use crate::probe;
use crate::report::{provider_tag, VerificationResult};
use crate::score;
use chrono::Utc;
use std::time::Duration;

/// Drives the probe sequence for single models against one endpoint.
pub struct ModelDriver {
    client: ChatClient,
    /// Deadline handed to each probe; None lets the client timeout rule.
    probe_deadline: Option<Duration>,
}

impl ModelDriver {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client,
            probe_deadline: None,
        }
    }

    /// Tighten the per-probe deadline below the client timeout.
    pub fn with_probe_deadline(mut self, deadline: Duration) -> Self {
        self.probe_deadline = Some(deadline);
        self
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// Run the full pipeline for one model and return its frozen result.
    pub async fn verify(&self, model_id: &str) -> VerificationResult {
        let endpoint = self.client.base_url().to_string();
        let mut result = VerificationResult::new(&endpoint, model_id);
        if let Some(tag) = provider_tag(&endpoint) {
            result.model_info.tags.push(tag.to_string());
        }
        tracing::info!(model = model_id, endpoint = %endpoint, "verifying model");

        // Phase 1: existence.
        match self.client.list_models(self.probe_deadline).await {
            Ok(models) => {
                result.availability.exists = models.iter().any(|m| m.id == model_id);
                if !result.availability.exists {
                    result.availability.error =
                        format!("model '{model_id}' not advertised by endpoint");
                    result.availability.last_checked = Utc::now();
                    tracing::warn!(model = model_id, "model not found in endpoint list");
                    return result;
                }
            }
            Err(e) => {
                result.availability.error = format!("model lookup failed: {e}");
                result.availability.last_checked = Utc::now();
                tracing::warn!(model = model_id, error = %e, "model lookup failed");
                return result;
            }
        }

        // Phase 2: responsiveness. Latency is kept even on failure.
        let pong = probe::pong(&self.client, model_id, self.probe_deadline).await;
        result.availability.responsive = pong.responsive;
        result.availability.latency_ms = pong.latency_ms;
        result.availability.error = pong.error;
        result.availability.last_checked = Utc::now();
        if !result.availability.responsive {
            tracing::warn!(
                model = model_id,
                error = %result.availability.error,
                "model not responsive"
            );
            return result;
        }

        // Phase 3: overload characterization.
        let load = overload::characterize(&self.client, model_id).await;
        result.availability.overloaded = load.overloaded;
        result.response_time = load.stats;

        // Phase 4: model detail. Failure keeps the advertised id.
        if let Some(name) = probe::self_identify(&self.client, model_id, self.probe_deadline).await
        {
            result.model_info.display_name = name;
        }

        // Phase 5: feature matrix.
        result.features =
            probe::detect_features(&self.client, model_id, self.probe_deadline).await;
        result.model_info.supports_vision = result.features.image_generation;
        result.model_info.supports_audio = result.features.audio_generation;
        result.model_info.supports_video = result.features.video_generation;
        result.model_info.supports_reasoning = result.features.reasoning;

        // Phase 6: coding assessment.
        let assessment = probe::assess_code(&self.client, model_id, self.probe_deadline).await;
        result.code.debugging = assessment.debugging;
        result.code.optimization = assessment.optimization;
        result.code.test_generation = assessment.test_generation;
        result.code.documentation = assessment.documentation;
        result.code.refactoring = assessment.refactoring;
        result.code.error_resolution = assessment.error_resolution;
        result.code.architecture = assessment.architecture;
        result.code.security = assessment.security;
        result.code.pattern_recognition = assessment.pattern_recognition;
        result.code.language_success = assessment.language_success;
        result.code.overall_success_rate = assessment.overall_success_rate;
        result.code.complexity = assessment.complexity;

        // Phase 7: generative assessment.
        result.generative =
            probe::assess_generative(&self.client, model_id, self.probe_deadline).await;

        // Phase 8: scoring.
        let (scores, breakdown) = score::score(&result);
        result.scores = scores;
        result.breakdown = breakdown;
        result.model_info.checked_at = Utc::now();

        tracing::info!(
            model = model_id,
            overall = result.scores.overall,
            overloaded = result.availability.overloaded,
            "verification complete"
        );
        result
    }
}
