//! Result entities produced by a verification pass.
//!
//! A `VerificationResult` is constructed empty by the model driver, mutated
//! only by that driver while the per-model pipeline runs, and immutable once
//! handed to the caller. One result per (endpoint, model) pair per pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and advertised metadata of a probed model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Opaque identifier as advertised by the endpoint's model list.
    pub id: String,
    /// Base URL of the endpoint that advertised the model.
    pub endpoint: String,
    /// Self-reported name when elicitation succeeds, otherwise the id.
    pub display_name: String,
    pub context_window: u32,
    pub max_output_tokens: Option<u32>,
    pub supports_vision: bool,
    pub supports_audio: bool,
    pub supports_video: bool,
    pub supports_reasoning: bool,
    pub tags: Vec<String>,
    pub checked_at: DateTime<Utc>,
}

/// Availability outcome of the existence and responsiveness phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub exists: bool,
    pub responsive: bool,
    pub overloaded: bool,
    /// Latency of the single responsiveness probe, milliseconds.
    pub latency_ms: f64,
    pub last_checked: DateTime<Utc>,
    /// Empty on success.
    pub error: String,
}

/// Latency distribution measured by the overload characterizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseTimeStats {
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub p95_ms: f64,
    /// Requests per second over the burst.
    pub throughput: f64,
    /// Number of successful measurements contributing to the stats.
    pub measurement_count: usize,
}

/// Boolean vector indexed by the probe library's vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureMatrix {
    pub tool_use: bool,
    pub function_calling: bool,
    pub code_generation: bool,
    pub code_completion: bool,
    pub code_review: bool,
    pub code_explanation: bool,
    pub embeddings: bool,
    pub reranking: bool,
    pub image_generation: bool,
    pub audio_generation: bool,
    pub video_generation: bool,
    pub multimodal: bool,
    pub streaming: bool,
    pub json_mode: bool,
    pub structured_output: bool,
    pub reasoning: bool,
    pub parallel_tool_use: bool,
    /// Count of tools offered in the accepted parallel tool-use probe.
    pub max_parallel_calls: u32,
    pub batch_processing: bool,
    pub mcp: bool,
    pub lsp: bool,
    pub acp: bool,
    /// Observed modalities, e.g. ["text", "image"].
    pub modalities: Vec<String>,
}

/// Per-language success rates, percentages in [0,100].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageSuccess {
    pub python: f64,
    pub javascript: f64,
    pub go: f64,
    pub java: f64,
    pub cpp: f64,
    pub typescript: f64,
}

/// Heuristic complexity metrics graded from the complexity probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Maximum handled structural depth, 1-5.
    pub max_depth: u8,
    pub code_quality: f64,
    pub logic_correctness: f64,
    pub runtime_efficiency: f64,
}

impl Default for ComplexityMetrics {
    fn default() -> Self {
        Self {
            max_depth: 1,
            code_quality: 0.0,
            logic_correctness: 0.0,
            runtime_efficiency: 0.0,
        }
    }
}

/// Outcome of the coding assessment phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeCapability {
    pub debugging: bool,
    pub optimization: bool,
    pub test_generation: bool,
    pub documentation: bool,
    pub refactoring: bool,
    pub error_resolution: bool,
    pub architecture: bool,
    pub security: bool,
    pub pattern_recognition: bool,
    pub language_success: LanguageSuccess,
    pub overall_success_rate: f64,
    pub complexity: ComplexityMetrics,
}

/// Outcome of the generative assessment phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerativeCapability {
    pub creative_writing: bool,
    pub storytelling: bool,
    pub content_generation: bool,
    pub artistic_creativity: bool,
    pub problem_solving: bool,
    pub multimodal_generative: bool,
    pub originality: f64,
    pub creativity: f64,
}

/// Six axis scores, each bounded to [0,100].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub overall: f64,
    pub code_capability: f64,
    pub responsiveness: f64,
    pub reliability: f64,
    pub feature_richness: f64,
    pub value_proposition: f64,
}

/// Sub-scores behind the code capability axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeBreakdown {
    pub generation: f64,
    pub completion: f64,
    pub debugging: f64,
    pub review: f64,
    pub test_generation: f64,
    pub documentation: f64,
    pub architecture: f64,
    pub optimization: f64,
    pub complexity: f64,
    pub weighted: f64,
}

/// Sub-scores behind the responsiveness axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponsivenessBreakdown {
    pub latency: f64,
    pub throughput: f64,
    pub consistency: f64,
    pub weighted: f64,
}

/// Sub-scores behind the reliability axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReliabilityBreakdown {
    pub availability: f64,
    pub consistency: f64,
    pub error_rate: f64,
    pub stability: f64,
    pub weighted: f64,
}

/// Sub-scores behind the feature richness axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureRichnessBreakdown {
    pub core: f64,
    pub advanced: f64,
    pub experimental: f64,
    pub generative_bonus: f64,
    pub weighted: f64,
}

/// Full per-axis breakdown for explainability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub code: CodeBreakdown,
    pub responsiveness: ResponsivenessBreakdown,
    pub reliability: ReliabilityBreakdown,
    pub feature_richness: FeatureRichnessBreakdown,
    pub value_proposition: f64,
    pub overall: f64,
}

/// The unit of output of a verification pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub model_info: ModelInfo,
    pub availability: Availability,
    pub response_time: ResponseTimeStats,
    pub features: FeatureMatrix,
    pub code: CodeCapability,
    pub generative: GenerativeCapability,
    pub scores: PerformanceScores,
    pub breakdown: ScoreBreakdown,
}

impl VerificationResult {
    /// Empty result for a (endpoint, model) pair; every block zeroed/false.
    pub fn new(endpoint: &str, model_id: &str) -> Self {
        let now = Utc::now();
        Self {
            model_info: ModelInfo {
                id: model_id.to_string(),
                endpoint: endpoint.to_string(),
                display_name: model_id.to_string(),
                context_window: 0,
                max_output_tokens: None,
                supports_vision: false,
                supports_audio: false,
                supports_video: false,
                supports_reasoning: false,
                tags: Vec::new(),
                checked_at: now,
            },
            availability: Availability {
                exists: false,
                responsive: false,
                overloaded: false,
                latency_ms: 0.0,
                last_checked: now,
                error: String::new(),
            },
            response_time: ResponseTimeStats::default(),
            features: FeatureMatrix::default(),
            code: CodeCapability::default(),
            generative: GenerativeCapability::default(),
            scores: PerformanceScores::default(),
            breakdown: ScoreBreakdown::default(),
        }
    }

    /// Synthetic error result for a model the pass could not reach.
    pub fn unreachable(endpoint: &str, model_id: &str, error: &str) -> Self {
        let mut result = Self::new(endpoint, model_id);
        result.availability.error = error.to_string();
        result
    }

    /// A model is verified iff its overall score is positive, it generates
    /// code, or it streams. The disjunction is deliberately explicit.
    pub fn verified(&self) -> bool {
        self.scores.overall > 0.0 || self.features.code_generation || self.features.streaming
    }
}
