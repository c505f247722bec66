//! Scoring engine: pure, deterministic functions from a populated result
//! to six bounded axis scores and an explainability breakdown.

use crate::report::{
    CodeBreakdown, FeatureRichnessBreakdown, GenerativeCapability, PerformanceScores,
    ReliabilityBreakdown, ResponsivenessBreakdown, ScoreBreakdown, VerificationResult,
};

const CODE_WEIGHTS: CodeWeights = CodeWeights {
    generation: 0.15,
    completion: 0.15,
    debugging: 0.12,
    review: 0.12,
    test_generation: 0.10,
    documentation: 0.10,
    architecture: 0.10,
    optimization: 0.08,
    complexity: 0.08,
};

struct CodeWeights {
    generation: f64,
    completion: f64,
    debugging: f64,
    review: f64,
    test_generation: f64,
    documentation: f64,
    architecture: f64,
    optimization: f64,
    complexity: f64,
}

#[cfg(test)]
impl CodeWeights {
    fn sum(&self) -> f64 {
        self.generation
            + self.completion
            + self.debugging
            + self.review
            + self.test_generation
            + self.documentation
            + self.architecture
            + self.optimization
            + self.complexity
    }
}

fn clamp(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn boolean(present: bool) -> f64 {
    if present {
        100.0
    } else {
        0.0
    }
}

/// Compute all axis scores and the breakdown for a result.
///
/// A result whose model does not exist scores zero on every axis; no other
/// state inspects availability here, the driver already gates what runs.
pub fn score(result: &VerificationResult) -> (PerformanceScores, ScoreBreakdown) {
    if !result.availability.exists {
        return (PerformanceScores::default(), ScoreBreakdown::default());
    }

    let code = code_breakdown(result);
    let responsiveness = responsiveness_breakdown(result);
    let reliability = reliability_breakdown(result);
    let generative = generative_score(&result.generative);
    let features = feature_richness_breakdown(result, generative);

    let value_proposition = clamp(
        (code.weighted * 0.5 + responsiveness.weighted * 0.3 + reliability.weighted * 0.2) / 10.0,
    );
    let overall = clamp(
        code.weighted * 0.40
            + responsiveness.weighted * 0.15
            + reliability.weighted * 0.15
            + features.weighted * 0.20
            + value_proposition * 0.10,
    );

    let scores = PerformanceScores {
        overall,
        code_capability: code.weighted,
        responsiveness: responsiveness.weighted,
        reliability: reliability.weighted,
        feature_richness: features.weighted,
        value_proposition,
    };
    let breakdown = ScoreBreakdown {
        code,
        responsiveness,
        reliability,
        feature_richness: features,
        value_proposition,
        overall,
    };
    (scores, breakdown)
}

fn code_breakdown(result: &VerificationResult) -> CodeBreakdown {
    let features = &result.features;
    let code = &result.code;

    // A model that writes code but failed the explicit debugging probe
    // still gets partial credit.
    let debugging = if code.debugging {
        100.0
    } else if features.code_generation || features.code_completion {
        50.0
    } else {
        0.0
    };

    let complexity = (f64::from(code.complexity.max_depth) * 20.0)
        .max(code.complexity.code_quality)
        .min(100.0);

    let generation = boolean(features.code_generation);
    let completion = boolean(features.code_completion);
    let review = boolean(features.code_review);
    let test_generation = boolean(code.test_generation);
    let documentation = boolean(code.documentation);
    let architecture = boolean(code.architecture);
    let optimization = boolean(code.optimization);

    let w = &CODE_WEIGHTS;
    let weighted = clamp(
        generation * w.generation
            + completion * w.completion
            + debugging * w.debugging
            + review * w.review
            + test_generation * w.test_generation
            + documentation * w.documentation
            + architecture * w.architecture
            + optimization * w.optimization
            + complexity * w.complexity,
    );

    CodeBreakdown {
        generation,
        completion,
        debugging,
        review,
        test_generation,
        documentation,
        architecture,
        optimization,
        complexity,
        weighted,
    }
}

fn latency_score(latency_ms: f64) -> f64 {
    if latency_ms <= 1_000.0 {
        100.0
    } else if latency_ms <= 2_000.0 {
        80.0
    } else if latency_ms <= 5_000.0 {
        60.0
    } else if latency_ms <= 10_000.0 {
        30.0
    } else {
        10.0
    }
}

fn throughput_score(throughput: f64) -> f64 {
    if throughput > 10.0 {
        100.0
    } else if throughput > 5.0 {
        80.0
    } else if throughput > 2.0 {
        60.0
    } else if throughput > 1.0 {
        40.0
    } else {
        20.0
    }
}

fn consistency_score(min_ms: f64, max_ms: f64) -> f64 {
    if min_ms <= 0.0 {
        return 100.0;
    }
    clamp(100.0 - 50.0 * (max_ms - min_ms) / min_ms)
}

fn responsiveness_breakdown(result: &VerificationResult) -> ResponsivenessBreakdown {
    let latency = latency_score(result.availability.latency_ms);
    let throughput = throughput_score(result.response_time.throughput);
    let consistency = consistency_score(result.response_time.min_ms, result.response_time.max_ms);
    let weighted = clamp(latency * 0.5 + throughput * 0.3 + consistency * 0.2);
    ResponsivenessBreakdown {
        latency,
        throughput,
        consistency,
        weighted,
    }
}

fn reliability_breakdown(result: &VerificationResult) -> ReliabilityBreakdown {
    let errored = !result.availability.error.is_empty();
    let overloaded = result.availability.overloaded;

    let availability = boolean(result.availability.exists && result.availability.responsive);
    let consistency = if overloaded { 30.0 } else { 100.0 };
    let error_rate = if errored { 20.0 } else { 100.0 };
    let stability = if overloaded || errored { 60.0 } else { 100.0 };
    let weighted = clamp(
        availability * 0.3 + consistency * 0.3 + error_rate * 0.2 + stability * 0.2,
    );
    ReliabilityBreakdown {
        availability,
        consistency,
        error_rate,
        stability,
        weighted,
    }
}

fn bucket(present: usize, total: usize) -> f64 {
    present as f64 / total as f64 * 100.0
}

fn feature_richness_breakdown(
    result: &VerificationResult,
    generative_score: f64,
) -> FeatureRichnessBreakdown {
    let f = &result.features;
    let c = &result.code;

    let core_items = [
        f.code_generation,
        f.code_completion,
        f.code_explanation,
        f.code_review,
        f.tool_use,
        f.streaming,
    ];
    let advanced_items = [
        f.embeddings,
        f.reasoning,
        f.structured_output,
        f.json_mode,
        f.parallel_tool_use,
        f.multimodal,
        c.refactoring,
        c.documentation,
    ];
    let experimental_items = [
        f.mcp,
        f.lsp,
        f.acp,
        f.reranking,
        f.image_generation,
        f.audio_generation,
    ];

    let core = bucket(core_items.iter().filter(|&&b| b).count(), core_items.len());
    let advanced = bucket(
        advanced_items.iter().filter(|&&b| b).count(),
        advanced_items.len(),
    );
    let experimental = bucket(
        experimental_items.iter().filter(|&&b| b).count(),
        experimental_items.len(),
    );
    let generative_bonus = generative_score * 0.10;
    let weighted = clamp(core * 0.4 + advanced * 0.4 + experimental * 0.2 + generative_bonus);

    FeatureRichnessBreakdown {
        core,
        advanced,
        experimental,
        generative_bonus,
        weighted,
    }
}

/// Scalar generative score feeding the feature richness bonus.
pub fn generative_score(generative: &GenerativeCapability) -> f64 {
    clamp((generative.creativity + generative.originality) / 2.0)
}
