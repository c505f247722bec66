//! Generative capability probes and the originality/creativity heuristics.

use super::{ask, contains_any, prompts};
use crate::client::{ChatClient, ChatCompletionRequest};
use crate::report::GenerativeCapability;
use std::collections::HashSet;
use std::time::Duration;

async fn generative_probe(
    client: &ChatClient,
    model: &str,
    prompt: &str,
    keywords: &[&str],
    deadline: Option<Duration>,
) -> (bool, Option<String>) {
    let request = ChatCompletionRequest::user(model, prompt);
    match ask(client, &request, deadline).await {
        Some(text) => (contains_any(&text, keywords), Some(text)),
        None => (false, None),
    }
}

/// Run the six generative probes and derive the two scalar scores.
///
/// Creativity is the fraction of probes passed; originality is the lexical
/// diversity of the creative-writing response. Both land in [0,100].
pub async fn assess_generative(
    client: &ChatClient,
    model: &str,
    deadline: Option<Duration>,
) -> GenerativeCapability {
    let (creative_writing, writing_text) = generative_probe(
        client,
        model,
        prompts::CREATIVE_WRITING,
        prompts::CREATIVE_WRITING_TERMS,
        deadline,
    )
    .await;
    let (storytelling, _) = generative_probe(
        client,
        model,
        prompts::STORYTELLING,
        prompts::STORYTELLING_TERMS,
        deadline,
    )
    .await;
    let (content_generation, _) = generative_probe(
        client,
        model,
        prompts::CONTENT_GENERATION,
        prompts::CONTENT_GENERATION_TERMS,
        deadline,
    )
    .await;
    let (artistic_creativity, _) = generative_probe(
        client,
        model,
        prompts::ARTISTIC_CREATIVITY,
        prompts::ARTISTIC_CREATIVITY_TERMS,
        deadline,
    )
    .await;
    let (problem_solving, _) = generative_probe(
        client,
        model,
        prompts::PROBLEM_SOLVING,
        prompts::PROBLEM_SOLVING_TERMS,
        deadline,
    )
    .await;
    let (multimodal_generative, _) = generative_probe(
        client,
        model,
        prompts::MULTIMODAL_GENERATIVE,
        prompts::MULTIMODAL_GENERATIVE_TERMS,
        deadline,
    )
    .await;

    let passed = [
        creative_writing,
        storytelling,
        content_generation,
        artistic_creativity,
        problem_solving,
        multimodal_generative,
    ]
    .iter()
    .filter(|&&b| b)
    .count();

    GenerativeCapability {
        creative_writing,
        storytelling,
        content_generation,
        artistic_creativity,
        problem_solving,
        multimodal_generative,
        originality: writing_text.as_deref().map_or(0.0, lexical_diversity),
        creativity: passed as f64 / 6.0 * 100.0,
    }
}

/// Distinct-word ratio of a text, scaled to [0,100].
pub fn lexical_diversity(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    (distinct.len() as f64 / words.len() as f64 * 100.0).min(100.0)
}
