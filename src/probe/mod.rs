//! Probe library: the atoms of feature and capability detection.
//!
//! Each probe issues one (or a few) chat completions and answers a boolean
//! or scalar question by inspecting the response text. Detection is
//! behavioral because the OpenAI-compatible surface exposes no capability
//! metadata. Probes are independent, idempotent at the protocol level, and
//! never retried; any transport error, non-200, empty choice list, or
//! missed keyword predicate yields false/zero.

mod code;
mod feature;
mod generative;
pub mod prompts;

pub use code::{assess_code, code_feature_probes, grade_complexity, CodeAssessment, CodeFeatures};
pub use feature::{detect_features, pong, self_identify, PongOutcome};
pub use generative::assess_generative;

use crate::client::{ChatClient, ChatCompletionRequest};
use std::time::Duration;

/// Tokens that mark a response as code-like.
const CODE_MARKERS: &[&str] = &["def ", "function", "class ", "import ", "console.log", "func "];

/// True iff the lowercased text looks like it contains code.
pub fn contains_code(text: &str) -> bool {
    contains_any(text, CODE_MARKERS)
}

/// True iff the lowercased text contains any of the keywords.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Issue one completion and return its first-choice content, or None on any
/// failure. The single funnel every text probe goes through.
pub(crate) async fn ask(
    client: &ChatClient,
    request: &ChatCompletionRequest,
    deadline: Option<Duration>,
) -> Option<String> {
    match client.chat_completion(request, deadline).await {
        Ok(response) => response.first_content().map(str::to_string),
        Err(e) => {
            tracing::debug!(model = %request.model, error = %e, "probe request failed");
            None
        }
    }
}

/// Ask and apply a keyword predicate over the lowercased response.
pub(crate) async fn ask_expecting(
    client: &ChatClient,
    model: &str,
    prompt: &str,
    keywords: &[&str],
    deadline: Option<Duration>,
) -> bool {
    let request = ChatCompletionRequest::user(model, prompt);
    match ask(client, &request, deadline).await {
        Some(text) => contains_any(&text, keywords),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_markers_match_spec_vocabulary() {
        assert!(contains_code("def add(a, b):"));
        assert!(contains_code("FUNCTION reverse(s)"));
        assert!(contains_code("class Foo:"));
        assert!(contains_code("import os"));
        assert!(contains_code("console.log('x')"));
        assert!(contains_code("func main() {}"));
        assert!(!contains_code("here is some prose about programming"));
    }

    #[test]
    fn contains_any_is_case_insensitive() {
        assert!(contains_any("The BUG is here", &["bug"]));
        assert!(!contains_any("all good", &["bug", "error"]));
    }

    #[test]
    fn empty_keyword_list_never_matches() {
        assert!(!contains_any("anything", &[]));
    }
}
