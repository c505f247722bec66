//! Provider tagging for exporter routing.
//!
//! Downstream config exporters group results by provider. The endpoint URL
//! is matched against an ordered (pattern, tag) list; iteration is
//! longest-pattern-first so `codestral.mistral.ai` wins over `mistral.ai`.

/// Ordered by descending pattern length. Keep it that way when adding
/// entries; `provider_tag` relies on first-match semantics.
pub const PROVIDER_TAGS: &[(&str, &str)] = &[
    ("generativelanguage.googleapis.com", "google"),
    ("codestral.mistral.ai", "codestral"),
    ("api.anthropic.com", "anthropic"),
    ("api.deepseek.com", "deepseek"),
    ("api.together.xyz", "together"),
    ("api.mistral.ai", "mistral"),
    ("api.openai.com", "openai"),
    ("openrouter.ai", "openrouter"),
    ("api.groq.com", "groq"),
    ("mistral.ai", "mistral"),
    ("127.0.0.1", "local"),
    ("localhost", "local"),
];

/// Tag for the provider behind an endpoint URL, if recognized.
pub fn provider_tag(endpoint_url: &str) -> Option<&'static str> {
    let url = endpoint_url.to_lowercase();
    PROVIDER_TAGS
        .iter()
        .find(|(pattern, _)| url.contains(pattern))
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_longest_pattern_first() {
        for window in PROVIDER_TAGS.windows(2) {
            assert!(
                window[0].0.len() >= window[1].0.len(),
                "{} must come before {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn codestral_wins_over_mistral() {
        assert_eq!(
            provider_tag("https://codestral.mistral.ai/v1"),
            Some("codestral")
        );
        assert_eq!(provider_tag("https://api.mistral.ai/v1"), Some("mistral"));
        assert_eq!(provider_tag("https://mistral.ai/v1"), Some("mistral"));
    }

    #[test]
    fn local_endpoints_tagged_local() {
        assert_eq!(provider_tag("http://localhost:11434/v1"), Some("local"));
        assert_eq!(provider_tag("http://127.0.0.1:8000/v1"), Some("local"));
    }

    #[test]
    fn unknown_host_has_no_tag() {
        assert_eq!(provider_tag("https://example.com/v1"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(provider_tag("https://API.OpenAI.com/v1"), Some("openai"));
    }
}
