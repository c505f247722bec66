//! Configured endpoint entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured (endpoint, model) target. An empty model id means
/// "discover": list the endpoint's models and verify each of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EndpointEntry {
    pub name: String,
    pub url: String,
    pub api_key: String,
    pub model: String,
    pub headers: HashMap<String, String>,
}

impl EndpointEntry {
    /// Whether this entry asks for model discovery instead of a fixed id.
    pub fn discovers(&self) -> bool {
        self.model.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_means_discovery() {
        let mut entry = EndpointEntry::default();
        assert!(entry.discovers());
        entry.model = "alpha".to_string();
        assert!(!entry.discovers());
    }

    #[test]
    fn entry_parses_from_toml() {
        let toml = r#"
        name = "primary"
        url = "https://api.example.com/v1"
        api_key = "sk-test"
        model = "alpha"

        [headers]
        x-org = "acme"
        "#;
        let entry: EndpointEntry = toml::from_str(toml).unwrap();
        assert_eq!(entry.name, "primary");
        assert_eq!(entry.headers.get("x-org").map(String::as_str), Some("acme"));
    }
}
