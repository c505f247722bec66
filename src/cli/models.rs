//! Models command implementation

use super::{output, ModelsArgs};
use crate::client::{ChatClient, Endpoint};
use crate::config::VerifierConfig;
use anyhow::Context;
use std::collections::HashMap;

/// List models advertised by the configured endpoint.
pub async fn handle_models(args: &ModelsArgs) -> anyhow::Result<()> {
    let mut config = VerifierConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_env_overrides();

    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    }
    if config.base_url.is_empty() {
        anyhow::bail!("no endpoint configured; pass --base-url or set one in the config file");
    }

    let endpoint = Endpoint::new(&config.base_url, &config.api_key, HashMap::new());
    let endpoint_url = endpoint.base_url().to_string();
    let client = ChatClient::new(endpoint, config.timeout());

    let models: Vec<String> = client
        .list_models(None)
        .await
        .context("failed to list models")?
        .into_iter()
        .map(|m| m.id)
        .collect();

    if args.json {
        println!("{}", output::format_models_json(&endpoint_url, &models));
    } else {
        println!("{}", output::format_models_table(&endpoint_url, &models));
    }

    Ok(())
}
