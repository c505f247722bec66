//! Verify command implementation

use super::{output, VerifyArgs};
use crate::config::{EndpointEntry, VerifierConfig};
use crate::verifier::Verifier;
use anyhow::Context;
use std::collections::HashMap;

/// Resolve the effective configuration from file, environment and flags.
fn resolve_config(args: &VerifyArgs) -> anyhow::Result<VerifierConfig> {
    let mut config = VerifierConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_env_overrides();

    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = timeout;
    }

    // A --model flag narrows the pass to that single model on the global
    // endpoint, replacing any configured entries.
    if let Some(model) = &args.model {
        config.endpoints = vec![EndpointEntry {
            name: "cli".to_string(),
            url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: model.clone(),
            headers: HashMap::new(),
        }];
    }

    Ok(config)
}

/// Run a verification pass and print the results.
pub async fn handle_verify(args: &VerifyArgs) -> anyhow::Result<()> {
    let config = resolve_config(args)?;
    crate::logging::init(&config.logging);

    let verifier = Verifier::new(config);
    let results = verifier.run().await.context("verification failed")?;

    if args.json {
        println!("{}", output::format_results_json(&results));
    } else {
        println!("{}", output::format_results_table(&results));
        let verified = results.iter().filter(|r| r.verified()).count();
        println!("{} of {} models verified", verified, results.len());

        let issues = crate::report::detect_issues(&results);
        if !issues.is_empty() {
            println!("{}", output::format_issues(&issues));
        }
    }

    Ok(())
}
