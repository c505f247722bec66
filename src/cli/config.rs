//! Config command handlers

use super::ConfigInitArgs;

const EXAMPLE_CONFIG: &str = r#"# Sentinel configuration

# Global endpoint, used by discovery mode and as the CLI default.
base_url = "https://api.example.com/v1"
api_key = "sk-your-key"

# Model driven by `sentinel verify --model` when not overridden.
default_model = ""

# Worker pool size for discovery mode (1-100).
concurrency = 4

# Global HTTP timeout in seconds (1-600).
timeout_seconds = 30

[logging]
level = "info"
format = "pretty"   # or "json"

# Explicit verification targets. Leave `model` empty to verify every model
# the endpoint advertises.
#
# [[endpoints]]
# name = "primary"
# url = "https://api.example.com/v1"
# api_key = "sk-your-key"
# model = "alpha"
#
# [endpoints.headers]
# x-org = "acme"
"#;

/// Write a commented example configuration file.
pub fn handle_config_init(args: &ConfigInitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            args.output.display()
        );
    }

    std::fs::write(&args.output, EXAMPLE_CONFIG)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
