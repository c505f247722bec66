//! CLI module for Sentinel
//!
//! Command-line interface definitions and handlers for the verification
//! engine.
//!
//! # Commands
//!
//! - `verify` - Run a verification pass and print the results
//! - `models` - List models advertised by the configured endpoint
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Verify every model an endpoint advertises, four at a time
//! sentinel verify --base-url https://api.example.com/v1 --api-key sk-... --concurrency 4
//!
//! # Verify one model and emit machine-readable output
//! sentinel verify --model alpha --json
//! ```

pub mod completions;
pub mod config;
pub mod models;
pub mod output;
pub mod verify;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use models::handle_models;
pub use verify::handle_verify;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sentinel - verification engine for OpenAI-compatible endpoints
#[derive(Parser, Debug)]
#[command(
    name = "sentinel",
    version,
    about = "Probe, score and rank models behind OpenAI-compatible endpoints"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a verification pass
    Verify(VerifyArgs),
    /// List models advertised by an endpoint
    Models(ModelsArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the global endpoint base URL
    #[arg(long, env = "SENTINEL_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the global API key
    #[arg(long, env = "SENTINEL_API_KEY")]
    pub api_key: Option<String>,

    /// Verify only this model instead of the configured targets
    #[arg(short, long)]
    pub model: Option<String>,

    /// Worker pool size for discovery mode (1-100)
    #[arg(long)]
    pub concurrency: Option<u32>,

    /// Global HTTP timeout in seconds (1-600)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Emit results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the endpoint base URL
    #[arg(long, env = "SENTINEL_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the API key
    #[arg(long, env = "SENTINEL_API_KEY")]
    pub api_key: Option<String>,

    /// Emit the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a commented example configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the example configuration
    #[arg(short, long, default_value = "sentinel.toml")]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
