use crate::config::Settings;
use crate::config::constants;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Generate Kubernetes manifests from claudernetes.md with Claude.
///
/// Prints the manifest to stdout for Argo CD to consume.
#[derive(Parser, Debug)]
#[command(name = "claudernetes", version, about, long_about = None)]
pub struct Cli {
    /// Instruction document
    #[arg(long, env = "CLAUDERNETES_INSTRUCTIONS", default_value = constants::INSTRUCTION_FILE)]
    pub instructions: PathBuf,

    /// File holding the Anthropic API key
    #[arg(long, env = "CLAUDERNETES_API_KEY_FILE", default_value = constants::API_KEY_FILE)]
    pub api_key_file: PathBuf,

    /// Messages endpoint
    #[arg(long, env = "CLAUDERNETES_API_URL", default_value = constants::API_URL)]
    pub api_url: String,

    /// Model identifier
    #[arg(long, env = "CLAUDERNETES_MODEL", default_value = constants::MODEL)]
    pub model: String,

    /// Maximum output tokens
    #[arg(long, env = "CLAUDERNETES_MAX_TOKENS", default_value_t = constants::MAX_TOKENS)]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[arg(long, env = "CLAUDERNETES_TIMEOUT_SECS", default_value_t = constants::REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Also write a debug log to this file
    #[arg(long, env = "CLAUDERNETES_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            instructions_path: cli.instructions,
            api_key_path: cli.api_key_file,
            api_url: cli.api_url,
            model: cli.model,
            max_tokens: cli.max_tokens,
            timeout: Duration::from_secs(cli.timeout_secs),
            log_file: cli.log_file,
        }
    }
}
