//! Constants for claudernetes

/// Instruction document looked up in the working directory
pub const INSTRUCTION_FILE: &str = "claudernetes.md";

/// Mount point of the Anthropic API key secret
pub const API_KEY_FILE: &str = "/var/run/secrets/anthropic-api-key/api-key";

/// Messages endpoint
pub const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Value of the `anthropic-version` header
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const MODEL: &str = "claude-sonnet-4-5-20250929";

pub const MAX_TOKENS: u32 = 4096;

/// Bound on the whole request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Body prefix kept in diagnostics
pub const DIAGNOSTIC_BODY_LIMIT: usize = 500;

pub const USER_AGENT: &str = concat!("claudernetes/", env!("CARGO_PKG_VERSION"));

/// System prompt sent with every request
pub const SYSTEM_PROMPT: &str = "You are an expert Site Reliability Engineer and Kubernetes architect.

Your task is to generate production-ready Kubernetes manifests based on user instructions.

Requirements:
- Generate valid, idiomatic Kubernetes YAML
- Follow best practices (resource limits, security contexts, labels, etc.)
- Use appropriate API versions (apps/v1, v1, etc.)
- Include helpful comments explaining configuration choices
- Ensure manifests are deployable to a standard Kubernetes cluster
- Output ONLY valid YAML - no markdown code blocks, no explanations
- Multiple resources should be separated by '---'

Be concise but complete. Prioritize correctness and production-readiness.";
