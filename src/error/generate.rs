/// Manifest generation error types
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("{file} not found in {dir}")]
    InstructionsNotFound { file: String, dir: PathBuf },
    #[error("Error reading {path}: {source}")]
    InstructionsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("API key not found at {0}")]
    CredentialNotFound(PathBuf),
    #[error("Error reading API key from {path}: {source}")]
    CredentialUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error calling Claude API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Claude API returned {status}. Response: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Unexpected API response format: {shape}. Response: {body}")]
    MalformedResponse { shape: String, body: String },
    #[error("Failed to write manifest: {0}")]
    Output(#[source] std::io::Error),
}

impl GenerateError {
    /// Create a new MalformedResponse error
    pub fn malformed_response(shape: impl Into<String>, body: impl Into<String>) -> Self {
        Self::MalformedResponse {
            shape: shape.into(),
            body: body.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InstructionsNotFound { .. }
            | Self::InstructionsUnreadable { .. }
            | Self::CredentialNotFound(_)
            | Self::CredentialUnreadable { .. }
            | Self::Transport(_)
            | Self::HttpStatus { .. }
            | Self::MalformedResponse { .. }
            | Self::Output(_) => 1,
        }
    }
}

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;
