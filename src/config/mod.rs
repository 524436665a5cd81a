pub mod constants;

use std::path::PathBuf;
use std::time::Duration;

/// Effective settings for one generation run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Instruction document, relative paths resolve against the working directory
    pub instructions_path: PathBuf,
    pub api_key_path: PathBuf,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Optional debug log file
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            instructions_path: PathBuf::from(constants::INSTRUCTION_FILE),
            api_key_path: PathBuf::from(constants::API_KEY_FILE),
            api_url: constants::API_URL.to_string(),
            model: constants::MODEL.to_string(),
            max_tokens: constants::MAX_TOKENS,
            timeout: Duration::from_secs(constants::REQUEST_TIMEOUT_SECS),
            log_file: None,
        }
    }
}
