use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const INSTRUCTIONS: &str = "Deploy nginx with 2 replicas.\nExpose it on port 80.\n";
pub const API_KEY: &str = "sk-ant-cli-test";

/// Throwaway repo checkout plus a mounted secret
pub struct TestEnv {
    _tmp: TempDir,
    pub repo: PathBuf,
    pub key_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let repo = tmp.path().join("repo");
        fs::create_dir_all(&repo).expect("create repo dir");
        let key_file = tmp.path().join("api-key");

        Self {
            _tmp: tmp,
            repo,
            key_file,
        }
    }

    pub fn with_instructions(self) -> Self {
        fs::write(self.repo.join("claudernetes.md"), INSTRUCTIONS).expect("write instructions");
        self
    }

    pub fn with_key(self) -> Self {
        fs::write(&self.key_file, format!("{API_KEY}\n")).expect("write api key");
        self
    }

    /// Binary run from the repo dir against `api_url`
    pub fn cmd(&self, api_url: &str) -> Command {
        let mut cmd = Command::cargo_bin("claudernetes").expect("binary built");
        cmd.current_dir(&self.repo)
            .env_remove("RUST_LOG")
            .env_remove("CLAUDERNETES_INSTRUCTIONS")
            .env_remove("CLAUDERNETES_MODEL")
            .env_remove("CLAUDERNETES_MAX_TOKENS")
            .env_remove("CLAUDERNETES_TIMEOUT_SECS")
            .env_remove("CLAUDERNETES_LOG_FILE")
            .env("CLAUDERNETES_API_KEY_FILE", &self.key_file)
            .env("CLAUDERNETES_API_URL", api_url);
        cmd
    }
}
