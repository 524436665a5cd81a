use crate::error::{GenerateError, GenerateResult};
use secrecy::SecretString;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read the API key from its mounted secret file, trimming surrounding whitespace.
pub async fn read_api_key(path: &Path) -> GenerateResult<SecretString> {
    debug!("Reading API key from {:?}", path);

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            GenerateError::CredentialNotFound(path.to_path_buf())
        } else {
            GenerateError::CredentialUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let key = raw.trim();
    if key.is_empty() {
        warn!("API key file {} is empty", path.display());
    }

    Ok(SecretString::from(key.to_string()))
}
