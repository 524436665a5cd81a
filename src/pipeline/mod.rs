//! Generation pipeline: instructions, credential, API call.
use crate::api::ApiClient;
use crate::config::Settings;
use crate::core::{read_api_key, read_instructions};
use crate::error::GenerateResult;
use tracing::info;

/// Run the pipeline and return the manifest text.
///
/// The credential is loaded before the client is built, so a missing key
/// never reaches the network. Nothing is written to stdout here.
pub async fn generate_manifest(settings: &Settings) -> GenerateResult<String> {
    let instructions = read_instructions(&settings.instructions_path).await?;
    let api_key = read_api_key(&settings.api_key_path).await?;

    let client = ApiClient::new(settings)?;
    let manifest = client.generate(&api_key, &instructions).await?;

    info!("Generated manifest ({} bytes)", manifest.len());
    Ok(manifest)
}
