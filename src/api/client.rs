use crate::api::types::{MessagesRequest, MessagesResponse};
use crate::config::Settings;
use crate::config::constants::{
    ANTHROPIC_VERSION, DIAGNOSTIC_BODY_LIMIT, SYSTEM_PROMPT, USER_AGENT,
};
use crate::error::{GenerateError, GenerateResult};
use crate::util::text::truncate_for_display;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

/// Client for a single Messages API call
pub struct ApiClient {
    client: reqwest::Client,
    url: String,
    model: String,
    max_tokens: u32,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> GenerateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: settings.api_url.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    /// Send `instructions` as the only user message and return the text of the
    /// first content block of the reply.
    pub async fn generate(
        &self,
        api_key: &SecretString,
        instructions: &str,
    ) -> GenerateResult<String> {
        let body =
            MessagesRequest::single_turn(&self.model, self.max_tokens, SYSTEM_PROMPT, instructions);

        info!("Requesting manifest from {} with model {}", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        debug!("API responded {} with {} bytes", status, response_text.len());

        if !status.is_success() {
            return Err(GenerateError::HttpStatus {
                status,
                body: response_text,
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&response_text).map_err(|e| {
            GenerateError::malformed_response(
                e.to_string(),
                truncate_for_display(&response_text, DIAGNOSTIC_BODY_LIMIT),
            )
        })?;

        parsed.into_first_text().map_err(|shape| {
            GenerateError::malformed_response(
                shape,
                truncate_for_display(&response_text, DIAGNOSTIC_BODY_LIMIT),
            )
        })
    }
}
