use reqwest::StatusCode;

use super::error::{InferenceError, Result};
use super::request::{build_request, GenerateContentRequest};
use super::response::{parse_translation, provider_error_message, GenerateContentResponse};
use crate::config::Config;
use crate::state::controller::RequestPayload;
use crate::state::data::TranslationResult;

/// HTTP client for the hosted Gemini model
///
/// Cheap to clone: the underlying reqwest client is reference-counted,
/// so each background task gets its own handle.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for the endpoint, model and key in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Name of the model every request goes to
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one request and return the model's raw text
    ///
    /// Exactly one attempt. Network failures are `Transport`, non-success
    /// statuses are `Status`, and a reply without text is `EmptyResponse`.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        read_reply(status, &body)
    }

    /// Build, send and parse one decode or encode request
    pub async fn translate(&self, payload: RequestPayload) -> Result<TranslationResult> {
        let request = build_request(&payload);

        tracing::debug!("📤 Sending {} request to {}", payload.mode(), self.model);
        let raw = self.generate(&request).await?;
        tracing::debug!("📥 Received {} bytes of model text", raw.len());

        parse_translation(&raw)
    }
}

/// Turn a finished HTTP exchange into the model's raw text
fn read_reply(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(InferenceError::Status {
            status: status.as_u16(),
            message: provider_error_message(body),
        });
    }

    let reply: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| InferenceError::Transport(format!("unreadable provider reply: {}", e)))?;

    reply.into_text()
}

// Implement Debug by hand so the API key never reaches the logs
impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
