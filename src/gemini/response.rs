//! Reply handling for `generateContent`
//!
//! Two layers: the provider's envelope (candidates → content → parts),
//! and the model's own text, which must be a JSON translation record.
use serde::Deserialize;

use super::error::{InferenceError, Result};
use crate::state::data::TranslationResult;

/// Provider reply envelope (only the fields the app reads)
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer
    #[serde(default)]
    pub thought: Option<bool>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Provider error body: `{"error": {"code": 400, "message": "...", "status": "..."}}`
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all answer parts joined
    ///
    /// Fails with `EmptyResponse` when there is no candidate or the
    /// candidate carries no text.
    pub fn into_text(self) -> Result<String> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                tracing::warn!("🚫 Prompt blocked by provider: {}", reason);
            }
            return Err(InferenceError::EmptyResponse);
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            if let Some(reason) = candidate.finish_reason {
                tracing::warn!("🚫 Candidate finished without text: {}", reason);
            }
            return Err(InferenceError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Human-readable reason out of a non-success reply body
///
/// Falls back to the raw body when it is not the provider's error shape.
pub fn provider_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(status) => format!("{} ({})", parsed.error.message, status),
            None => parsed.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

/// Decode the model's text as a translation record
///
/// The whole text must be one JSON object. Absent optional fields stay
/// absent; no other validation is done.
pub fn parse_translation(raw: &str) -> Result<TranslationResult> {
    Ok(serde_json::from_str(raw)?)
}
