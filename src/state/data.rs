//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the inference layer and the UI layer.

use serde::{Deserialize, Deserializer, Serialize};

/// What the model returned for one decode or encode request
///
/// Built directly from the model's JSON reply. Nothing beyond the shape
/// is checked: a reply without `translation`, or with a `null` one, gives
/// an empty translation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Unicode hieroglyph signs (encode mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hieroglyphs: Option<String>,
    /// Phonetic reading of the signs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    /// French translation
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translation: String,
    /// Short note on context, symbolism or sign choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_context: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An image picked by the user, ready to be sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// File name only (e.g., "stele.jpg")
    pub filename: String,
    /// MIME type sniffed from the bytes (e.g., "image/png")
    pub mime_type: String,
    /// Raw file contents, forwarded as-is
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Size of the file in bytes
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// Loading indicator shown while a request is in flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reply_parses_camel_case_fields() {
        let json = r#"{"hieroglyphs":"𓇯𓇋","transliteration":"bwnjr","translation":"Bonjour","historicalContext":"Salut."}"#;
        let result: TranslationResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.hieroglyphs.as_deref(), Some("𓇯𓇋"));
        assert_eq!(result.transliteration.as_deref(), Some("bwnjr"));
        assert_eq!(result.translation, "Bonjour");
        assert_eq!(result.historical_context.as_deref(), Some("Salut."));
    }

    #[test]
    fn test_missing_translation_is_empty() {
        let result: TranslationResult =
            serde_json::from_str(r#"{"transliteration":"nfr"}"#).unwrap();

        assert_eq!(result.translation, "");
        assert_eq!(result.transliteration.as_deref(), Some("nfr"));
        assert!(result.hieroglyphs.is_none());
    }

    #[test]
    fn test_null_translation_is_empty() {
        let result: TranslationResult =
            serde_json::from_str(r#"{"translation":null,"transliteration":null}"#).unwrap();

        assert_eq!(result, TranslationResult::default());
    }

    #[test]
    fn test_absent_fields_stay_absent_after_serialization() {
        let result = TranslationResult {
            translation: "Vie, force, santé".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"translation":"Vie, force, santé"}"#);
        let restored: TranslationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
