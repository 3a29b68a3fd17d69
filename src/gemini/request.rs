//! Request bodies for the `generateContent` endpoint
//!
//! Both operations ask the model for a bare JSON object (no markdown
//! fencing) by setting `responseMimeType` in the generation config.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::state::controller::RequestPayload;

/// Reply format requested from the model
const JSON_MIME_TYPE: &str = "application/json";

/// Instructions sent alongside a photograph of hieroglyphs
const DECODE_PROMPT: &str = "Agis comme un expert égyptologue de renommée mondiale.
Analyse cette image contenant des hiéroglyphes égyptiens.

Fournis une réponse structurée au format JSON (sans balises markdown json) avec les champs suivants:
1. \"transliteration\": La translittération phonétique des signes.
2. \"translation\": La traduction précise en français.
3. \"historicalContext\": Une brève explication du contexte, de la signification symbolique ou de la période probable (max 3 phrases).

Si l'image ne contient pas de hiéroglyphes clairs, indique-le dans la traduction.";

/// Full `generateContent` request body
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// One conversation turn
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A piece of a turn: either prompt text or inline binary data
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(Blob),
}

/// Base64-encoded bytes tagged with their MIME type
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// Single user turn made of `parts`, asking for a JSON reply
    fn user_turn(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE.to_string(),
            },
        }
    }
}

/// Build the request that reads hieroglyphs off a photograph
///
/// The bytes are forwarded untouched; nothing checks that they really
/// are an image of the declared type.
pub fn build_decode_request(image_bytes: &[u8], mime_type: &str) -> GenerateContentRequest {
    GenerateContentRequest::user_turn(vec![
        Part::InlineData(Blob {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(image_bytes),
        }),
        Part::Text(DECODE_PROMPT.to_string()),
    ])
}

/// Build the request that writes French text in hieroglyphs
///
/// `text` is interpolated into the prompt exactly as typed, without escaping.
pub fn build_encode_request(text: &str) -> GenerateContentRequest {
    GenerateContentRequest::user_turn(vec![Part::Text(encode_prompt(text))])
}

/// Build whichever request `payload` calls for
pub fn build_request(payload: &RequestPayload) -> GenerateContentRequest {
    match payload {
        RequestPayload::Decode(image) => build_decode_request(&image.bytes, &image.mime_type),
        RequestPayload::Encode(text) => build_encode_request(text),
    }
}

fn encode_prompt(text: &str) -> String {
    format!(
        "Agis comme un scribe royal de l'Égypte antique.
Convertis le texte français suivant en hiéroglyphes égyptiens (en utilisant les caractères Unicode appropriés).

Texte à convertir: \"{text}\"

Fournis une réponse structurée au format JSON (sans balises markdown json) avec les champs suivants:
1. \"hieroglyphs\": La séquence de caractères Unicode hiéroglyphiques.
2. \"transliteration\": La lecture phonétique.
3. \"translation\": Le texte original en français (pour confirmation).
4. \"historicalContext\": Une note brève sur le choix des signes ou des déterminatifs utilisés (max 2 phrases)."
    )
}
