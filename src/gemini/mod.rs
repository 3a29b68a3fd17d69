/// Remote inference module
///
/// Everything the app knows about the hosted Gemini model:
/// - `request.rs` - prompt templates and the `generateContent` request body
/// - `client.rs` - the HTTP call itself
/// - `response.rs` - reply envelope and translation record parsing
/// - `error.rs` - failure taxonomy
///
/// The client makes exactly one attempt per request. There is no retry,
/// no streaming and no timeout beyond reqwest's defaults.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::GeminiClient;
pub use error::InferenceError;
