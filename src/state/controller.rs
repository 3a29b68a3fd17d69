//! View state machine
//!
//! The controller owns everything the window shows: the active mode, the
//! typed text, the picked image and where the current request stands.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success(result)
//!                     └──err──▶ Failure(message)
//! any ──switch mode / pick image / reset image──▶ Idle
//! ```
//!
//! Every submission gets a fresh request id. A completion is applied only
//! if its id is still the live one; switching mode or changing the image
//! retires the live id, so a slow reply can never overwrite newer state.

use super::data::{ImagePayload, LoadingState, TranslationResult};
use super::mode::Mode;
use crate::gemini::InferenceError;

/// Identifies one submission; ids only ever increase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What a request needs to be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    Decode(ImagePayload),
    Encode(String),
}

impl RequestPayload {
    pub fn mode(&self) -> Mode {
        match self {
            RequestPayload::Decode(_) => Mode::Decode,
            RequestPayload::Encode(_) => Mode::Encode,
        }
    }
}

/// A submission the caller must now send to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub payload: RequestPayload,
}

/// Where the current request stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading { message: String },
    Success(TranslationResult),
    Failure(String),
}

/// Owns all UI state and applies user actions to it
#[derive(Debug, Default)]
pub struct Controller {
    mode: Mode,
    input_text: String,
    image: Option<ImagePayload>,
    state: ViewState,
    /// Last id handed out
    last_issued: u64,
    /// Id whose completion is still wanted
    live: Option<RequestId>,
}

impl Controller {
    /// Fresh controller in the default (encode) mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The result on display, if the last request succeeded
    pub fn result(&self) -> Option<&TranslationResult> {
        match &self.state {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The error on display, if the last request failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    pub fn loading(&self) -> LoadingState {
        match &self.state {
            ViewState::Loading { message } => LoadingState {
                is_loading: true,
                message: message.clone(),
            },
            _ => LoadingState::default(),
        }
    }

    /// Whether a submit right now would issue a request
    ///
    /// A request already in flight does not block a new one; the UI greys
    /// the button out instead, and the newer submission wins anyway.
    pub fn can_submit(&self) -> bool {
        match self.mode {
            Mode::Decode => self.image.is_some(),
            Mode::Encode => !self.input_text.trim().is_empty(),
        }
    }

    /// Switch between decode and encode, dropping any result or error
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.clear();
    }

    /// Replace the text to encode; does not touch the view state
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Use `image` for the next decode, dropping any result or error
    pub fn select_image(&mut self, image: ImagePayload) {
        self.image = Some(image);
        self.clear();
    }

    /// Forget the picked image, dropping any result or error
    pub fn reset_image(&mut self) {
        self.image = None;
        self.clear();
    }

    /// Report a file that could not be used as an image
    ///
    /// The previous image, if any, stays selected.
    pub fn reject_image(&mut self, message: impl Into<String>) {
        self.live = None;
        self.state = ViewState::Failure(message.into());
    }

    /// Start a request for the current mode
    ///
    /// Returns `None` (and changes nothing) when there is nothing to send:
    /// no image in decode mode, or blank text in encode mode. Otherwise the
    /// state moves to `Loading` and the returned request must be sent.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            return None;
        }

        let payload = match self.mode {
            Mode::Decode => RequestPayload::Decode(self.image.clone()?),
            Mode::Encode => RequestPayload::Encode(self.input_text.clone()),
        };

        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.live = Some(id);
        self.state = ViewState::Loading {
            message: self.mode.loading_message().to_string(),
        };

        Some(PendingRequest { id, payload })
    }

    /// Apply the outcome of request `id`
    ///
    /// Outcomes of retired requests are dropped and `false` is returned.
    /// Failures are logged and shown as the mode's generic message.
    pub fn complete(
        &mut self,
        id: RequestId,
        outcome: Result<TranslationResult, InferenceError>,
    ) -> bool {
        if self.live != Some(id) {
            tracing::debug!("🗑️  Dropping stale reply for request {:?}", id);
            return false;
        }
        self.live = None;

        self.state = match outcome {
            Ok(result) => ViewState::Success(result),
            Err(err) => {
                tracing::error!("❌ {} request {:?} failed: {}", self.mode, id, err);
                ViewState::Failure(self.mode.failure_message().to_string())
            }
        };

        true
    }

    /// Back to `Idle`, retiring any request in flight
    fn clear(&mut self) {
        self.live = None;
        self.state = ViewState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_png(width: u32, height: u32) -> ImagePayload {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 160, 60]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        ImagePayload {
            filename: "artefact.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: bytes.into_inner(),
        }
    }

    fn bonjour() -> TranslationResult {
        TranslationResult {
            hieroglyphs: Some("𓇯𓇋".to_string()),
            transliteration: Some("bwnjr".to_string()),
            translation: "Bonjour".to_string(),
            historical_context: Some("...".to_string()),
        }
    }

    #[test]
    fn test_starts_idle_in_encode_mode() {
        let controller = Controller::new();

        assert_eq!(controller.mode(), Mode::Encode);
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(!controller.loading().is_loading);
        assert!(controller.result().is_none());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_blank_text_issues_no_request() {
        let mut controller = Controller::new();

        for text in ["", "   ", "\n\t "] {
            controller.set_input_text(text);
            assert!(!controller.can_submit());
            assert_eq!(controller.submit(), None);
            assert_eq!(controller.state(), &ViewState::Idle);
        }
    }

    #[test]
    fn test_decode_without_image_issues_no_request() {
        let mut controller = Controller::new();
        controller.switch_mode(Mode::Decode);
        controller.set_input_text("ignored in decode mode");

        assert_eq!(controller.submit(), None);
        assert_eq!(controller.state(), &ViewState::Idle);
    }

    #[test]
    fn test_encode_bonjour_succeeds() {
        let mut controller = Controller::new();
        controller.set_input_text("Bonjour");

        let pending = controller.submit().unwrap();
        assert_eq!(pending.payload, RequestPayload::Encode("Bonjour".to_string()));
        assert_eq!(
            controller.loading(),
            LoadingState {
                is_loading: true,
                message: "Conversion en cours...".to_string(),
            }
        );

        assert!(controller.complete(pending.id, Ok(bonjour())));

        assert_eq!(controller.state(), &ViewState::Success(bonjour()));
        assert_eq!(controller.result(), Some(&bonjour()));
        assert!(controller.error().is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_encode_payload_keeps_text_untrimmed() {
        let mut controller = Controller::new();
        controller.set_input_text("  « Ankh »\n");

        let pending = controller.submit().unwrap();
        assert_eq!(pending.payload, RequestPayload::Encode("  « Ankh »\n".to_string()));
    }

    #[test]
    fn test_decode_failure_shows_decode_message() {
        let mut controller = Controller::new();
        controller.switch_mode(Mode::Decode);
        let image = solid_png(10, 10);
        controller.select_image(image.clone());

        let pending = controller.submit().unwrap();
        assert_eq!(pending.payload, RequestPayload::Decode(image));
        assert_eq!(controller.loading().message, "Analyse en cours...");

        let applied = controller.complete(
            pending.id,
            Err(InferenceError::Transport("connection refused".to_string())),
        );

        assert!(applied);
        assert_eq!(
            controller.state(),
            &ViewState::Failure(
                "Impossible de décrypter l'image. Assurez-vous qu'elle est nette.".to_string()
            )
        );
        assert!(controller.result().is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_every_failure_kind_leaves_no_result() {
        let failures = [
            InferenceError::Transport("dns".to_string()),
            InferenceError::Status {
                status: 503,
                message: "overloaded".to_string(),
            },
            InferenceError::EmptyResponse,
            InferenceError::MalformedResponse("expected value".to_string()),
        ];

        for failure in failures {
            let mut controller = Controller::new();
            controller.set_input_text("Horus");
            let pending = controller.submit().unwrap();

            controller.complete(pending.id, Err(failure));

            assert!(controller.result().is_none());
            assert_eq!(controller.error(), Some("Impossible de convertir le texte."));
        }
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let mut controller = Controller::new();
        controller.set_input_text("Bonjour");
        let first = controller.submit().unwrap();
        controller.complete(first.id, Ok(bonjour()));

        let second = controller.submit().unwrap();

        assert!(second.id > first.id);
        assert!(controller.result().is_none());
        assert!(controller.is_loading());
    }

    #[test]
    fn test_mode_switch_clears_result_and_error() {
        let mut controller = Controller::new();
        controller.set_input_text("Bonjour");
        let pending = controller.submit().unwrap();
        controller.complete(pending.id, Ok(bonjour()));

        controller.switch_mode(Mode::Decode);
        assert_eq!(controller.state(), &ViewState::Idle);

        controller.reject_image("Format d'image non reconnu.");
        assert!(controller.error().is_some());

        controller.switch_mode(Mode::Encode);
        assert_eq!(controller.state(), &ViewState::Idle);
    }

    #[test]
    fn test_mode_switch_while_loading_drops_late_reply() {
        let mut controller = Controller::new();
        controller.set_input_text("Bonjour");
        let pending = controller.submit().unwrap();

        controller.switch_mode(Mode::Decode);
        assert_eq!(controller.state(), &ViewState::Idle);

        assert!(!controller.complete(pending.id, Ok(bonjour())));
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.result().is_none());
    }

    #[test]
    fn test_reset_image_while_loading_drops_late_failure() {
        let mut controller = Controller::new();
        controller.switch_mode(Mode::Decode);
        controller.select_image(solid_png(4, 4));
        let pending = controller.submit().unwrap();

        controller.reset_image();

        assert!(controller.image().is_none());
        assert!(!controller.complete(pending.id, Err(InferenceError::EmptyResponse)));
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_selecting_image_clears_state() {
        let mut controller = Controller::new();
        controller.switch_mode(Mode::Decode);
        controller.select_image(solid_png(2, 2));
        let pending = controller.submit().unwrap();
        controller.complete(pending.id, Err(InferenceError::EmptyResponse));
        assert!(controller.error().is_some());

        controller.select_image(solid_png(3, 3));

        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.can_submit());
    }

    #[test]
    fn test_only_latest_submission_is_applied() {
        let mut controller = Controller::new();
        controller.set_input_text("premier");
        let first = controller.submit().unwrap();
        controller.set_input_text("second");
        let second = controller.submit().unwrap();

        let fresh = TranslationResult {
            translation: "second".to_string(),
            ..Default::default()
        };
        assert!(controller.complete(second.id, Ok(fresh.clone())));

        // the slow first reply lands afterwards and must not win
        assert!(!controller.complete(first.id, Ok(bonjour())));
        assert_eq!(controller.result(), Some(&fresh));
    }

    #[test]
    fn test_reply_is_applied_once() {
        let mut controller = Controller::new();
        controller.set_input_text("Bonjour");
        let pending = controller.submit().unwrap();

        assert!(controller.complete(pending.id, Ok(bonjour())));
        assert!(!controller.complete(pending.id, Err(InferenceError::EmptyResponse)));
        assert_eq!(controller.result(), Some(&bonjour()));
    }
}
