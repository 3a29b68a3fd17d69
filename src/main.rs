use iced::time::Instant;
use iced::widget::{
    button, canvas, column, container, row, scrollable, stack, text, text_editor, Column,
};
use iced::{window, Alignment, ContentFit, Element, Length, Size, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

mod artifact;
mod config;
mod error;
mod gemini;
mod state;
mod ui;

use artifact::ImageError;
use config::Config;
use error::StartupError;
use gemini::{GeminiClient, InferenceError};
use state::controller::{Controller, RequestId};
use state::data::{ImagePayload, TranslationResult};
use state::mode::Mode;
use ui::background::Scene;
use ui::spinner::Spinner;

/// Main application state
struct Hierotrad {
    /// Mode, inputs and request state
    controller: Controller,
    /// Connection to the hosted model
    client: GeminiClient,
    /// Backing store of the text box in encode mode
    editor: text_editor::Content,
    /// Decoded preview of the picked image
    preview: Option<iced::widget::image::Handle>,
    /// Decorative background, `None` when disabled
    background: Option<Scene>,
    spinner: Spinner,
    last_frame: Option<Instant>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a mode tab
    ModeSelected(Mode),
    /// User typed in the text box
    EditorAction(text_editor::Action),
    /// User clicked the image drop zone
    PickImage,
    /// Background file read finished
    ImageLoaded(Result<ImagePayload, ImageError>),
    /// User removed the picked image
    ResetImage,
    /// User clicked "Traduire" or "Lancer l'Analyse"
    Submit,
    /// A model call finished
    Completed(RequestId, Result<TranslationResult, InferenceError>),
    /// User asked to copy the result
    CopyResult,
    /// Window is about to draw a new frame
    Frame(Instant),
}

impl Hierotrad {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let background = config
            .animate_background
            .then(|| Scene::new(&mut rand::thread_rng()));

        tracing::info!(
            "𓂀 Hierotrad ready (model {}, {} background shapes)",
            config.model,
            background.as_ref().map_or(0, Scene::shape_count)
        );

        (
            Hierotrad {
                controller: Controller::new(),
                client: GeminiClient::new(&config),
                editor: text_editor::Content::new(),
                preview: None,
                background,
                spinner: Spinner::default(),
                last_frame: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => {
                self.controller.switch_mode(mode);
                Task::none()
            }
            Message::EditorAction(action) => {
                self.editor.perform(action);
                // iced's `Content::text` always ends with a newline
                self.controller.set_input_text(without_final_newline(self.editor.text()));
                Task::none()
            }
            Message::PickImage => {
                // Show the native file picker dialog
                match artifact::pick_image_file() {
                    Some(path) => Task::perform(artifact::load_image(path), Message::ImageLoaded),
                    None => Task::none(),
                }
            }
            Message::ImageLoaded(Ok(payload)) => {
                self.preview = Some(iced::widget::image::Handle::from_bytes(payload.bytes.clone()));
                self.controller.select_image(payload);
                Task::none()
            }
            Message::ImageLoaded(Err(err)) => {
                tracing::warn!("⚠️  {}", err);
                self.controller.reject_image(err.user_message());
                Task::none()
            }
            Message::ResetImage => {
                self.preview = None;
                self.controller.reset_image();
                Task::none()
            }
            Message::Submit => {
                let Some(pending) = self.controller.submit() else {
                    return Task::none();
                };

                tracing::info!("⏳ {} request {:?} started", pending.payload.mode(), pending.id);

                // Launch the model call in the background
                let client = self.client.clone();
                let id = pending.id;
                Task::perform(
                    async move { client.translate(pending.payload).await },
                    move |outcome| Message::Completed(id, outcome),
                )
            }
            Message::Completed(id, outcome) => {
                if self.controller.complete(id, outcome) && self.controller.result().is_some() {
                    tracing::info!("✅ Request {:?} complete", id);
                }
                Task::none()
            }
            Message::CopyResult => match self.controller.result() {
                Some(result) => iced::clipboard::write(ui::result_card::clipboard_text(result)),
                None => Task::none(),
            },
            Message::Frame(now) => {
                if let Some(last) = self.last_frame {
                    self.spinner.advance(now.duration_since(last).as_secs_f32());
                }
                self.last_frame = Some(now);

                if let Some(scene) = self.background.as_mut() {
                    scene.tick(now);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = column![
            text("𓉴").size(48).color(ui::style::AMBER),
            row![
                text("Hierotrad").size(36).color(ui::style::INK),
                text(".AI").size(36).color(ui::style::AMBER),
            ],
            text("DÉCODEUR UNIVERSEL ÉGYPTIEN").size(12).color(ui::style::MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let panel = match self.controller.mode() {
            Mode::Decode => self.decode_panel(),
            Mode::Encode => self.encode_panel(),
        };

        let footer = text(format!("Propulsé par {}", self.client.model()))
            .size(11)
            .color(ui::style::MUTED);

        let content = Column::new()
            .push(header)
            .push(ui::tabs::view(self.controller.mode()))
            .push(panel)
            .push_maybe(self.status_section())
            .push(footer)
            .spacing(28)
            .padding(40)
            .max_width(720.0)
            .align_x(Alignment::Center);

        let page = scrollable(container(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        match &self.background {
            Some(scene) => stack![
                canvas(scene).width(Length::Fill).height(Length::Fill),
                page,
            ]
            .into(),
            None => container(page)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(ui::style::page)
                .into(),
        }
    }

    /// Image picker, or preview with its actions once a file is chosen
    fn decode_panel(&self) -> Element<Message> {
        let body: Element<Message> = match (self.controller.image(), &self.preview) {
            (Some(image), Some(handle)) => {
                let info = row![
                    text(format!(
                        "{} · {:.1} Ko",
                        image.filename,
                        image.size_bytes() as f64 / 1024.0
                    ))
                    .size(13)
                    .color(ui::style::MUTED),
                    iced::widget::horizontal_space(),
                    button(text("✕").size(16))
                        .on_press(Message::ResetImage)
                        .style(button::secondary),
                ]
                .align_y(Alignment::Center);

                let ready = self.controller.result().is_none() && !self.controller.is_loading();
                let analyse = ready.then(|| {
                    button(
                        container(text("Lancer l'Analyse").size(18)).center_x(Length::Fill),
                    )
                    .on_press(Message::Submit)
                    .padding(16)
                    .width(Length::Fill)
                    .style(button::primary)
                });

                Column::new()
                    .push(
                        iced::widget::image(handle.clone())
                            .width(Length::Fill)
                            .height(Length::Fixed(420.0))
                            .content_fit(ContentFit::Contain),
                    )
                    .push(info)
                    .push_maybe(analyse)
                    .spacing(16)
                    .into()
            }
            _ => button(
                column![
                    text("𓁹").size(40).color(ui::style::AMBER),
                    text("Scanner un Artefact").size(18).color(ui::style::INK),
                    text("Supporte JPG, PNG (Max 5MB)").size(13).color(ui::style::MUTED),
                ]
                .spacing(12)
                .align_x(Alignment::Center)
                .width(Length::Fill),
            )
            .on_press(Message::PickImage)
            .padding([96, 24])
            .width(Length::Fill)
            .style(button::text)
            .into(),
        };

        container(body)
            .padding(24)
            .width(Length::Fill)
            .style(ui::style::glass_card)
            .into()
    }

    /// Text box and "Traduire" button
    fn encode_panel(&self) -> Element<Message> {
        let submit = button(container(text("Traduire").size(18)).center_x(Length::Fill))
            .on_press_maybe(
                (self.controller.can_submit() && !self.controller.is_loading())
                    .then_some(Message::Submit),
            )
            .padding(16)
            .width(Length::Fill)
            .style(button::primary);

        container(
            column![
                row![
                    text("ENTRÉE TEXTE").size(13).color(ui::style::AMBER),
                    iced::widget::horizontal_space(),
                    text("FR → EGYPT").size(12).color(ui::style::MUTED),
                ],
                text_editor(&self.editor)
                    .placeholder("Saisissez votre texte ici...")
                    .on_action(Message::EditorAction)
                    .height(Length::Fixed(240.0))
                    .padding(16)
                    .size(18),
                submit,
            ]
            .spacing(20),
        )
        .padding(24)
        .width(Length::Fill)
        .style(ui::style::glass_card)
        .into()
    }

    /// Spinner, error banner or result card, depending on the state
    fn status_section(&self) -> Option<Element<Message>> {
        let loading = self.controller.loading();
        if loading.is_loading {
            let spinner = canvas(self.spinner)
                .width(Length::Fixed(48.0))
                .height(Length::Fixed(48.0));
            return Some(
                container(
                    column![spinner, text(loading.message).size(12).color(ui::style::AMBER_DARK)]
                        .spacing(20)
                        .align_x(Alignment::Center),
                )
                .padding(32)
                .center_x(Length::Fill)
                .style(ui::style::glass_card)
                .into(),
            );
        }

        if let Some(message) = self.controller.error() {
            return Some(
                container(text(message).size(15))
                    .padding(20)
                    .width(Length::Fill)
                    .style(ui::style::error_banner)
                    .into(),
            );
        }

        self.controller.result().map(ui::result_card::view)
    }

    /// Subscribe to window frames while anything animates
    fn subscription(&self) -> Subscription<Message> {
        if self.background.is_some() || self.controller.is_loading() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Light sand theme with amber accents
    fn theme(&self) -> Theme {
        Theme::custom(
            "Hierotrad".to_string(),
            iced::theme::Palette {
                background: ui::style::SAND,
                text: ui::style::INK,
                primary: ui::style::AMBER,
                success: iced::Color::from_rgb(0.133, 0.545, 0.133),
                danger: ui::style::ERROR,
            },
        )
    }
}

/// Drop the one newline the text editor appends to its contents
fn without_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hierotrad=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), StartupError> {
    init_tracing();

    let config = Config::from_env().inspect_err(|err| tracing::error!("🛑 {}", err))?;
    tracing::debug!("Loaded {:?}", config);

    iced::application("Hierotrad.AI", Hierotrad::update, Hierotrad::view)
        .theme(Hierotrad::theme)
        .subscription(Hierotrad::subscription)
        .window_size(Size::new(880.0, 980.0))
        .centered()
        .run_with(move || Hierotrad::new(config))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_appended_newline_is_dropped() {
        assert_eq!(without_final_newline("Bonjour\n".to_string()), "Bonjour");
        assert_eq!(without_final_newline("Bonjour\n\n".to_string()), "Bonjour\n");
        assert_eq!(without_final_newline("Bonjour".to_string()), "Bonjour");
        assert_eq!(without_final_newline(String::new()), "");
    }
}
