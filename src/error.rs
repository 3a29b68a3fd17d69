use thiserror::Error;

use crate::config::ConfigError;

/// Failures that stop the app before or while its window runs
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("window system error: {0}")]
    Gui(#[from] iced::Error),
}
