//! Colours and container styles shared by the widgets

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Amber 600
pub const AMBER: Color = Color::from_rgb(0.851, 0.467, 0.024);
/// Amber 700, for section labels
pub const AMBER_DARK: Color = Color::from_rgb(0.706, 0.325, 0.035);
/// Warm off-white behind everything
pub const SAND: Color = Color::from_rgb(0.961, 0.945, 0.914);
/// Stone 800, body text
pub const INK: Color = Color::from_rgb(0.161, 0.145, 0.141);
/// Stone 500, secondary text
pub const MUTED: Color = Color::from_rgb(0.471, 0.443, 0.424);
pub const ERROR: Color = Color::from_rgb(0.600, 0.106, 0.106);

/// Background shape colours
pub const WIREFRAME: Color = Color::from_rgba(0.851, 0.467, 0.024, 0.2);
pub const SOLID: Color = Color::from_rgba(0.996, 0.953, 0.780, 0.4);
/// Amber 50, the colour distant shapes fade into
pub const FOG: Color = Color::from_rgb(1.0, 0.984, 0.922);

/// Frosted white card holding each panel
pub fn glass_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.72))),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
            width: 1.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

/// Red banner for failures
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ERROR),
        background: Some(Background::Color(Color::from_rgb(0.996, 0.949, 0.949))),
        border: Border {
            color: Color::from_rgb(0.996, 0.792, 0.792),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Pale orange box around the historical note
pub fn context_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 0.969, 0.929, 0.6))),
        border: Border {
            color: Color::from_rgb(1.0, 0.929, 0.835),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Grey pill around the transliteration
pub fn transliteration_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.961, 0.961, 0.957, 0.8))),
        border: Border {
            color: Color::from_rgb(0.906, 0.898, 0.894),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Plain sand page, used when the animated background is off
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SAND)),
        ..container::Style::default()
    }
}
