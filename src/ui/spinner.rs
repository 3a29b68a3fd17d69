//! Loading spinner: two arcs chasing each other
use iced::widget::canvas::{self, path, LineCap, Path, Stroke};
use iced::{mouse, Point, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

use crate::ui::style;
use crate::Message;

/// Turns per second
pub const SPEED: f32 = 1.25;

#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    /// Current rotation, in turns (0.0..1.0)
    pub turns: f32,
}

impl Spinner {
    /// Advance by `seconds` of wall time
    pub fn advance(&mut self, seconds: f32) {
        self.turns = (self.turns + seconds * SPEED).rem_euclid(1.0);
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - 3.0;
        let start = self.turns * TAU;

        for (offset, color) in [(0.0, style::AMBER), (PI * 0.6, style::AMBER_DARK)] {
            let arc = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start + offset),
                    end_angle: Radians(start + offset + PI / 2.0),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_color(color)
                    .with_width(2.5)
                    .with_line_cap(LineCap::Round),
            );
        }

        // Soft glow in the middle
        let mut glow = style::AMBER;
        glow.a = 0.1;
        frame.fill(&Path::circle(Point::new(center.x, center.y), radius * 0.6), glow);

        vec![frame.into_geometry()]
    }
}
