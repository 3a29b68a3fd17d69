//! Mode switcher

use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use crate::state::mode::Mode;
use crate::ui::style;
use crate::Message;

/// Two tabs; the active one is filled, the other is plain text
pub fn view(current: Mode) -> Element<'static, Message> {
    let tab = |mode: Mode| {
        let look = if mode == current {
            button::primary
        } else {
            button::text
        };

        button(container(text(mode.label()).size(14)).center_x(Length::Fill))
            .on_press(Message::ModeSelected(mode))
            .padding([12, 0])
            .width(Length::Fill)
            .style(look)
    };

    container(row![tab(Mode::Encode), tab(Mode::Decode)].spacing(4))
        .padding(6)
        .max_width(380.0)
        .style(style::glass_card)
        .into()
}
