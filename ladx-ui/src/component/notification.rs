use iced::{Alignment, Length};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Error,
}

/// A dismissible toast. `on_close` is emitted when the user clicks the close button.
pub fn toast<'a, T: Clone + 'a>(level: Level, message: &'a str, on_close: T) -> Container<'a, T> {
    let style: fn(&theme::Theme) -> iced::widget::container::Style = match level {
        Level::Info => theme::notification::info,
        Level::Success => theme::notification::success,
        Level::Error => theme::notification::error,
    };
    Container::new(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(text::p2_regular(message).width(Length::Fill))
            .push(button::transparent("x").on_press(on_close)),
    )
    .padding(10)
    .width(Length::Fixed(360.0))
    .style(style)
}
