pub mod button;
pub mod form;
pub mod notification;
pub mod otp;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// Centered card holding a screen's form, with the brand title on top.
pub fn card<'a, T: 'a>(title: &'a str, content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(20)
            .align_x(iced::Alignment::Center)
            .push(text::h1("LADX").color(crate::color::PURPLE))
            .push(text::h2(title))
            .push(content),
    )
    .padding(40)
    .max_width(560)
    .width(Length::Fill)
    .style(theme::card::simple)
}
