use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'a str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'a str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::secondary)
}

pub fn transparent<'a, T: 'a>(t: &'a str) -> Button<'a, T> {
    Button::new(container(text(t)).align_y(Vertical::Center).padding(5))
        .style(theme::button::transparent)
}

/// Inline text button, used for "Forgot password" and the sign in / sign up switches.
pub fn link<'a, T: 'a>(t: &'a str) -> Button<'a, T> {
    Button::new(text(t)).padding(0).style(theme::button::link)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
