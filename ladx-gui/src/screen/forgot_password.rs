use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, form, text},
    widget::*,
};

use super::{or_default, Action, Request, Response};
use crate::{
    route::Route, services::auth::ForgotPasswordData, validation::validate_forgot_password,
};

#[derive(Debug, Clone)]
pub enum Message {
    EmailEdited(String),
    Submit,
    SignIn,
    Response(Response),
}

#[derive(Debug, Default)]
pub struct ForgotPassword {
    email: form::Value<String>,
    processing: bool,
}

impl ForgotPassword {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EmailEdited(email) => self.email.edit(email),
            Message::SignIn => return Action::Navigate(Route::SignIn),
            Message::Submit => {
                if self.processing {
                    return Action::None;
                }
                if let Some(error) = validate_forgot_password(&self.email.value) {
                    return Action::error(error);
                }
                self.processing = true;
                return Action::Request(Request::ForgotPassword(ForgotPasswordData {
                    email: self.email.value.clone(),
                }));
            }
            Message::Response(Response::ResetEmailSent(res)) => {
                self.processing = false;
                return match res {
                    Ok(message) => Action::success(or_default(
                        message,
                        "Password reset email sent successfully!",
                    )),
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    pub fn view(&self) -> Element<Message> {
        card(
            "Forgot Password",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(text::p1_regular(
                    "Enter your email address and we will send you a link to reset your password.",
                ))
                .push(
                    form::Form::new_trimmed("Enter your email", &self.email, Message::EmailEdited)
                        .label("Email Address *")
                        .on_submit(Message::Submit)
                        .padding(10),
                )
                .push(
                    button::primary(if self.processing {
                        "Sending..."
                    } else {
                        "Send Reset Link"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                )
                .push(button::link("Back to sign in").on_press(Message::SignIn)),
        )
        .into()
    }
}
