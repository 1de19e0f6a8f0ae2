use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, form},
    widget::*,
};

use super::{or_default, password_field, Action, Request, Response};
use crate::{
    route::Route, services::auth::ResetPasswordData, validation::validate_reset_password,
};

#[derive(Debug, Clone)]
pub enum Message {
    NewPasswordEdited(String),
    ConfirmPasswordEdited(String),
    TogglePassword,
    Submit,
    Response(Response),
}

/// Sets a new password with the user id and token of the link sent by email.
#[derive(Debug, Default)]
pub struct ResetPassword {
    user_id: String,
    token: String,
    new_password: form::Value<String>,
    confirm_password: form::Value<String>,
    show_password: bool,
    processing: bool,
}

impl ResetPassword {
    pub fn new(user_id: Option<String>, token: Option<String>) -> Self {
        if user_id.is_none() || token.is_none() {
            tracing::warn!("Reset password link is missing its user id or token");
        }
        Self {
            user_id: user_id.unwrap_or_default(),
            token: token.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NewPasswordEdited(v) => self.new_password.edit(v),
            Message::ConfirmPasswordEdited(v) => self.confirm_password.edit(v),
            Message::TogglePassword => self.show_password = !self.show_password,
            Message::Submit => {
                if self.processing {
                    return Action::None;
                }
                if let Some(error) = validate_reset_password(
                    &self.new_password.value,
                    &self.confirm_password.value,
                ) {
                    return Action::error(error);
                }
                self.processing = true;
                return Action::Request(Request::ResetPassword(ResetPasswordData {
                    user_id: self.user_id.clone(),
                    token: self.token.clone(),
                    new_password: self.new_password.value.clone(),
                }));
            }
            Message::Response(Response::PasswordReset(res)) => {
                self.processing = false;
                return match res {
                    Ok(message) => Action::batch([
                        Action::success(or_default(message, "Password reset successful!")),
                        Action::Navigate(Route::SignIn),
                    ]),
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    pub fn view(&self) -> Element<Message> {
        card(
            "Reset Password",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(password_field(
                    "New Password *",
                    "Enter your new password",
                    &self.new_password,
                    self.show_password,
                    Message::NewPasswordEdited,
                    Message::TogglePassword,
                ))
                .push(
                    form::Form::new(
                        "Confirm your new password",
                        &self.confirm_password,
                        Message::ConfirmPasswordEdited,
                    )
                    .label("Confirm Password *")
                    .secure(!self.show_password)
                    .on_submit(Message::Submit)
                    .padding(10),
                )
                .push(
                    button::primary(if self.processing {
                        "Resetting..."
                    } else {
                        "Reset Password"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                ),
        )
        .into()
    }
}
