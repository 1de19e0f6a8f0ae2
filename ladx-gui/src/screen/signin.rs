use iced::{widget::Space, Alignment, Length};

use ladx_ui::{
    component::{button, card, form, text},
    widget::*,
};

use super::{password_field, Action, Request, Response};
use crate::{
    route::Route, services::auth::SignInFormData, validation::validate_sign_in,
};

#[derive(Debug, Clone)]
pub enum Message {
    EmailEdited(String),
    PasswordEdited(String),
    TogglePassword,
    Submit,
    ForgotPassword,
    SignUp,
    Response(Response),
}

#[derive(Debug, Default)]
pub struct SignIn {
    email: form::Value<String>,
    password: form::Value<String>,
    show_password: bool,
    processing: bool,
}

impl SignIn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::EmailEdited(email) => self.email.edit(email),
            Message::PasswordEdited(password) => self.password.edit(password),
            Message::TogglePassword => self.show_password = !self.show_password,
            Message::ForgotPassword => return Action::Navigate(Route::ForgotPassword),
            Message::SignUp => return Action::Navigate(Route::SignUp),
            Message::Submit => {
                if self.processing {
                    return Action::None;
                }
                if let Some(error) = validate_sign_in(&self.email.value, &self.password.value) {
                    return Action::error(error);
                }
                self.processing = true;
                return Action::Request(Request::Login(SignInFormData {
                    email: self.email.value.clone(),
                    password: self.password.value.clone(),
                }));
            }
            Message::Response(Response::LoggedIn(res)) => {
                self.processing = false;
                return match res {
                    Ok(auth) => {
                        let role = auth.user.map(|u| u.role).unwrap_or_default();
                        Action::batch([
                            Action::success("Login successful!"),
                            Action::Navigate(Route::dashboard(role)),
                        ])
                    }
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    pub fn view(&self) -> Element<Message> {
        card(
            "Welcome!",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(
                    form::Form::new_trimmed("Enter your email", &self.email, Message::EmailEdited)
                        .label("Email *")
                        .padding(10),
                )
                .push(password_field(
                    "Password *",
                    "Enter your password",
                    &self.password,
                    self.show_password,
                    Message::PasswordEdited,
                    Message::TogglePassword,
                ))
                .push(
                    Row::new()
                        .push(Space::with_width(Length::Fill))
                        .push(button::link("Forgot password").on_press(Message::ForgotPassword)),
                )
                .push(
                    button::primary(if self.processing {
                        "Signing in..."
                    } else {
                        "Confirm"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                )
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(Alignment::Center)
                        .push(text::p2_regular("Don't have an account?"))
                        .push(button::link("Sign up now").on_press(Message::SignUp)),
                ),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        auth::{
            service::tests::{login_response, user},
            Authenticated, Role,
        },
        ServiceError,
    };

    fn authenticated(role: Role) -> Authenticated {
        let res = login_response(role);
        Authenticated {
            token: res.token.unwrap_or_default(),
            user: Some(user(role)),
            message: res.message,
        }
    }

    fn submit(screen: &mut SignIn) -> Action {
        screen.update(Message::EmailEdited("ada@example.com".to_string()));
        screen.update(Message::PasswordEdited("secret1".to_string()));
        screen.update(Message::Submit)
    }

    #[test]
    fn empty_fields() {
        let mut screen = SignIn::new();
        screen.update(Message::EmailEdited("ada@example.com".to_string()));
        assert_eq!(
            screen.update(Message::Submit),
            Action::error("Please fill in all fields.")
        );
        assert!(!screen.is_processing());
    }

    #[test]
    fn navigate_by_role() {
        for (role, route) in [
            (Role::Sender, Route::SenderDashboard),
            (Role::Traveler, Route::TravelerDashboard),
            (Role::Unknown, Route::Dashboard),
        ] {
            let mut screen = SignIn::new();
            assert_eq!(
                submit(&mut screen),
                Action::Request(Request::Login(SignInFormData {
                    email: "ada@example.com".to_string(),
                    password: "secret1".to_string(),
                }))
            );
            assert_eq!(screen.update(Message::Submit), Action::None);
            let action =
                screen.update(Message::Response(Response::LoggedIn(Ok(authenticated(role)))));
            assert_eq!(
                action.into_vec(),
                vec![Action::success("Login successful!"), Action::Navigate(route)]
            );
        }
    }

    #[test]
    fn login_failure() {
        let mut screen = SignIn::new();
        submit(&mut screen);
        let action = screen.update(Message::Response(Response::LoggedIn(Err(
            ServiceError::MissingUser,
        ))));
        assert_eq!(action, Action::error("User information not found."));
        assert!(!screen.is_processing());
    }
}
