use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, form, text},
    widget::*,
};

use super::{or_default, password_field, Action, Request, Response};
use crate::{
    region::{Region, COUNTRIES, GENDERS},
    route::Route,
    services::auth::SignUpFormData,
    validation::{validate_sign_up, Errors, Field},
};

#[derive(Debug, Clone)]
pub enum Message {
    FullNameEdited(String),
    EmailEdited(String),
    PhoneNumberEdited(String),
    CountrySelected(&'static str),
    StateSelected(&'static str),
    GenderSelected(&'static str),
    PasswordEdited(String),
    ConfirmPasswordEdited(String),
    TogglePassword,
    ToggleConfirmPassword,
    Submit,
    SignIn,
    Response(Response),
}

#[derive(Debug, Default)]
pub struct SignUp {
    full_name: form::Value<String>,
    email: form::Value<String>,
    phone_number: form::Value<String>,
    region: Region,
    gender: Option<&'static str>,
    password: form::Value<String>,
    confirm_password: form::Value<String>,
    show_password: bool,
    show_confirm_password: bool,
    errors: Errors,
    processing: bool,
}

impl SignUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    fn form_data(&self) -> SignUpFormData {
        SignUpFormData {
            full_name: self.full_name.value.clone(),
            email: self.email.value.clone(),
            country: self.region.country().unwrap_or_default().to_string(),
            state: self.region.state().unwrap_or_default().to_string(),
            phone_number: self.phone_number.value.clone(),
            gender: self.gender.unwrap_or_default().to_string(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
        }
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut form::Value<String>> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Country | Field::State | Field::Gender => None,
        }
    }

    fn edit(&mut self, field: Field, value: String) {
        self.errors.remove(&field);
        if let Some(v) = self.field_mut(field) {
            v.edit(value);
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FullNameEdited(v) => self.edit(Field::FullName, v),
            Message::EmailEdited(v) => self.edit(Field::Email, v),
            Message::PhoneNumberEdited(v) => self.edit(Field::PhoneNumber, v),
            Message::PasswordEdited(v) => self.edit(Field::Password, v),
            Message::ConfirmPasswordEdited(v) => self.edit(Field::ConfirmPassword, v),
            Message::CountrySelected(country) => {
                self.errors.remove(&Field::Country);
                self.region.select_country(country);
            }
            Message::StateSelected(state) => {
                if self.region.select_state(state) {
                    self.errors.remove(&Field::State);
                }
            }
            Message::GenderSelected(gender) => {
                self.errors.remove(&Field::Gender);
                self.gender = Some(gender);
            }
            Message::TogglePassword => self.show_password = !self.show_password,
            Message::ToggleConfirmPassword => {
                self.show_confirm_password = !self.show_confirm_password
            }
            Message::SignIn => return Action::Navigate(Route::SignIn),
            Message::Submit => return self.submit(),
            Message::Response(Response::SignedUp(res)) => {
                self.processing = false;
                return match res {
                    Ok(res) => Action::batch([
                        Action::success(or_default(
                            res.message,
                            "Account created. Check your email for the OTP.",
                        )),
                        Action::Navigate(Route::VerifyOtp),
                    ]),
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    fn submit(&mut self) -> Action {
        if self.processing {
            return Action::None;
        }
        let data = self.form_data();
        self.errors = validate_sign_up(&data);
        for field in [
            Field::FullName,
            Field::Email,
            Field::PhoneNumber,
            Field::Password,
            Field::ConfirmPassword,
        ] {
            let warning = self.errors.get(&field).copied();
            if let Some(v) = self.field_mut(field) {
                v.set_warning(warning);
            }
        }
        if !self.errors.is_empty() {
            tracing::debug!("Sign up form has {} invalid fields", self.errors.len());
            return Action::None;
        }
        self.processing = true;
        Action::Request(Request::SignUp(data))
    }

    pub fn view(&self) -> Element<Message> {
        let fields = Column::new()
            .spacing(15)
            .push(
                form::Form::new("Enter your full name", &self.full_name, Message::FullNameEdited)
                    .label("Full Name *")
                    .padding(10),
            )
            .push(
                form::Form::new_trimmed("Enter your email", &self.email, Message::EmailEdited)
                    .label("Email *")
                    .padding(10),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(form::select(
                        "Country *",
                        "Select country",
                        COUNTRIES,
                        self.region.country(),
                        self.errors.get(&Field::Country).copied(),
                        Message::CountrySelected,
                    ))
                    .push(form::select(
                        "State *",
                        "Select state",
                        self.region.state_options(),
                        self.region.state(),
                        self.errors.get(&Field::State).copied(),
                        Message::StateSelected,
                    )),
            )
            .push(
                form::Form::new(
                    "+1234567890",
                    &self.phone_number,
                    Message::PhoneNumberEdited,
                )
                .label("Phone Number *")
                .padding(10),
            )
            .push(form::select(
                "Gender *",
                "Select gender",
                GENDERS,
                self.gender,
                self.errors.get(&Field::Gender).copied(),
                Message::GenderSelected,
            ))
            .push(password_field(
                "Password *",
                "Enter your password",
                &self.password,
                self.show_password,
                Message::PasswordEdited,
                Message::TogglePassword,
            ))
            .push(password_field(
                "Confirm Password *",
                "Confirm your password",
                &self.confirm_password,
                self.show_confirm_password,
                Message::ConfirmPasswordEdited,
                Message::ToggleConfirmPassword,
            ));

        card(
            "Create your account",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(fields)
                .push(
                    button::primary(if self.processing {
                        "Creating Account..."
                    } else {
                        "Sign Up"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                )
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(Alignment::Center)
                        .push(text::p2_regular("Already have an account?"))
                        .push(button::link("Sign In").on_press(Message::SignIn)),
                ),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{auth::AuthResponse, ServiceError};

    fn fill(screen: &mut SignUp) {
        for message in [
            Message::FullNameEdited("Ada Obi".to_string()),
            Message::EmailEdited("ada@example.com".to_string()),
            Message::CountrySelected("Nigeria"),
            Message::StateSelected("Lagos"),
            Message::PhoneNumberEdited("+2348012345678".to_string()),
            Message::GenderSelected("Female"),
            Message::PasswordEdited("abcdef".to_string()),
            Message::ConfirmPasswordEdited("abcdef".to_string()),
        ] {
            assert_eq!(screen.update(message), Action::None);
        }
    }

    #[test]
    fn missing_fields_block_submission() {
        let mut screen = SignUp::new();
        fill(&mut screen);
        screen.update(Message::FullNameEdited(String::new()));
        assert_eq!(screen.update(Message::Submit), Action::None);
        assert!(!screen.is_processing());
        assert_eq!(screen.errors().len(), 1);
        assert_eq!(screen.errors()[&Field::FullName], "Full name is required.");

        screen.update(Message::FullNameEdited("ab".to_string()));
        assert!(screen.errors().is_empty());
        assert_eq!(screen.update(Message::Submit), Action::None);
        assert_eq!(
            screen.errors()[&Field::FullName],
            "Full name must be at least 3 characters."
        );
    }

    #[test]
    fn country_change_drops_state() {
        let mut screen = SignUp::new();
        fill(&mut screen);
        screen.update(Message::CountrySelected("Rwanda"));
        assert_eq!(screen.update(Message::Submit), Action::None);
        assert_eq!(screen.errors().len(), 1);
        assert_eq!(screen.errors()[&Field::State], "State is required.");
    }

    #[test]
    fn submit_then_navigate_to_otp() {
        let mut screen = SignUp::new();
        fill(&mut screen);
        let action = screen.update(Message::Submit);
        let Action::Request(Request::SignUp(data)) = action else {
            panic!("expected a sign up request");
        };
        assert_eq!(data.country, "Nigeria");
        assert_eq!(data.state, "Lagos");
        assert_eq!(data.gender, "Female");
        assert!(screen.is_processing());

        // A second click while the request is in flight does nothing.
        assert_eq!(screen.update(Message::Submit), Action::None);

        let action = screen.update(Message::Response(Response::SignedUp(Ok(AuthResponse {
            success: true,
            message: "OTP sent to your email".to_string(),
            user_id: Some("u1".to_string()),
            ..Default::default()
        }))));
        assert_eq!(
            action.into_vec(),
            vec![
                Action::success("OTP sent to your email"),
                Action::Navigate(Route::VerifyOtp)
            ]
        );
        assert!(!screen.is_processing());
    }

    #[test]
    fn failure_stays_on_screen() {
        let mut screen = SignUp::new();
        fill(&mut screen);
        screen.update(Message::Submit);
        let action = screen.update(Message::Response(Response::SignedUp(Err(
            ServiceError::Request {
                message: "Email already registered".to_string(),
                status: Some(409),
            },
        ))));
        assert_eq!(action, Action::error("Email already registered"));
        assert!(!screen.is_processing());
    }
}
