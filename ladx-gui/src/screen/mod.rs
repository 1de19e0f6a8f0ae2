//! Screens of the application.
//!
//! A screen owns its form state and never performs a request itself: `update` returns an
//! [`Action`] that the shell executes, and the outcome of a request comes back as a
//! [`Response`].

pub mod dashboard;
pub mod forgot_password;
pub mod kyc;
pub mod reset_password;
pub mod role_selection;
pub mod signin;
pub mod signup;
pub mod verify_otp;

use iced::Alignment;
use ladx_ui::{
    component::{button, form, notification::Level},
    widget::*,
};

use crate::{
    route::Route,
    services::{
        auth::{
            service::Verified, AuthResponse, Authenticated, ForgotPasswordData, ResetPasswordData,
            Role, SignInFormData, SignUpFormData, VerifyOtpData,
        },
        kyc::{IdentityDocument, KycList, KycListQuery, KycSubmission},
        ServiceError,
    },
};

/// Work a screen asks the shell to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    SignUp(SignUpFormData),
    Login(SignInFormData),
    VerifyOtp(VerifyOtpData),
    ResendOtp(String),
    ForgotPassword(ForgotPasswordData),
    ResetPassword(ResetPasswordData),
    UpdateRole(Role),
    SubmitKyc(KycSubmission),
    ListKyc(KycListQuery),
    PickDocument,
    Logout,
}

/// Outcome of a [`Request`].
#[derive(Debug, Clone)]
pub enum Response {
    SignedUp(Result<AuthResponse, ServiceError>),
    LoggedIn(Result<Authenticated, ServiceError>),
    OtpVerified(Result<Verified, ServiceError>),
    OtpResent(Result<String, ServiceError>),
    ResetEmailSent(Result<String, ServiceError>),
    PasswordReset(Result<String, ServiceError>),
    RoleUpdated(Role, Result<String, ServiceError>),
    KycSubmitted(Result<String, ServiceError>),
    KycListed(Result<KycList, ServiceError>),
    DocumentPicked(Option<IdentityDocument>),
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Request(Request),
    Navigate(Route),
    Notify(Toast),
    /// Gives the focus to a box of the OTP input.
    FocusOtp(usize),
    Batch(Vec<Action>),
}

impl Action {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify(Toast {
            level: Level::Success,
            message: message.into(),
        })
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Notify(Toast {
            level: Level::Info,
            message: message.into(),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify(Toast {
            level: Level::Error,
            message: message.into(),
        })
    }

    pub fn batch(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::Batch(actions.into_iter().collect())
    }

    /// Flattens the action into its leaves, in order.
    pub fn into_vec(self) -> Vec<Action> {
        match self {
            Self::None => Vec::new(),
            Self::Batch(actions) => actions.into_iter().flat_map(Action::into_vec).collect(),
            action => vec![action],
        }
    }
}

/// Password input with a button showing or hiding its content.
fn password_field<'a, M: Clone + 'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a form::Value<String>,
    visible: bool,
    on_change: impl Fn(String) -> M + 'a,
    on_toggle: M,
) -> Element<'a, M> {
    Row::new()
        .spacing(10)
        .align_y(Alignment::End)
        .push(
            form::Form::new(placeholder, value, on_change)
                .label(label)
                .secure(!visible)
                .padding(10),
        )
        .push(button::transparent(if visible { "Hide" } else { "Show" }).on_press(on_toggle))
        .into()
}

/// Message shown in a success toast: the server one, or `default` if it sent none.
fn or_default(message: String, default: &str) -> String {
    if message.is_empty() {
        default.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_batches() {
        let action = Action::batch([
            Action::None,
            Action::success("ok"),
            Action::batch([Action::Navigate(Route::Kyc), Action::None]),
        ]);
        assert_eq!(
            action.into_vec(),
            vec![Action::success("ok"), Action::Navigate(Route::Kyc)]
        );
    }
}
