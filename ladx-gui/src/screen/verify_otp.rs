use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, otp, text},
    widget::*,
};

use super::{or_default, Action, Request, Response};
use crate::{route::Route, services::auth::VerifyOtpData, validation::validate_otp};

pub const SESSION_EXPIRED: &str = "User session expired. Please sign up again.";

#[derive(Debug, Clone)]
pub enum Message {
    OtpEdited(usize, String),
    Submit,
    Resend,
    Response(Response),
}

/// Confirms the account created by the sign up with the code sent by email.
#[derive(Debug, Default)]
pub struct VerifyOtp {
    /// Account waiting for verification, from the session storage.
    user_id: Option<String>,
    code: otp::OtpCode,
    processing: bool,
    resending: bool,
}

impl VerifyOtp {
    pub fn new(user_id: Option<String>) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn code(&self) -> &otp::OtpCode {
        &self.code
    }

    fn session_expired() -> Action {
        Action::batch([
            Action::error(SESSION_EXPIRED),
            Action::Navigate(Route::SignUp),
        ])
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::OtpEdited(index, value) => {
                let pasted = value.len() >= otp::OTP_LENGTH;
                if self.code.set(index, &value) && !value.is_empty() {
                    let next = if pasted { otp::OTP_LENGTH - 1 } else { index + 1 };
                    if next < otp::OTP_LENGTH {
                        return Action::FocusOtp(next);
                    }
                }
            }
            Message::Submit => {
                if self.processing {
                    return Action::None;
                }
                let code = self.code.code();
                if let Some(error) = validate_otp(&code) {
                    return Action::error(error);
                }
                let Some(user_id) = self.user_id.clone() else {
                    return Self::session_expired();
                };
                self.processing = true;
                return Action::Request(Request::VerifyOtp(VerifyOtpData { user_id, otp: code }));
            }
            Message::Resend => {
                if self.resending {
                    return Action::None;
                }
                let Some(user_id) = self.user_id.clone() else {
                    return Self::session_expired();
                };
                self.resending = true;
                return Action::Request(Request::ResendOtp(user_id));
            }
            Message::Response(Response::OtpVerified(res)) => {
                self.processing = false;
                return match res {
                    Ok(verified) => Action::batch([
                        Action::success(or_default(verified.message, "Account verified.")),
                        Action::Navigate(Route::Kyc),
                    ]),
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(Response::OtpResent(res)) => {
                self.resending = false;
                return match res {
                    Ok(message) => {
                        self.code.clear();
                        Action::batch([
                            Action::success(or_default(message, "A new OTP has been sent.")),
                            Action::FocusOtp(0),
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
            "Verify your account",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(text::p1_regular("Enter the 6-digit OTP sent to your email."))
                .push(otp::view(&self.code, Message::OtpEdited))
                .push(
                    button::primary(if self.processing {
                        "Verifying..."
                    } else {
                        "Verify OTP"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                )
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(Alignment::Center)
                        .push(text::p2_regular("Didn't receive the code?"))
                        .push(
                            button::link(if self.resending {
                                "Resending..."
                            } else {
                                "Resend OTP"
                            })
                            .on_press_maybe((!self.resending).then_some(Message::Resend)),
                        ),
                ),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{auth::service::Verified, ServiceError};

    fn enter(screen: &mut VerifyOtp, code: &str) {
        for (i, c) in code.chars().enumerate() {
            screen.update(Message::OtpEdited(i, c.to_string()));
        }
    }

    #[test]
    fn invalid_keystroke_keeps_digit() {
        let mut screen = VerifyOtp::new(Some("u1".to_string()));
        assert_eq!(
            screen.update(Message::OtpEdited(3, "5".to_string())),
            Action::FocusOtp(4)
        );
        assert_eq!(
            screen.update(Message::OtpEdited(3, "x".to_string())),
            Action::None
        );
        assert_eq!(screen.code().digit(3), Some('5'));
    }

    #[test]
    fn paste_focuses_last_box() {
        let mut screen = VerifyOtp::new(Some("u1".to_string()));
        assert_eq!(
            screen.update(Message::OtpEdited(0, "123456".to_string())),
            Action::FocusOtp(5)
        );
        assert_eq!(screen.code().code(), "123456");

        assert_eq!(
            screen.update(Message::OtpEdited(2, "3654321".to_string())),
            Action::FocusOtp(5)
        );
        assert_eq!(screen.code().code(), "654321");
    }

    #[test]
    fn incomplete_code() {
        let mut screen = VerifyOtp::new(Some("u1".to_string()));
        enter(&mut screen, "12345");
        assert_eq!(
            screen.update(Message::Submit),
            Action::error("Please enter a valid 6-digit OTP.")
        );
    }

    #[test]
    fn missing_user_id_redirects_to_sign_up() {
        let mut screen = VerifyOtp::new(None);
        enter(&mut screen, "123456");
        assert_eq!(
            screen.update(Message::Submit).into_vec(),
            vec![Action::error(SESSION_EXPIRED), Action::Navigate(Route::SignUp)]
        );
        assert_eq!(
            screen.update(Message::Resend).into_vec(),
            vec![Action::error(SESSION_EXPIRED), Action::Navigate(Route::SignUp)]
        );
    }

    #[test]
    fn verify_then_kyc() {
        let mut screen = VerifyOtp::new(Some("u1".to_string()));
        enter(&mut screen, "123456");
        assert_eq!(
            screen.update(Message::Submit),
            Action::Request(Request::VerifyOtp(VerifyOtpData {
                user_id: "u1".to_string(),
                otp: "123456".to_string(),
            }))
        );
        assert_eq!(screen.update(Message::Submit), Action::None);
        let action = screen.update(Message::Response(Response::OtpVerified(Ok(Verified {
            message: "Email verified".to_string(),
            authenticated: None,
        }))));
        assert_eq!(
            action.into_vec(),
            vec![Action::success("Email verified"), Action::Navigate(Route::Kyc)]
        );
    }

    #[test]
    fn resend() {
        let mut screen = VerifyOtp::new(Some("u1".to_string()));
        enter(&mut screen, "123");
        assert_eq!(
            screen.update(Message::Resend),
            Action::Request(Request::ResendOtp("u1".to_string()))
        );
        assert_eq!(screen.update(Message::Resend), Action::None);
        let action = screen.update(Message::Response(Response::OtpResent(Err(
            ServiceError::Request {
                message: "Failed to resend OTP.".to_string(),
                status: None,
            },
        ))));
        assert_eq!(action, Action::error("Failed to resend OTP."));
        assert_eq!(screen.code().code(), "123");
    }
}
