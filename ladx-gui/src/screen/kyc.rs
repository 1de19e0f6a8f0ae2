use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, form, text},
    widget::*,
};

use super::{or_default, Action, Request, Response};
use crate::{
    route::Route,
    services::kyc::{IdentityDocument, IdentityType, KycSubmission},
    validation::validate_kyc,
};

#[derive(Debug, Clone)]
pub enum Message {
    ResidentialAddressEdited(String),
    WorkAddressEdited(String),
    IdentityTypeSelected(IdentityType),
    PickDocument,
    Submit,
    Response(Response),
}

#[derive(Debug, Default)]
pub struct Kyc {
    residential_address: form::Value<String>,
    work_address: form::Value<String>,
    identity_type: Option<IdentityType>,
    identity_document: Option<IdentityDocument>,
    picking: bool,
    processing: bool,
}

impl Kyc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity_document(&self) -> Option<&IdentityDocument> {
        self.identity_document.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ResidentialAddressEdited(v) => self.residential_address.edit(v),
            Message::WorkAddressEdited(v) => self.work_address.edit(v),
            Message::IdentityTypeSelected(t) => self.identity_type = Some(t),
            Message::PickDocument => {
                if !self.picking {
                    self.picking = true;
                    return Action::Request(Request::PickDocument);
                }
            }
            Message::Submit => return self.submit(),
            Message::Response(Response::DocumentPicked(document)) => {
                self.picking = false;
                // Cancelling the dialog keeps the previous choice.
                if let Some(document) = document {
                    tracing::debug!("Identity document selected: {:?}", document);
                    self.identity_document = Some(document);
                }
            }
            Message::Response(Response::KycSubmitted(res)) => {
                self.processing = false;
                return match res {
                    Ok(message) => Action::batch([
                        Action::success(or_default(message, "KYC submitted successfully!")),
                        Action::Navigate(Route::RoleSelection),
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
        if let Some(error) = validate_kyc(
            &self.residential_address.value,
            &self.work_address.value,
            self.identity_type.is_some(),
            self.identity_document.is_some(),
        ) {
            return Action::error(error);
        }
        let (Some(identity_type), Some(identity_document)) =
            (self.identity_type, self.identity_document.clone())
        else {
            return Action::None;
        };
        self.processing = true;
        Action::Request(Request::SubmitKyc(KycSubmission {
            residential_address: self.residential_address.value.clone(),
            work_address: self.work_address.value.clone(),
            identity_type,
            identity_document,
        }))
    }

    pub fn view(&self) -> Element<Message> {
        card(
            "Verify your identity",
            Column::new()
                .spacing(20)
                .push(text::p1_regular(
                    "Provide accurate details to complete your verification.",
                ))
                .push(
                    form::Form::new(
                        "Enter your residential address",
                        &self.residential_address,
                        Message::ResidentialAddressEdited,
                    )
                    .label("Residential Address")
                    .padding(10),
                )
                .push(
                    form::Form::new(
                        "Enter your work address",
                        &self.work_address,
                        Message::WorkAddressEdited,
                    )
                    .label("Work Address")
                    .padding(10),
                )
                .push(form::select(
                    "Identity Type",
                    "Select Identity Type",
                    &IdentityType::ALL,
                    self.identity_type,
                    None,
                    Message::IdentityTypeSelected,
                ))
                .push(
                    Column::new()
                        .spacing(5)
                        .push(text::p2_regular("Identity Document"))
                        .push(
                            Row::new()
                                .spacing(10)
                                .align_y(Alignment::Center)
                                .push(
                                    button::secondary("Choose file")
                                        .on_press_maybe(
                                            (!self.picking).then_some(Message::PickDocument),
                                        )
                                        .width(Length::Fixed(150.0)),
                                )
                                .push(text::p2_regular(
                                    self.identity_document
                                        .as_ref()
                                        .map(|d| d.file_name.as_str())
                                        .unwrap_or("No file selected"),
                                )),
                        ),
                )
                .push(
                    button::primary(if self.processing {
                        "Submitting..."
                    } else {
                        "Submit KYC"
                    })
                    .on_press_maybe((!self.processing).then_some(Message::Submit))
                    .width(Length::Fill),
                ),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::kyc::tests::submission;

    fn filled() -> Kyc {
        let expected = submission();
        let mut screen = Kyc::new();
        screen.update(Message::ResidentialAddressEdited(
            expected.residential_address,
        ));
        screen.update(Message::WorkAddressEdited(expected.work_address));
        screen.update(Message::IdentityTypeSelected(expected.identity_type));
        screen
    }

    #[test]
    fn document_is_required() {
        let mut screen = filled();
        assert_eq!(
            screen.update(Message::Submit),
            Action::error("Please upload your identity document.")
        );
    }

    #[test]
    fn cancelled_dialog_keeps_previous_document() {
        let mut screen = filled();
        assert_eq!(
            screen.update(Message::PickDocument),
            Action::Request(Request::PickDocument)
        );
        assert_eq!(screen.update(Message::PickDocument), Action::None);
        screen.update(Message::Response(Response::DocumentPicked(Some(
            submission().identity_document,
        ))));
        screen.update(Message::PickDocument);
        screen.update(Message::Response(Response::DocumentPicked(None)));
        assert_eq!(
            screen.identity_document().map(|d| d.file_name.as_str()),
            Some("passport.PDF")
        );
    }

    #[test]
    fn submit_then_role_selection() {
        let mut screen = filled();
        screen.update(Message::Response(Response::DocumentPicked(Some(
            submission().identity_document,
        ))));
        assert_eq!(
            screen.update(Message::Submit),
            Action::Request(Request::SubmitKyc(submission()))
        );
        assert_eq!(screen.update(Message::Submit), Action::None);
        let action = screen.update(Message::Response(Response::KycSubmitted(Ok(
            "KYC submitted".to_string(),
        ))));
        assert_eq!(
            action.into_vec(),
            vec![
                Action::success("KYC submitted"),
                Action::Navigate(Route::RoleSelection)
            ]
        );
    }
}
