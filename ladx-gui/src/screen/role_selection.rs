use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, text},
    widget::*,
};

use super::{or_default, Action, Request, Response};
use crate::{route::Route, services::auth::Role, validation::ROLE_MISSING};

#[derive(Debug, Clone)]
pub enum Message {
    RoleSelected(Role),
    Submit,
    Response(Response),
}

#[derive(Debug, Default)]
pub struct RoleSelection {
    role: Option<Role>,
    processing: bool,
}

impl RoleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::RoleSelected(role) => self.role = Some(role),
            Message::Submit => {
                if self.processing {
                    return Action::None;
                }
                let Some(role) = self.role else {
                    return Action::error(ROLE_MISSING);
                };
                self.processing = true;
                return Action::Request(Request::UpdateRole(role));
            }
            Message::Response(Response::RoleUpdated(role, res)) => {
                self.processing = false;
                return match res {
                    Ok(message) => Action::batch([
                        Action::success(or_default(message, "Role updated successfully!")),
                        Action::Navigate(Route::dashboard(role)),
                    ]),
                    Err(e) => Action::error(e.to_string()),
                };
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    pub fn view(&self) -> Element<Message> {
        let roles = Role::SELECTABLE
            .iter()
            .fold(Column::new().spacing(15), |col, role| {
                col.push(Radio::new(
                    role.to_string(),
                    *role,
                    self.role,
                    Message::RoleSelected,
                ))
            });

        card(
            "Select Your Role",
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(text::p1_regular(
                    "Choose your role to access the right dashboard.",
                ))
                .push(roles)
                .push(
                    button::primary(if self.processing {
                        "Submitting..."
                    } else {
                        "Submit"
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
    use crate::services::ServiceError;

    #[test]
    fn role_is_required() {
        let mut screen = RoleSelection::new();
        assert_eq!(
            screen.update(Message::Submit),
            Action::error("Please select a role to proceed.")
        );
    }

    #[test]
    fn navigate_to_role_dashboard() {
        for (role, route) in [
            (Role::Sender, Route::SenderDashboard),
            (Role::Traveler, Route::TravelerDashboard),
        ] {
            let mut screen = RoleSelection::new();
            screen.update(Message::RoleSelected(role));
            assert_eq!(
                screen.update(Message::Submit),
                Action::Request(Request::UpdateRole(role))
            );
            assert_eq!(screen.update(Message::Submit), Action::None);
            let action = screen.update(Message::Response(Response::RoleUpdated(
                role,
                Ok("Role updated".to_string()),
            )));
            assert_eq!(
                action.into_vec(),
                vec![Action::success("Role updated"), Action::Navigate(route)]
            );
        }
    }

    #[test]
    fn failure_keeps_selection() {
        let mut screen = RoleSelection::new();
        screen.update(Message::RoleSelected(Role::Sender));
        screen.update(Message::Submit);
        let action = screen.update(Message::Response(Response::RoleUpdated(
            Role::Sender,
            Err(ServiceError::Request {
                message: "Failed to update role.".to_string(),
                status: Some(401),
            }),
        )));
        assert_eq!(action, Action::error("Failed to update role."));
        assert_eq!(
            screen.update(Message::Submit),
            Action::Request(Request::UpdateRole(Role::Sender))
        );
    }
}
