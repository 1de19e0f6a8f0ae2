use iced::{Alignment, Length};

use ladx_ui::{
    component::{button, card, text},
    theme,
    widget::*,
};

use super::{Action, Request, Response};
use crate::{
    route::Route,
    services::{
        auth::{Role, User},
        kyc::{KycListQuery, KycRecord},
    },
};

const KYC_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub enum Message {
    LoadKycSubmissions,
    Logout,
    Response(Response),
}

/// Landing screen of an authenticated user.
#[derive(Debug)]
pub struct Dashboard {
    route: Route,
    user: Option<User>,
    submissions: Option<Vec<KycRecord>>,
    loading: bool,
    logging_out: bool,
}

impl Dashboard {
    pub fn new(route: Route, user: Option<User>) -> Self {
        Self {
            route,
            user,
            submissions: None,
            loading: false,
            logging_out: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Logout => {
                if !self.logging_out {
                    self.logging_out = true;
                    return Action::Request(Request::Logout);
                }
            }
            Message::LoadKycSubmissions => {
                if !self.loading {
                    self.loading = true;
                    return Action::Request(Request::ListKyc(KycListQuery {
                        status: None,
                        page: Some(1),
                        limit: Some(KYC_PAGE_SIZE),
                    }));
                }
            }
            Message::Response(Response::LoggedOut) => {
                self.logging_out = false;
                return Action::batch([
                    Action::info("You have been logged out."),
                    Action::Navigate(Route::SignIn),
                ]);
            }
            Message::Response(Response::KycListed(res)) => {
                self.loading = false;
                match res {
                    Ok(list) => self.submissions = Some(list.data),
                    Err(e) => return Action::error(e.to_string()),
                }
            }
            Message::Response(_) => {}
        }
        Action::None
    }

    fn title(&self) -> &'static str {
        match self.route {
            Route::SenderDashboard => "Sender Dashboard",
            Route::TravelerDashboard => "Traveler Dashboard",
            _ => "Dashboard",
        }
    }

    pub fn view(&self) -> Element<Message> {
        let greeting = match &self.user {
            Some(user) if !user.full_name.is_empty() => format!("Welcome, {}!", user.full_name),
            _ => "Welcome!".to_string(),
        };

        let mut content = Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .push(text::h3(greeting))
            .push_maybe(
                self.user
                    .as_ref()
                    .filter(|u| u.role != Role::Unknown)
                    .map(|u| text::p1_regular(format!("Role: {}", u.role))),
            );

        content = content.push(
            button::secondary(if self.loading {
                "Loading..."
            } else {
                "View KYC submissions"
            })
            .on_press_maybe((!self.loading).then_some(Message::LoadKycSubmissions))
            .width(Length::Fill),
        );

        if let Some(submissions) = &self.submissions {
            if submissions.is_empty() {
                content = content.push(
                    text::p2_regular("No KYC submission yet.").style(theme::text::secondary),
                );
            } else {
                content = content.push(
                    Container::new(submissions.iter().fold(
                        Column::new().spacing(5).width(Length::Fill),
                        |col, record| {
                            let status = record.status.as_deref().unwrap_or("pending");
                            col.push(
                                Row::new()
                                    .spacing(10)
                                    .push(
                                        text::p2_regular(&record.identity_type)
                                            .width(Length::Fill),
                                    )
                                    .push(text::p2_regular(status).style(status_style(status))),
                            )
                        },
                    ))
                    .padding(15)
                    .width(Length::Fill)
                    .style(theme::card::border),
                );
            }
        }

        card(
            self.title(),
            content.push(
                button::primary(if self.logging_out {
                    "Logging out..."
                } else {
                    "Logout"
                })
                .on_press_maybe((!self.logging_out).then_some(Message::Logout))
                .width(Length::Fill),
            ),
        )
        .into()
    }
}

fn status_style(status: &str) -> fn(&theme::Theme) -> iced::widget::text::Style {
    match status {
        "approved" | "verified" => theme::text::success,
        "rejected" => theme::text::error,
        _ => theme::text::warning,
    }
}
