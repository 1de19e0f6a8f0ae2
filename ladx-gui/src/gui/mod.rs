use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::{
    alignment,
    event::{self, Event},
    keyboard,
    widget::{focus_next, focus_previous, text_input},
    Length, Subscription, Task,
};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use ladx_ui::{
    component::{notification, otp},
    theme,
    widget::*,
};

use crate::{
    config::{self, TokenStore},
    dir::LadxDirectory,
    logger::setup_logger,
    route::Route,
    screen::{
        dashboard::{self, Dashboard},
        forgot_password::{self, ForgotPassword},
        kyc::{self, Kyc},
        reset_password::{self, ResetPassword},
        role_selection::{self, RoleSelection},
        signin::{self, SignIn},
        signup::{self, SignUp},
        verify_otp::{self, VerifyOtp},
        Action, Request, Response, Toast,
    },
    services::{
        auth::{client::AuthClient, service::AuthService},
        kyc::{client::KycClient, IdentityDocument, KycService, DOCUMENT_EXTENSIONS},
    },
    session::Session,
    storage::{FileStorage, KeyringStorage, Storage, Stores, KEYRING_SERVICE},
    VERSION,
};

/// How long a toast stays on screen if not closed.
const TOAST_DURATION: Duration = Duration::from_secs(5);

pub struct Config {
    pub ladx_directory: LadxDirectory,
    pub settings: config::Config,
    /// Screen to open instead of the one picked from the restored session.
    pub initial_route: Option<Route>,
}

impl Config {
    pub fn new(
        ladx_directory: LadxDirectory,
        settings: config::Config,
        initial_route: Option<Route>,
    ) -> Self {
        Self {
            ladx_directory,
            settings,
            initial_route,
        }
    }
}

pub struct GUI {
    session: Session,
    auth: AuthService,
    kyc: KycService,
    screen: Screen,
    toasts: Vec<Notification>,
    next_toast_id: u64,
}

struct Notification {
    id: u64,
    toast: Toast,
    shown_at: Instant,
}

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    Tick,
    KeyPressed(Key),
    Screen(ScreenMessage),
    Response(Response),
    DismissToast(u64),
}

#[derive(Debug, Clone)]
pub enum ScreenMessage {
    SignUp(signup::Message),
    SignIn(signin::Message),
    VerifyOtp(verify_otp::Message),
    ForgotPassword(forgot_password::Message),
    ResetPassword(reset_password::Message),
    Kyc(kyc::Message),
    RoleSelection(role_selection::Message),
    Dashboard(dashboard::Message),
}

enum Screen {
    SignUp(SignUp),
    SignIn(SignIn),
    VerifyOtp(VerifyOtp),
    ForgotPassword(ForgotPassword),
    ResetPassword(ResetPassword),
    Kyc(Kyc),
    RoleSelection(RoleSelection),
    Dashboard(Dashboard),
}

impl Screen {
    fn path(&self) -> &'static str {
        match self {
            Self::SignUp(_) => Route::SignUp.path(),
            Self::SignIn(_) => Route::SignIn.path(),
            Self::VerifyOtp(_) => Route::VerifyOtp.path(),
            Self::ForgotPassword(_) => Route::ForgotPassword.path(),
            Self::ResetPassword(_) => "/reset-password",
            Self::Kyc(_) => Route::Kyc.path(),
            Self::RoleSelection(_) => Route::RoleSelection.path(),
            Self::Dashboard(d) => d.route().path(),
        }
    }

    fn update(&mut self, message: ScreenMessage) -> Action {
        match (self, message) {
            (Self::SignUp(s), ScreenMessage::SignUp(msg)) => s.update(msg),
            (Self::SignIn(s), ScreenMessage::SignIn(msg)) => s.update(msg),
            (Self::VerifyOtp(s), ScreenMessage::VerifyOtp(msg)) => s.update(msg),
            (Self::ForgotPassword(s), ScreenMessage::ForgotPassword(msg)) => s.update(msg),
            (Self::ResetPassword(s), ScreenMessage::ResetPassword(msg)) => s.update(msg),
            (Self::Kyc(s), ScreenMessage::Kyc(msg)) => s.update(msg),
            (Self::RoleSelection(s), ScreenMessage::RoleSelection(msg)) => s.update(msg),
            (Self::Dashboard(s), ScreenMessage::Dashboard(msg)) => s.update(msg),
            // Message emitted by a screen that was left in the meantime.
            _ => Action::None,
        }
    }

    fn respond(&mut self, response: Response) -> Action {
        match self {
            Self::SignUp(s) => s.update(signup::Message::Response(response)),
            Self::SignIn(s) => s.update(signin::Message::Response(response)),
            Self::VerifyOtp(s) => s.update(verify_otp::Message::Response(response)),
            Self::ForgotPassword(s) => s.update(forgot_password::Message::Response(response)),
            Self::ResetPassword(s) => s.update(reset_password::Message::Response(response)),
            Self::Kyc(s) => s.update(kyc::Message::Response(response)),
            Self::RoleSelection(s) => s.update(role_selection::Message::Response(response)),
            Self::Dashboard(s) => s.update(dashboard::Message::Response(response)),
        }
    }

    fn view(&self) -> Element<ScreenMessage> {
        match self {
            Self::SignUp(s) => s.view().map(ScreenMessage::SignUp),
            Self::SignIn(s) => s.view().map(ScreenMessage::SignIn),
            Self::VerifyOtp(s) => s.view().map(ScreenMessage::VerifyOtp),
            Self::ForgotPassword(s) => s.view().map(ScreenMessage::ForgotPassword),
            Self::ResetPassword(s) => s.view().map(ScreenMessage::ResetPassword),
            Self::Kyc(s) => s.view().map(ScreenMessage::Kyc),
            Self::RoleSelection(s) => s.view().map(ScreenMessage::RoleSelection),
            Self::Dashboard(s) => s.view().map(ScreenMessage::Dashboard),
        }
    }
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

async fn pick_document() -> Option<IdentityDocument> {
    let file = rfd::AsyncFileDialog::new()
        .set_title("Select your identity document")
        .add_filter("Identity document", DOCUMENT_EXTENSIONS)
        .pick_file()
        .await?;
    let bytes = file.read().await;
    Some(IdentityDocument {
        file_name: file.file_name(),
        bytes,
    })
}

fn durable_storage(config: &Config) -> Arc<dyn Storage> {
    match config.settings.token_store {
        TokenStore::File => Arc::new(FileStorage::new(config.ladx_directory.storage_file())),
        TokenStore::Keyring => Arc::new(KeyringStorage::new(KEYRING_SERVICE)),
    }
}

impl GUI {
    pub fn title(&self) -> String {
        format!("LADX v{}", VERSION)
    }

    pub fn new((config, log_level): (Config, Option<LevelFilter>)) -> (GUI, Task<Message>) {
        let log_level = log_level.unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, &config.ladx_directory) {
            tracing::warn!("Error while setting logger: {}", e);
        }
        info!("Using api {}", config.settings.api_url());

        let stores = Stores::new(durable_storage(&config));
        let auth = AuthService::new(
            Arc::new(AuthClient::new(config.settings.api_url())),
            stores,
        );
        let kyc = KycService::new(Arc::new(KycClient::new(config.settings.api_url())));
        let (gui, task) = Self::with_services(auth, kyc, config.initial_route);
        (
            gui,
            Task::batch(vec![task, Task::perform(ctrl_c(), |_| Message::CtrlC)]),
        )
    }

    /// Restores the session from the service storages and opens the first screen.
    fn with_services(
        auth: AuthService,
        kyc: KycService,
        initial_route: Option<Route>,
    ) -> (GUI, Task<Message>) {
        let session = Session::restore(auth.stores());
        let route = initial_route.unwrap_or_else(|| session.home());
        let mut gui = Self {
            session,
            auth,
            kyc,
            screen: Screen::SignIn(SignIn::new()),
            toasts: Vec::new(),
            next_toast_id: 0,
        };
        let task = gui.navigate(route);
        (gui, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::KeyPressed(Key::Tab(shift)) => {
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Tick => {
                self.toasts
                    .retain(|n| n.shown_at.elapsed() < TOAST_DURATION);
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.retain(|n| n.id != id);
                Task::none()
            }
            Message::Screen(msg) => {
                let action = self.screen.update(msg);
                self.execute(action)
            }
            Message::Response(response) => {
                self.apply_to_session(&response);
                let action = self.screen.respond(response);
                self.execute(action)
            }
        }
    }

    /// Keeps the in-memory session in line with what the services just stored.
    fn apply_to_session(&mut self, response: &Response) {
        match response {
            Response::LoggedIn(Ok(auth)) => self.session.establish(auth.clone()),
            Response::OtpVerified(Ok(verified)) => {
                if let Some(auth) = &verified.authenticated {
                    self.session.establish(auth.clone());
                }
            }
            Response::RoleUpdated(role, Ok(_)) => self.session.set_role(*role),
            Response::LoggedOut => self.session.clear(),
            _ => {}
        }
    }

    fn execute(&mut self, action: Action) -> Task<Message> {
        let tasks: Vec<Task<Message>> = action
            .into_vec()
            .into_iter()
            .map(|action| match action {
                Action::Request(request) => self.request(request),
                Action::Navigate(route) => self.navigate(route),
                Action::Notify(toast) => {
                    self.notify(toast);
                    Task::none()
                }
                Action::FocusOtp(index) => text_input::focus(otp::box_id(index)),
                Action::None | Action::Batch(_) => Task::none(),
            })
            .collect();
        Task::batch(tasks)
    }

    fn notify(&mut self, toast: Toast) {
        self.toasts.push(Notification {
            id: self.next_toast_id,
            toast,
            shown_at: Instant::now(),
        });
        self.next_toast_id += 1;
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        let route = if route.requires_auth() && !self.session.is_authenticated() {
            tracing::debug!("{} requires a session, redirecting to sign in", route);
            Route::SignIn
        } else {
            route
        };
        let mut task = Task::none();
        self.screen = match route {
            Route::SignUp => Screen::SignUp(SignUp::new()),
            Route::SignIn => Screen::SignIn(SignIn::new()),
            Route::VerifyOtp => {
                task = text_input::focus(otp::box_id(0));
                Screen::VerifyOtp(VerifyOtp::new(self.auth.pending_user_id()))
            }
            Route::ForgotPassword => Screen::ForgotPassword(ForgotPassword::new()),
            Route::ResetPassword { user_id, token } => {
                Screen::ResetPassword(ResetPassword::new(user_id, token))
            }
            Route::Kyc => Screen::Kyc(Kyc::new()),
            Route::RoleSelection => Screen::RoleSelection(RoleSelection::new()),
            Route::SenderDashboard | Route::TravelerDashboard | Route::Dashboard => {
                Screen::Dashboard(Dashboard::new(route, self.session.user().cloned()))
            }
        };
        info!("Opened {}", self.screen.path());
        task
    }

    fn request(&self, request: Request) -> Task<Message> {
        let auth = self.auth.clone();
        let token = self.session.token().map(str::to_string);
        match request {
            Request::SignUp(data) => Task::perform(async move { auth.sign_up(data).await }, |res| {
                Message::Response(Response::SignedUp(res))
            }),
            Request::Login(data) => Task::perform(async move { auth.login(data).await }, |res| {
                Message::Response(Response::LoggedIn(res))
            }),
            Request::VerifyOtp(data) => {
                Task::perform(async move { auth.verify_otp(data).await }, |res| {
                    Message::Response(Response::OtpVerified(res))
                })
            }
            Request::ResendOtp(user_id) => {
                Task::perform(async move { auth.resend_otp(user_id).await }, |res| {
                    Message::Response(Response::OtpResent(res))
                })
            }
            Request::ForgotPassword(data) => {
                Task::perform(async move { auth.forgot_password(data).await }, |res| {
                    Message::Response(Response::ResetEmailSent(res))
                })
            }
            Request::ResetPassword(data) => {
                Task::perform(async move { auth.reset_password(data).await }, |res| {
                    Message::Response(Response::PasswordReset(res))
                })
            }
            Request::UpdateRole(role) => Task::perform(
                async move { auth.update_role(token, role).await },
                move |res| Message::Response(Response::RoleUpdated(role, res)),
            ),
            Request::SubmitKyc(submission) => {
                let kyc = self.kyc.clone();
                Task::perform(async move { kyc.submit(token, submission).await }, |res| {
                    Message::Response(Response::KycSubmitted(res))
                })
            }
            Request::ListKyc(query) => {
                let kyc = self.kyc.clone();
                Task::perform(async move { kyc.list(token, query).await }, |res| {
                    Message::Response(Response::KycListed(res))
                })
            }
            Request::PickDocument => Task::perform(pick_document(), |doc| {
                Message::Response(Response::DocumentPicked(doc))
            }),
            Request::Logout => Task::perform(async move { auth.logout(token).await }, |_| {
                Message::Response(Response::LoggedOut)
            }),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::event::listen_with(|event, status, _| {
            match (&event, status) {
                (
                    Event::Keyboard(keyboard::Event::KeyPressed {
                        key: keyboard::Key::Named(keyboard::key::Named::Tab),
                        modifiers,
                        ..
                    }),
                    event::Status::Ignored,
                ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
                _ => None,
            }
        })];
        if !self.toasts.is_empty() {
            subscriptions.push(iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick));
        }
        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<Message> {
        let toasts = self.toasts.iter().fold(Column::new().spacing(10), |col, n| {
            col.push(notification::toast(
                n.toast.level,
                &n.toast.message,
                Message::DismissToast(n.id),
            ))
        });
        let content = Column::new()
            .push_maybe((!self.toasts.is_empty()).then(|| {
                Container::new(toasts)
                    .padding(10)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
            }))
            .push(
                Scrollable::new(
                    Container::new(self.screen.view().map(Message::Screen))
                        .padding(20)
                        .center_x(Length::Fill),
                )
                .height(Length::Fill),
            );
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::container::background)
            .into()
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        screen::{signin, Toast},
        services::{
            auth::{
                service::tests::{login_response, user, FakeAuthApi},
                Authenticated, Role,
            },
            kyc::tests::FakeKycApi,
        },
        storage::{Stores, ACCESS_TOKEN_KEY, CURRENT_USER_KEY},
    };
    use ladx_ui::component::notification::Level;

    fn shell(stores: Stores, route: Option<Route>) -> GUI {
        let auth = AuthService::new(FakeAuthApi::with(Ok(login_response(Role::Sender))), stores);
        let kyc = KycService::new(Arc::new(FakeKycApi::default()));
        GUI::with_services(auth, kyc, route).0
    }

    fn signed_in_stores(role: Role) -> Stores {
        let stores = Stores::in_memory();
        stores.durable.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        stores
            .durable
            .set(
                CURRENT_USER_KEY,
                &serde_json::to_string(&user(role)).unwrap(),
            )
            .unwrap();
        stores
    }

    #[test]
    fn starts_on_sign_in_without_session() {
        let gui = shell(Stores::in_memory(), None);
        assert_eq!(gui.screen.path(), "/signin");
        assert!(!gui.session.is_authenticated());
    }

    #[test]
    fn restored_session_opens_role_dashboard() {
        let gui = shell(signed_in_stores(Role::Traveler), None);
        assert!(gui.session.is_authenticated());
        assert_eq!(gui.screen.path(), "/traveler-dashboard");
    }

    #[test]
    fn dashboard_waits_for_submissions_request() {
        let gui = shell(signed_in_stores(Role::Sender), None);
        match &gui.screen {
            Screen::Dashboard(d) => assert!(!d.is_loading()),
            _ => panic!("expected the dashboard"),
        }
        assert!(gui.toasts.is_empty());
    }

    #[test]
    fn protected_route_redirects_to_sign_in() {
        for route in [
            Route::RoleSelection,
            Route::SenderDashboard,
            Route::TravelerDashboard,
            Route::Dashboard,
        ] {
            let gui = shell(Stores::in_memory(), Some(route));
            assert_eq!(gui.screen.path(), "/signin");
        }

        let gui = shell(Stores::in_memory(), Some(Route::Kyc));
        assert_eq!(gui.screen.path(), "/kyc");
    }

    #[test]
    fn reset_password_route_opens_the_form() {
        let gui = shell(
            Stores::in_memory(),
            Some("/reset-password?userId=42&token=t0k".parse().unwrap()),
        );
        assert_eq!(gui.screen.path(), "/reset-password");
    }

    #[test]
    fn login_establishes_session_and_opens_dashboard() {
        let mut gui = shell(Stores::in_memory(), None);
        let _ = gui.update(Message::Response(Response::LoggedIn(Ok(Authenticated {
            token: "abc".to_string(),
            user: Some(user(Role::Sender)),
            message: "Login successful".to_string(),
        }))));
        assert_eq!(gui.session.token(), Some("abc"));
        assert_eq!(gui.screen.path(), "/sender-dashboard");
        assert_eq!(
            gui.toasts.iter().map(|n| n.toast.clone()).collect::<Vec<_>>(),
            vec![Toast {
                level: Level::Success,
                message: "Login successful!".to_string(),
            }]
        );
    }

    #[test]
    fn role_update_changes_session_user() {
        let mut gui = shell(signed_in_stores(Role::Unknown), Some(Route::RoleSelection));
        assert_eq!(gui.screen.path(), "/role-selection");
        let _ = gui.update(Message::Response(Response::RoleUpdated(
            Role::Traveler,
            Ok("Role updated".to_string()),
        )));
        assert_eq!(gui.session.user().map(|u| u.role), Some(Role::Traveler));
    }

    #[test]
    fn logout_clears_session() {
        let mut gui = shell(signed_in_stores(Role::Sender), None);
        assert_eq!(gui.screen.path(), "/sender-dashboard");
        let _ = gui.update(Message::Response(Response::LoggedOut));
        assert!(!gui.session.is_authenticated());
        assert_eq!(gui.screen.path(), "/signin");
    }

    #[test]
    fn stale_screen_message_is_ignored() {
        let mut gui = shell(Stores::in_memory(), None);
        let _ = gui.update(Message::Screen(ScreenMessage::Kyc(kyc::Message::Submit)));
        assert_eq!(gui.screen.path(), "/signin");
        assert!(gui.toasts.is_empty());

        let _ = gui.update(Message::Screen(ScreenMessage::SignIn(signin::Message::SignUp)));
        assert_eq!(gui.screen.path(), "/signup");
    }

    #[test]
    fn toasts_are_dismissed() {
        let mut gui = shell(Stores::in_memory(), None);
        let _ = gui.update(Message::Screen(ScreenMessage::SignIn(signin::Message::Submit)));
        assert_eq!(gui.toasts.len(), 1);
        assert_eq!(gui.toasts[0].toast.level, Level::Error);

        let id = gui.toasts[0].id;
        let _ = gui.update(Message::DismissToast(id));
        assert!(gui.toasts.is_empty());

        gui.notify(Toast {
            level: Level::Info,
            message: "old".to_string(),
        });
        let _ = gui.view();
        let dismiss = Message::DismissToast(gui.toasts[0].id);
        let _ = gui.update(dismiss.clone());
        assert!(gui.toasts.is_empty());

        gui.notify(Toast {
            level: Level::Info,
            message: "old".to_string(),
        });
        gui.toasts[0].shown_at -= TOAST_DURATION;
        let _ = gui.update(Message::Tick);
        assert!(gui.toasts.is_empty());
    }
}
