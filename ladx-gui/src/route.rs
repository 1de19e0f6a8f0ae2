//! Screens addressed by their path, as used by `--route` and between screens.

use std::{fmt, str::FromStr};

use url::{form_urlencoded, Url};

use crate::services::auth::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignUp,
    SignIn,
    VerifyOtp,
    ForgotPassword,
    ResetPassword {
        user_id: Option<String>,
        token: Option<String>,
    },
    Kyc,
    RoleSelection,
    SenderDashboard,
    TravelerDashboard,
    Dashboard,
}

impl Route {
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Sender => Self::SenderDashboard,
            Role::Traveler => Self::TravelerDashboard,
            Role::Unknown => Self::Dashboard,
        }
    }

    /// Screens reachable only with a session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::RoleSelection | Self::SenderDashboard | Self::TravelerDashboard | Self::Dashboard
        )
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::SignUp => "/signup",
            Self::SignIn => "/signin",
            Self::VerifyOtp => "/verify-otp",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword { .. } => "/reset-password",
            Self::Kyc => "/kyc",
            Self::RoleSelection => "/role-selection",
            Self::SenderDashboard => "/sender-dashboard",
            Self::TravelerDashboard => "/traveler-dashboard",
            Self::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())?;
        if let Self::ResetPassword { user_id, token } = self {
            let mut query = form_urlencoded::Serializer::new(String::new());
            if let Some(user_id) = user_id {
                query.append_pair("userId", user_id);
            }
            if let Some(token) = token {
                query.append_pair("token", token);
            }
            let query = query.finish();
            if !query.is_empty() {
                write!(f, "?{}", query)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid route '{0}'")]
    Invalid(String),
    #[error("Unknown route '{0}'")]
    Unknown(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with('/') {
            return Err(RouteError::Invalid(s.to_string()));
        }
        let url = Url::parse(&format!("ladx://app{}", s))
            .map_err(|_| RouteError::Invalid(s.to_string()))?;

        let route = match url.path().trim_end_matches('/') {
            "" | "/signin" => Self::SignIn,
            "/signup" => Self::SignUp,
            "/verify-otp" => Self::VerifyOtp,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => {
                let mut user_id = None;
                let mut token = None;
                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "userId" => user_id = Some(value.into_owned()),
                        "token" => token = Some(value.into_owned()),
                        _ => {}
                    }
                }
                Self::ResetPassword { user_id, token }
            }
            "/kyc" => Self::Kyc,
            "/role-selection" => Self::RoleSelection,
            "/sender-dashboard" => Self::SenderDashboard,
            "/traveler-dashboard" => Self::TravelerDashboard,
            "/dashboard" => Self::Dashboard,
            _ => return Err(RouteError::Unknown(s.to_string())),
        };
        Ok(route)
    }
}
