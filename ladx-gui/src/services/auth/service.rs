use std::sync::Arc;

use super::*;
use crate::{
    services::ServiceError,
    storage::{Stores, ACCESS_TOKEN_KEY, CURRENT_USER_KEY, USER_ID_KEY},
};

pub const SIGN_UP_FAILED: &str = "Sign-up failed.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const OTP_VERIFICATION_FAILED: &str = "OTP verification failed.";
pub const RESEND_OTP_FAILED: &str = "Failed to resend OTP.";
pub const FORGOT_PASSWORD_FAILED: &str = "Failed to send reset email.";
pub const RESET_PASSWORD_FAILED: &str = "Failed to reset password.";
pub const UPDATE_ROLE_FAILED: &str = "Failed to update role.";

/// Credentials obtained from a login or an OTP verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub token: String,
    pub user: Option<User>,
    pub message: String,
}

/// Result of an OTP verification. The server may or may not open a session with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    pub message: String,
    pub authenticated: Option<Authenticated>,
}

/// Calls the auth endpoints and keeps the storages in sync with their outcome.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    stores: Stores,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, stores: Stores) -> Self {
        Self { api, stores }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Checks the `success` flag of a 2xx body.
    fn accept(
        res: Result<AuthResponse, ApiError>,
        default: &str,
    ) -> Result<AuthResponse, ServiceError> {
        match res {
            Ok(res) if res.success => Ok(res),
            Ok(res) => Err(ServiceError::rejected(&res.message, default)),
            Err(e) => Err(ServiceError::from_api(e, default)),
        }
    }

    /// Identifier of the account waiting for its OTP verification.
    pub fn pending_user_id(&self) -> Option<String> {
        match self.stores.session.get(USER_ID_KEY) {
            Ok(id) => id.filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::error!("Failed to read pending user id: {}", e);
                None
            }
        }
    }

    fn persist(&self, token: &str, user: Option<&User>) {
        if let Err(e) = self.stores.durable.set(ACCESS_TOKEN_KEY, token) {
            tracing::error!("Failed to store access token: {}", e);
        }
        let res = match user.map(serde_json::to_string) {
            Some(Ok(user)) => self.stores.durable.set(CURRENT_USER_KEY, &user),
            Some(Err(e)) => {
                tracing::error!("Failed to serialize user: {}", e);
                Ok(())
            }
            None => self.stores.durable.remove(CURRENT_USER_KEY),
        };
        if let Err(e) = res {
            tracing::error!("Failed to store current user: {}", e);
        }
    }

    pub async fn sign_up(&self, data: SignUpFormData) -> Result<AuthResponse, ServiceError> {
        tracing::info!("Signing up {}", data.email);
        let res = Self::accept(self.api.sign_up(&data).await, SIGN_UP_FAILED)?;
        let stored = match res.user_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => self.stores.session.set(USER_ID_KEY, id),
            None => {
                tracing::warn!("Sign up response has no user id");
                self.stores.session.remove(USER_ID_KEY)
            }
        };
        if let Err(e) = stored {
            tracing::error!("Failed to store pending user id: {}", e);
        }
        Ok(res)
    }

    pub async fn login(&self, data: SignInFormData) -> Result<Authenticated, ServiceError> {
        tracing::info!("Logging in {}", data.email);
        let res = Self::accept(self.api.login(&data).await, LOGIN_FAILED)?;
        let Some(user) = res.user else {
            return Err(ServiceError::MissingUser);
        };
        let Some(token) = res.token else {
            tracing::warn!("Login response has no token");
            return Err(ServiceError::rejected("", LOGIN_FAILED));
        };
        self.persist(&token, Some(&user));
        tracing::info!("Logged in as {} ({})", user.email, user.role);
        Ok(Authenticated {
            token,
            user: Some(user),
            message: res.message,
        })
    }

    pub async fn verify_otp(&self, data: VerifyOtpData) -> Result<Verified, ServiceError> {
        let res = Self::accept(self.api.verify_otp(&data).await, OTP_VERIFICATION_FAILED)?;
        let authenticated = res.token.map(|token| {
            self.persist(&token, res.user.as_ref());
            Authenticated {
                token,
                user: res.user,
                message: res.message.clone(),
            }
        });
        Ok(Verified {
            message: res.message,
            authenticated,
        })
    }

    pub async fn resend_otp(&self, user_id: String) -> Result<String, ServiceError> {
        let data = ResendOtpData { user_id };
        Self::accept(self.api.resend_otp(&data).await, RESEND_OTP_FAILED).map(|res| res.message)
    }

    pub async fn forgot_password(&self, data: ForgotPasswordData) -> Result<String, ServiceError> {
        Self::accept(
            self.api.forgot_password(&data).await,
            FORGOT_PASSWORD_FAILED,
        )
        .map(|res| res.message)
    }

    pub async fn reset_password(&self, data: ResetPasswordData) -> Result<String, ServiceError> {
        Self::accept(self.api.reset_password(&data).await, RESET_PASSWORD_FAILED)
            .map(|res| res.message)
    }

    /// Notifies the server then forgets the credentials, whatever the server answered.
    pub async fn logout(&self, token: Option<String>) {
        if let Err(e) = self.api.logout(token.as_deref()).await {
            tracing::warn!("Logout request failed: {}", e);
        }
        for key in [ACCESS_TOKEN_KEY, CURRENT_USER_KEY] {
            if let Err(e) = self.stores.durable.remove(key) {
                tracing::error!("Failed to remove {} from storage: {}", key, e);
            }
        }
        tracing::info!("Logged out");
    }

    pub async fn update_role(
        &self,
        token: Option<String>,
        role: Role,
    ) -> Result<String, ServiceError> {
        let data = UpdateRoleData { role };
        let res = Self::accept(
            self.api.update_role(token.as_deref(), &data).await,
            UPDATE_ROLE_FAILED,
        )?;
        self.update_stored_role(role);
        Ok(res.message)
    }

    fn update_stored_role(&self, role: Role) {
        let user = match self.stores.durable.get(CURRENT_USER_KEY) {
            Ok(Some(user)) => user,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("Failed to read current user: {}", e);
                return;
            }
        };
        match serde_json::from_str::<User>(&user) {
            Ok(mut user) => {
                user.role = role;
                if let Ok(user) = serde_json::to_string(&user) {
                    if let Err(e) = self.stores.durable.set(CURRENT_USER_KEY, &user) {
                        tracing::error!("Failed to store current user: {}", e);
                    }
                }
            }
            Err(e) => tracing::error!("Stored user is invalid: {}", e),
        }
    }
}
