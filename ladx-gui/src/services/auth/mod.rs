use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod service;

pub use client::AuthClient;
pub use service::{AuthService, Authenticated};

use super::http::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sender,
    Traveler,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub const SELECTABLE: [Role; 2] = [Role::Sender, Role::Traveler];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sender => write!(f, "Sender"),
            Self::Traveler => write!(f, "Traveler"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub phone_number: String,
    pub gender: String,
    pub role: Role,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpFormData {
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub phone_number: String,
    pub gender: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInFormData {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpData {
    pub user_id: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpData {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordData {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordData {
    pub user_id: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRoleData {
    pub role: Role,
}

/// Body returned by every auth endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Transport to the authentication endpoints of the LADX API.
#[async_trait]
pub trait AuthApi: std::fmt::Debug + Send + Sync {
    async fn sign_up(&self, data: &SignUpFormData) -> Result<AuthResponse, ApiError>;
    async fn login(&self, data: &SignInFormData) -> Result<AuthResponse, ApiError>;
    async fn verify_otp(&self, data: &VerifyOtpData) -> Result<AuthResponse, ApiError>;
    async fn resend_otp(&self, data: &ResendOtpData) -> Result<AuthResponse, ApiError>;
    async fn forgot_password(&self, data: &ForgotPasswordData)
        -> Result<AuthResponse, ApiError>;
    async fn reset_password(&self, data: &ResetPasswordData) -> Result<AuthResponse, ApiError>;
    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError>;
    async fn update_role(
        &self,
        token: Option<&str>,
        data: &UpdateRoleData,
    ) -> Result<AuthResponse, ApiError>;
}
