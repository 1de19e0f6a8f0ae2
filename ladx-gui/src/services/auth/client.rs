use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;

use super::*;
use crate::services::http::ResponseExt;

#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }

    async fn send<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<AuthResponse, ApiError> {
        tracing::debug!("{} {}", method, path);
        let response = self.request(method, path, token).json(body).send().await?;
        let response = response.check_success().await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn sign_up(&self, data: &SignUpFormData) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/signup", None, data).await
    }

    async fn login(&self, data: &SignInFormData) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/login", None, data).await
    }

    async fn verify_otp(&self, data: &VerifyOtpData) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/verify-otp", None, data).await
    }

    async fn resend_otp(&self, data: &ResendOtpData) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/resend-otp", None, data).await
    }

    async fn forgot_password(
        &self,
        data: &ForgotPasswordData,
    ) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/forgot-password", None, data)
            .await
    }

    async fn reset_password(&self, data: &ResetPasswordData) -> Result<AuthResponse, ApiError> {
        self.send(Method::POST, "/auth/reset-password", None, data)
            .await
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        tracing::debug!("POST /auth/logout");
        let response = self
            .request(Method::POST, "/auth/logout", token)
            .send()
            .await?;
        response.check_success().await?;
        Ok(())
    }

    async fn update_role(
        &self,
        token: Option<&str>,
        data: &UpdateRoleData,
    ) -> Result<AuthResponse, ApiError> {
        self.send(Method::PATCH, "/users/role", token, data).await
    }
}
