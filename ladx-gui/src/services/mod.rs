pub mod auth;
pub mod http;
pub mod kyc;

use http::ApiError;

/// Failure of a request, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Transport or server failure. `status` is only kept for the logs.
    #[error("{message}")]
    Request {
        message: String,
        status: Option<u16>,
    },
    #[error("User information not found.")]
    MissingUser,
}

impl ServiceError {
    /// Uses the message sent by the server if any, `default` otherwise.
    pub fn from_api(e: ApiError, default: &str) -> Self {
        tracing::warn!("{}: {}", default, e);
        let status = e.status();
        Self::Request {
            message: e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| default.to_string()),
            status,
        }
    }

    /// A 2xx response carrying `success: false`.
    pub fn rejected(message: &str, default: &str) -> Self {
        tracing::warn!("{}: request rejected: {}", default, message);
        Self::Request {
            message: if message.is_empty() {
                default.to_string()
            } else {
                message.to_string()
            },
            status: None,
        }
    }
}
