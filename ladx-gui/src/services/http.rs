use async_trait::async_trait;
use reqwest::Response;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unsuccessful HTTP response {status}: {}", .message.as_deref().unwrap_or("-"))]
    Unsuccessful {
        status: u16,
        message: Option<String>,
    },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Message of the JSON error body sent by the server.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unsuccessful { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unsuccessful { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<NotSuccessResponseInfo> for ApiError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Unsuccessful {
            status: info.status_code,
            message: message_from_body(&info.text),
        }
    }
}

/// Extracts the non-empty `message` field of a JSON body.
pub fn message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    /// Answers a single request on a local port with `status` and the JSON `body`.
    /// Returns the base url to call and a handle resolving to the raw request received.
    pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            while !is_complete(&raw) {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {} Test\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8_lossy(&raw).into_owned()
        });
        (url, handle)
    }

    fn is_complete(raw: &[u8]) -> bool {
        let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let head = String::from_utf8_lossy(&raw[..end]).to_lowercase();
        let body = &raw[end + 4..];
        if head.contains("transfer-encoding: chunked") {
            return body.ends_with(b"0\r\n\r\n");
        }
        let length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    /// Value of the header `name` in a raw request, matched case-insensitively.
    pub fn header<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
        raw.lines()
            .take_while(|l| !l.is_empty())
            .skip(1)
            .find_map(|l| {
                let (key, value) = l.split_once(':')?;
                key.eq_ignore_ascii_case(name).then(|| value.trim())
            })
    }

    pub fn request_line(raw: &str) -> &str {
        raw.lines().next().unwrap_or_default()
    }

    pub fn body(raw: &str) -> &str {
        raw.split_once("\r\n\r\n").map(|(_, b)| b).unwrap_or_default()
    }

    #[test]
    fn message_extraction() {
        assert_eq!(
            message_from_body(r#"{"success":false,"message":"No account found"}"#).as_deref(),
            Some("No account found")
        );
        assert_eq!(message_from_body(r#"{"success":false,"message":""}"#), None);
        assert_eq!(message_from_body(r#"{"error":"oops"}"#), None);
        assert_eq!(message_from_body("<html>Bad gateway</html>"), None);
    }

    #[test]
    fn unsuccessful_response() {
        let e = ApiError::from(NotSuccessResponseInfo {
            status_code: 404,
            text: r#"{"message":"No account found"}"#.to_string(),
        });
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.server_message(), Some("No account found"));
        assert_eq!(ApiError::Network("refused".into()).server_message(), None);
    }
}
