use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};

use super::*;
use crate::services::http::ResponseExt;

#[derive(Debug, Clone)]
pub struct KycClient {
    client: Client,
    base_url: String,
}

impl KycClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/kyc", api_url),
        }
    }
}

#[async_trait]
impl KycApi for KycClient {
    async fn submit(
        &self,
        token: Option<&str>,
        submission: KycSubmission,
    ) -> Result<KycResponse, ApiError> {
        let mime = submission.identity_document.mime();
        let document = Part::bytes(submission.identity_document.bytes)
            .file_name(submission.identity_document.file_name)
            .mime_str(mime)?;
        let form = Form::new()
            .text("residential_address", submission.residential_address)
            .text("work_address", submission.work_address)
            .text("identity_type", submission.identity_type.as_str())
            .part("identity_document", document);

        let url = format!("{}/", self.base_url);
        let mut request = self.client.post(&url).multipart(form);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let response = response.check_success().await?;

        Ok(response.json().await?)
    }

    async fn list(&self, token: Option<&str>, query: &KycListQuery) -> Result<KycList, ApiError> {
        let url = format!("{}/", self.base_url);
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let response = response.check_success().await?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        http::tests::{header, request_line, serve_once},
        kyc::tests::submission,
    };

    #[tokio::test]
    async fn submit_request() {
        let (url, server) =
            serve_once(201, r#"{"success":true,"message":"KYC submitted successfully"}"#).await;
        let res = KycClient::new(&url)
            .submit(Some("abc"), submission())
            .await
            .unwrap();
        assert_eq!(res.message, "KYC submitted successfully");

        let raw = server.await.unwrap();
        assert_eq!(request_line(&raw), "POST /kyc/ HTTP/1.1");
        assert_eq!(header(&raw, "authorization"), Some("Bearer abc"));
        assert!(header(&raw, "content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
        for part in [
            "name=\"residential_address\"\r\n\r\n12 Allen Avenue, Ikeja\r\n",
            "name=\"work_address\"\r\n\r\n3 Marina Road, Lagos Island\r\n",
            "name=\"identity_type\"\r\n\r\npassport\r\n",
            "name=\"identity_document\"; filename=\"passport.PDF\"\r\nContent-Type: application/pdf",
        ] {
            assert!(raw.contains(part), "missing part {:?} in {}", part, raw);
        }
    }

    #[tokio::test]
    async fn list_request() {
        let (url, server) = serve_once(
            200,
            r#"{"success":true,"data":[],"pagination":{"total":0,"page":2,"limit":10,"totalPages":0}}"#,
        )
        .await;
        let list = KycClient::new(&url)
            .list(
                Some("abc"),
                &KycListQuery {
                    status: Some("pending".to_string()),
                    page: Some(2),
                    limit: Some(10),
                },
            )
            .await
            .unwrap();
        assert!(list.data.is_empty());
        assert_eq!(list.pagination.page, 2);

        let raw = server.await.unwrap();
        assert_eq!(
            request_line(&raw),
            "GET /kyc/?status=pending&page=2&limit=10 HTTP/1.1"
        );
        assert_eq!(header(&raw, "authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn server_message_of_failed_list() {
        let (url, server) =
            serve_once(403, r#"{"success":false,"message":"Access denied. Admins only."}"#).await;
        let err = KycClient::new(&url)
            .list(None, &KycListQuery::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.server_message(), Some("Access denied. Admins only."));

        let raw = server.await.unwrap();
        assert_eq!(request_line(&raw), "GET /kyc/ HTTP/1.1");
        assert_eq!(header(&raw, "authorization"), None);
    }
}
