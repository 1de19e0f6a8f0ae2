use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod client;
pub use client::KycClient;

use super::{http::ApiError, ServiceError};

pub const SUBMIT_FAILED: &str = "Failed to submit KYC.";
pub const LIST_FAILED: &str = "Failed to fetch KYC submissions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    NationalId,
    Passport,
    DriverLicense,
}

impl IdentityType {
    pub const ALL: [IdentityType; 3] = [
        IdentityType::NationalId,
        IdentityType::Passport,
        IdentityType::DriverLicense,
    ];

    /// Value sent in the `identity_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::Passport => "passport",
            Self::DriverLicense => "driver_license",
        }
    }
}

impl std::fmt::Display for IdentityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NationalId => write!(f, "National ID"),
            Self::Passport => write!(f, "Passport"),
            Self::DriverLicense => write!(f, "Driver's License"),
        }
    }
}

/// Extensions offered by the file dialog. Not enforced.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "gif", "webp", "bmp"];

#[derive(Clone, PartialEq, Eq)]
pub struct IdentityDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for IdentityDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityDocument")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl IdentityDocument {
    pub fn mime(&self) -> &'static str {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => "application/pdf",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycSubmission {
    pub residential_address: String,
    pub work_address: String,
    pub identity_type: IdentityType,
    pub identity_document: IdentityDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KycListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KycResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KycRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub residential_address: String,
    pub work_address: String,
    pub identity_type: String,
    pub identity_document: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(alias = "totalPages")]
    pub pages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KycList {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<KycRecord>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[async_trait]
pub trait KycApi: std::fmt::Debug + Send + Sync {
    async fn submit(
        &self,
        token: Option<&str>,
        submission: KycSubmission,
    ) -> Result<KycResponse, ApiError>;
    async fn list(&self, token: Option<&str>, query: &KycListQuery) -> Result<KycList, ApiError>;
}

#[derive(Debug, Clone)]
pub struct KycService {
    api: Arc<dyn KycApi>,
}

impl KycService {
    pub fn new(api: Arc<dyn KycApi>) -> Self {
        Self { api }
    }

    pub async fn submit(
        &self,
        token: Option<String>,
        submission: KycSubmission,
    ) -> Result<String, ServiceError> {
        tracing::info!(
            "Submitting KYC with {} document {:?}",
            submission.identity_type,
            submission.identity_document
        );
        match self.api.submit(token.as_deref(), submission).await {
            Ok(res) if res.success => Ok(res.message),
            Ok(res) => Err(ServiceError::rejected(&res.message, SUBMIT_FAILED)),
            Err(e) => Err(ServiceError::from_api(e, SUBMIT_FAILED)),
        }
    }

    pub async fn list(
        &self,
        token: Option<String>,
        query: KycListQuery,
    ) -> Result<KycList, ServiceError> {
        match self.api.list(token.as_deref(), &query).await {
            Ok(res) if res.success => Ok(res),
            Ok(res) => Err(ServiceError::rejected(&res.message, LIST_FAILED)),
            Err(e) => Err(ServiceError::from_api(e, LIST_FAILED)),
        }
    }
}
