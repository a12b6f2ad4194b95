use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A file sent to or received from the service.
///
/// For uploads only `content` and `file_name` are required; a missing
/// `content_type` is sent as `application/octet-stream`. Downloads populate
/// all three from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePayload {
    pub content: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: String,
}

impl FilePayload {
    /// Create a payload with no explicit content type.
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
            file_name: file_name.into(),
        }
    }

    /// Set the MIME type sent with the file.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Load a file from disk, naming it after the path's final component.
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, content))
    }
}

/// A file stored in the account's file manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    #[serde(rename = "filename")]
    pub file_name: String,
    pub size: i64,
    #[serde(rename = "dateadded")]
    pub date_added: Option<NaiveDateTime>,
    #[serde(rename = "expirationdate")]
    pub expiration_date: Option<NaiveDateTime>,
    #[serde(rename = "contenttype")]
    pub content_type: Option<String>,
}
