use crate::models::{FileInfo, FilePayload};
use crate::params::ParameterMap;
use crate::{Client, Result, envelope};

/// `file/*` endpoints (the account's file manager), obtained with [`Client::file`].
#[derive(Debug, Clone, Copy)]
pub struct FileApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn file(&self) -> FileApi<'_> {
        FileApi { client: self }
    }
}

impl FileApi<'_> {
    /// Store a file in the file manager.
    pub async fn upload(
        &self,
        file: FilePayload,
        expires_after_days: Option<i32>,
        enforce_unique_file_name: Option<bool>,
    ) -> Result<FileInfo> {
        let params = ParameterMap::new()
            .opt("expiresAfterDays", expires_after_days)
            .opt("enforceUniqueFileName", enforce_unique_file_name);
        let body = self
            .client
            .upload_files("file/upload", &[file], params)
            .await?;
        envelope::decode(&body)
    }

    /// Download a stored file by name.
    ///
    /// # Errors
    /// [`Error::NotFound`](crate::Error::NotFound) when the service returns an empty body.
    pub async fn download(&self, file_name: &str) -> Result<Option<FilePayload>> {
        let params = ParameterMap::new().param("fileName", file_name);
        self.client.download_file("file/download", params).await
    }

    pub async fn delete(&self, file_name: &str) -> Result<()> {
        let params = ParameterMap::new().param("fileName", file_name);
        self.client.request("file/delete", params).await
    }

    pub async fn list(&self) -> Result<Vec<FileInfo>> {
        self.client.request("file/list", ParameterMap::new()).await
    }
}
