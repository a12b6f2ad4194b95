use crate::models::{Attachment, FilePayload};
use crate::params::ParameterMap;
use crate::{Client, Result, envelope};

/// `attachment/*` endpoints, obtained with [`Client::attachment`].
#[derive(Debug, Clone, Copy)]
pub struct AttachmentApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn attachment(&self) -> AttachmentApi<'_> {
        AttachmentApi { client: self }
    }
}

impl AttachmentApi<'_> {
    /// Store a file for later use in outgoing messages.
    pub async fn upload(&self, file: FilePayload) -> Result<Attachment> {
        let body = self
            .client
            .upload_files("attachment/upload", &[file], ParameterMap::new())
            .await?;
        envelope::decode(&body)
    }

    /// Download an attachment of a sent message.
    ///
    /// Returns `Ok(None)` when the service answers without a file.
    pub async fn get(&self, file_name: &str, transaction_id: &str) -> Result<Option<FilePayload>> {
        let params = ParameterMap::new()
            .param("fileName", file_name)
            .param("transactionID", transaction_id);
        self.client.download_file("attachment/get", params).await
    }

    /// List the attachments of a message.
    pub async fn list(&self, message_id: &str) -> Result<Vec<Attachment>> {
        let params = ParameterMap::new().param("msgID", message_id);
        self.client.request("attachment/list", params).await
    }

    pub async fn remove(&self, attachment_id: &str) -> Result<()> {
        let params = ParameterMap::new().param("attachmentID", attachment_id);
        self.client.request("attachment/remove", params).await
    }
}
